//! CLI interface tests for the `esparse` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn esparse() -> Command {
    let mut cmd = Command::cargo_bin("esparse").expect("binary should build");
    cmd.env_remove("RUST_LOG")
        .env_remove("ESPARSE_CONFIG")
        .env_remove("ESPARSE_VERBOSE");
    cmd
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("failed to write fixture");
    path
}

#[test]
fn test_cli_help() {
    esparse()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("--emit")));
}

#[test]
fn test_cli_version() {
    esparse()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("esparse"));
}

#[test]
fn test_cli_requires_files() {
    esparse().assert().code(2);
}

#[test]
fn test_cli_summary_default() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "a.js", "var a = 1\nfunction f() { return a }\n");

    esparse()
        .current_dir(dir.path())
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 statement(s)"));
}

#[test]
fn test_cli_emit_ast() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "a.js", "x = 1 + 2 * 3");

    esparse()
        .current_dir(dir.path())
        .args(["--emit", "ast"])
        .arg(&file)
        .assert()
        .success()
        .stdout("(= x (+ 1 (* 2 3)))\n");
}

#[test]
fn test_cli_emit_tokens() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "a.js", "a /= 2");

    esparse()
        .current_dir(dir.path())
        .args(["--emit", "tokens"])
        .arg(&file)
        .assert()
        .success()
        .stdout("1:1 a\n1:3 /=\n1:6 2\n");
}

#[test]
fn test_cli_parse_error_exit_code() {
    let dir = TempDir::new().unwrap();
    let good = write_file(dir.path(), "good.js", "a;");
    let bad = write_file(dir.path(), "bad.js", "var = 1;");

    esparse()
        .current_dir(dir.path())
        .arg(&good)
        .arg(&bad)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("1 statement(s)"))
        .stderr(predicate::str::contains("error[E0201]").and(predicate::str::contains(":1:5")));
}

#[test]
fn test_cli_missing_file() {
    let dir = TempDir::new().unwrap();

    esparse()
        .current_dir(dir.path())
        .arg(dir.path().join("nope.js"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_cli_no_import_flag() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "a.js", "import a.b.*;");

    esparse()
        .current_dir(dir.path())
        .arg(&file)
        .assert()
        .success();

    esparse()
        .current_dir(dir.path())
        .arg("--no-import")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("import declarations are disabled"));
}

#[test]
fn test_cli_config_file_discovered() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "esparse.toml", "emit = \"ast\"\n[parser]\nallow_import = false\n");
    let file = write_file(dir.path(), "a.js", "a.b");

    esparse()
        .current_dir(dir.path())
        .arg(&file)
        .assert()
        .success()
        .stdout("(. a b)\n");

    let import = write_file(dir.path(), "i.js", "import x = a.b;");
    esparse()
        .current_dir(dir.path())
        .arg(&import)
        .assert()
        .code(1);
}

#[test]
fn test_cli_flag_overrides_config() {
    let dir = TempDir::new().unwrap();
    let config = write_file(dir.path(), "custom.toml", "emit = \"ast\"\n");
    let file = write_file(dir.path(), "a.js", "a");

    esparse()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--emit", "summary"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 statement(s)"));
}

#[test]
fn test_cli_bad_config() {
    let dir = TempDir::new().unwrap();
    write_file(dir.path(), "esparse.toml", "emit = 3\n");
    let file = write_file(dir.path(), "a.js", "a");

    esparse()
        .current_dir(dir.path())
        .arg(&file)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("configuration error"));
}

#[test]
fn test_cli_max_depth() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "deep.js", &format!("{}1{}", "[".repeat(50), "]".repeat(50)));

    esparse()
        .current_dir(dir.path())
        .args(["--max-depth", "10"])
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("E0210"));

    esparse()
        .current_dir(dir.path())
        .arg(&file)
        .assert()
        .success();
}

#[test]
fn test_cli_output_in_input_order() {
    let dir = TempDir::new().unwrap();
    let files: Vec<PathBuf> = (0..12)
        .map(|i| write_file(dir.path(), &format!("f{:02}.js", i), &"a;\n".repeat(i + 1)))
        .collect();

    let output = esparse()
        .current_dir(dir.path())
        .args(["--jobs", "4"])
        .args(&files)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let counts: Vec<String> = stdout
        .lines()
        .map(|l| l.rsplit(": ").next().unwrap_or("").to_string())
        .collect();
    let expected: Vec<String> = (1..=12).map(|n| format!("{} statement(s)", n)).collect();
    assert_eq!(counts, expected);
}

#[test]
fn test_cli_stats() {
    let dir = TempDir::new().unwrap();
    let file = write_file(dir.path(), "a.js", "var zz_stats_marker = 1");

    esparse()
        .current_dir(dir.path())
        .arg("--stats")
        .arg(&file)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 file(s), 0 failed"));
}
