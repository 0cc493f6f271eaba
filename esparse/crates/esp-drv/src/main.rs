//! esparse - parse ECMAScript files and report what was found.
//!
//! Exit status is 0 when every file parses, 1 when any file fails, and 2
//! for usage, configuration and I/O errors.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use esp_drv::{Config, DriverError, EmitType, FileConfig, Session};
use esp_util::interner_stats;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// esparse - an ECMAScript (KJS dialect) parser
#[derive(Parser, Debug)]
#[command(name = "esparse")]
#[command(author = "Fax Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Parse ECMAScript source files", long_about = None)]
struct Cli {
    /// Source files to parse
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// What to print for each file
    #[arg(long, value_enum)]
    emit: Option<EmitType>,

    /// Path to configuration file (default: ./esparse.toml if present)
    #[arg(short, long, env = "ESPARSE_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "ESPARSE_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "ESPARSE_NO_COLOR")]
    no_color: bool,

    /// Reject `import` declarations
    #[arg(long)]
    no_import: bool,

    /// Maximum statement and expression nesting
    #[arg(long)]
    max_depth: Option<usize>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Print interner statistics to stderr after the run
    #[arg(long)]
    stats: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let file_config = load_config(cli.config.as_deref())?;
    let config = build_config(&cli, &file_config)?;

    let session = Session::new(config).context("failed to load input files")?;
    let reports = session.run()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;
    for report in &reports {
        match &report.outcome {
            Ok(text) => writeln!(out, "{}", text)?,
            Err(DriverError::Parse { rendered, .. }) => {
                failed += 1;
                out.flush()?;
                eprint!("{}", rendered);
            }
            Err(other) => anyhow::bail!("{}", other),
        }
    }
    out.flush()?;

    if cli.stats {
        let stats = interner_stats();
        eprintln!(
            "{} file(s), {} failed, {} symbols interned ({} bytes)",
            reports.len(),
            failed,
            stats.symbols,
            stats.bytes
        );
    }

    Ok(if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Installs the tracing subscriber. `RUST_LOG` wins over `--verbose`.
///
/// Library crates log through `log`; the subscriber's log bridge picks
/// those records up too.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| DriverError::Config(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Loads the config file named on the command line, or `./esparse.toml`.
fn load_config(config_path: Option<&Path>) -> Result<FileConfig> {
    let config = match config_path {
        Some(path) => FileConfig::load_from_path(path)?,
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            FileConfig::discover(&cwd)?
        }
    };
    Ok(config)
}

/// Merges flags over the config file.
fn build_config(cli: &Cli, file: &FileConfig) -> Result<Config> {
    let mut parse = file.parse_options()?;
    if cli.no_import {
        parse = parse.with_import(false);
    }
    if let Some(depth) = cli.max_depth {
        anyhow::ensure!(depth > 0, "--max-depth must be at least 1");
        parse = parse.with_max_depth(depth);
    }

    Ok(Config {
        input_files: cli.files.clone(),
        emit: cli.emit.or(file.emit).unwrap_or_default(),
        parse,
        jobs: cli.jobs,
    })
}
