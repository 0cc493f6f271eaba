//! esp-drv - driver for the esparse front end.
//!
//! Loads source files, parses them in parallel and renders the requested
//! output for each one. The `esparse` binary is a thin clap layer over
//! [`Session`].

pub mod config;
pub mod error;

pub use config::{FileConfig, ParserConfig, CONFIG_FILE_NAME};
pub use error::{DriverError, Result};

use std::path::{Path, PathBuf};

use esp_lex::{KeywordTable, Lexer, TokenKind};
use esp_par::{dump, ParseOptions, Parser};
use esp_util::SourceFile;
use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, info};

/// Stack for worker threads before the parser spills onto heap segments.
const WORKER_STACK_SIZE: usize = 32 * 1024 * 1024;

/// What to print for each file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmitType {
    /// One token per line: `line:column kind`
    Tokens,
    /// S-expression dump, one top-level statement per line
    Ast,
    /// Statement count per file
    #[default]
    Summary,
}

/// Configuration for a run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input_files: Vec<PathBuf>,
    pub emit: EmitType,
    pub parse: ParseOptions,
    /// Worker threads; rayon's default when `None`
    pub jobs: Option<usize>,
}

/// Outcome for one input file.
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    /// Rendered output, or [`DriverError::Parse`] with the diagnostic.
    pub outcome: Result<String>,
}

impl FileReport {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Loaded sources plus everything needed to process them.
pub struct Session {
    pub config: Config,
    keywords: KeywordTable,
    sources: Vec<(PathBuf, SourceFile)>,
}

impl Session {
    /// Reads every input file.
    pub fn new(config: Config) -> Result<Self> {
        let mut sources = Vec::with_capacity(config.input_files.len());
        for path in &config.input_files {
            let content = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
                path: path.clone(),
                source,
            })?;
            sources.push((path.clone(), content));
        }
        Ok(Self::from_sources(config, sources))
    }

    /// Builds a session over in-memory sources; `config.input_files` is
    /// ignored.
    pub fn from_sources(config: Config, sources: Vec<(PathBuf, String)>) -> Self {
        let sources = sources
            .into_iter()
            .map(|(path, text)| {
                let file = SourceFile::new(path.display().to_string(), text);
                (path, file)
            })
            .collect();
        Self {
            config,
            keywords: KeywordTable::new(),
            sources,
        }
    }

    /// Processes every file. Reports come back in input order.
    pub fn run(&self) -> Result<Vec<FileReport>> {
        let mut builder = rayon::ThreadPoolBuilder::new().stack_size(WORKER_STACK_SIZE);
        if let Some(jobs) = self.config.jobs {
            if jobs == 0 {
                return Err(DriverError::Config("--jobs must be at least 1".to_string()));
            }
            builder = builder.num_threads(jobs);
        }
        let pool = builder
            .build()
            .map_err(|e| DriverError::Config(format!("cannot start worker threads: {}", e)))?;

        info!(
            "processing {} file(s) on {} thread(s)",
            self.sources.len(),
            pool.current_num_threads()
        );

        let reports: Vec<FileReport> = pool.install(|| {
            self.sources
                .par_iter()
                .map(|(path, file)| FileReport {
                    path: path.clone(),
                    outcome: self.process(path, file),
                })
                .collect()
        });

        let failed = reports.iter().filter(|r| !r.is_ok()).count();
        info!("{} file(s) ok, {} failed", reports.len() - failed, failed);
        Ok(reports)
    }

    fn process(&self, path: &Path, file: &SourceFile) -> Result<String> {
        debug!("processing {}", path.display());
        let fail = |diagnostic: esp_util::Diagnostic| DriverError::Parse {
            path: path.to_path_buf(),
            rendered: diagnostic.render(file),
        };

        match self.config.emit {
            EmitType::Tokens => {
                let mut lexer = Lexer::new(file.src(), &self.keywords);
                let mut lines = Vec::new();
                loop {
                    let token = lexer.next_token().map_err(|e| fail(e.to_diagnostic()))?;
                    if token.kind == TokenKind::Eof {
                        break;
                    }
                    lines.push(format!(
                        "{}:{} {}",
                        token.span.line, token.span.column, token.kind
                    ));
                }
                Ok(lines.join("\n"))
            }
            EmitType::Ast | EmitType::Summary => {
                let program = Parser::new(file.src(), &self.keywords, self.config.parse)
                    .parse_program()
                    .map_err(|e| fail(e.to_diagnostic()))?;
                if self.config.emit == EmitType::Ast {
                    Ok(dump::dump_program(&program))
                } else {
                    Ok(format!(
                        "{}: {} statement(s)",
                        path.display(),
                        program.body.len()
                    ))
                }
            }
        }
    }
}
