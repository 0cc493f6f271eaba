//! Error types for the driver.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong outside the parser itself, plus parse
/// failures already rendered against their source.
#[derive(Error, Debug)]
pub enum DriverError {
    /// An input or config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed config file or invalid option values.
    #[error("configuration error: {0}")]
    Config(String),

    /// A source file failed to lex or parse. `rendered` is the full
    /// diagnostic with the offending line.
    #[error("{} failed to parse", .path.display())]
    Parse { path: PathBuf, rendered: String },
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
