//! `esparse.toml` loading.
//!
//! The file is optional. Every key is optional too; anything left out
//! keeps its built-in default, and command-line flags override the file.
//!
//! ```toml
//! emit = "ast"
//!
//! [parser]
//! allow_import = false
//! max_depth = 128
//! ```

use std::path::Path;

use esp_par::ParseOptions;
use serde::Deserialize;

use crate::error::{DriverError, Result};
use crate::EmitType;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "esparse.toml";

/// Contents of a config file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Output kind when `--emit` is not given.
    pub emit: Option<EmitType>,

    /// `[parser]` table.
    pub parser: ParserConfig,
}

/// Parser settings from the `[parser]` table.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ParserConfig {
    pub allow_import: Option<bool>,
    pub max_depth: Option<usize>,
}

impl FileConfig {
    /// Reads and parses the file at `path`.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DriverError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
            .map_err(|e| DriverError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Loads `esparse.toml` from `dir`, or the defaults when there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load_from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Parser options with this file's settings applied over the defaults.
    pub fn parse_options(&self) -> Result<ParseOptions> {
        let mut options = ParseOptions::default();
        if let Some(allow) = self.parser.allow_import {
            options = options.with_import(allow);
        }
        if let Some(depth) = self.parser.max_depth {
            if depth == 0 {
                return Err(DriverError::Config(
                    "parser.max_depth must be at least 1".to_string(),
                ));
            }
            options = options.with_max_depth(depth);
        }
        Ok(options)
    }
}
