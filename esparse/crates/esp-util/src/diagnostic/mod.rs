//! Diagnostic module - error reports rendered against a source file.
//!
//! The parser fails on the first error, so there is no accumulating handler:
//! errors convert into a single [`Diagnostic`] which the driver renders.
//!
//! ```
//! use esp_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
//! use esp_util::{SourceFile, Span};
//!
//! let file = SourceFile::new("a.js", "a = 1 b");
//! let diag = DiagnosticBuilder::error("missing semicolon")
//!     .code(DiagnosticCode::E_MISSING_SEMICOLON)
//!     .span(Span::new(6, 7, 1, 7, 1, 8))
//!     .build();
//! let out = diag.render(&file);
//! assert!(out.starts_with("error[E0202]: missing semicolon"));
//! assert!(out.contains("--> a.js:1:7"));
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

use crate::span::SourceFile;
use crate::Span;
use std::fmt;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Error => "error",
        })
    }
}

/// A single report: severity, optional code, message, location and notes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub code: Option<DiagnosticCode>,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message)
    }

    /// Renders the report with a locator line and a caret underline.
    ///
    /// Spans that do not map onto `file` (dummy spans, stale offsets) render
    /// the header and locator only.
    pub fn render(&self, file: &SourceFile) -> String {
        Rendered { diag: self, file }.to_string()
    }
}

/// A diagnostic paired with the file it points into.
struct Rendered<'a> {
    diag: &'a Diagnostic,
    file: &'a SourceFile,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rendered { diag, file } = self;
        match diag.code {
            Some(code) => writeln!(f, "{}[{}]: {}", diag.level, code, diag.message)?,
            None => writeln!(f, "{}: {}", diag.level, diag.message)?,
        }
        writeln!(
            f,
            "  --> {}:{}:{}",
            file.name(),
            diag.span.line,
            diag.span.column
        )?;

        if let Some(text) = file.line_text(diag.span.line as usize) {
            let gutter = diag.span.line.to_string().len().max(2);
            let start = diag.span.column.saturating_sub(1) as usize;
            let width = if diag.span.end_line == diag.span.line {
                diag.span.end_column.saturating_sub(diag.span.column) as usize
            } else {
                text.chars().count().saturating_sub(start)
            };
            writeln!(f, "{:>gutter$} |", "")?;
            writeln!(f, "{:>gutter$} | {}", diag.span.line, text)?;
            writeln!(
                f,
                "{:>gutter$} | {}{}",
                "",
                " ".repeat(start),
                "^".repeat(width.max(1))
            )?;
        }

        for note in &diag.notes {
            writeln!(f, "  = note: {}", note)?;
        }
        Ok(())
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} at line {}, column {}",
            self.level, self.message, self.span.line, self.span.column
        )
    }
}
