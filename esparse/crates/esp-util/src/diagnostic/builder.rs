//! Fluent construction of [`Diagnostic`]s.

use super::{Diagnostic, DiagnosticCode, Level};
use crate::Span;

/// Builder for constructing diagnostics with a fluent API.
///
/// ```
/// use esp_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use esp_util::Span;
///
/// let diag = DiagnosticBuilder::error("missing semicolon")
///     .code(DiagnosticCode::E_MISSING_SEMICOLON)
///     .span(Span::point(5, 1, 6))
///     .note("a line break or `}` would also end the statement")
///     .build();
/// assert_eq!(diag.notes.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            code: self.code,
            message: self.message,
            span: self.span,
            notes: self.notes,
        }
    }
}
