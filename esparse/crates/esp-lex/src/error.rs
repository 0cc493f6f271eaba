//! Lexical errors.

use esp_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// What went wrong while lexing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A string literal hit a line terminator or the end of input.
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A regex literal hit a line terminator or the end of input.
    #[error("unterminated regular expression literal")]
    UnterminatedRegex,

    /// `/*` without a matching `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,

    /// Malformed `\x` or `\u` escape.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// Malformed numeric literal, or one directly followed by an identifier.
    #[error("invalid numeric literal")]
    InvalidNumber,

    /// A character that cannot start any token.
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
}

impl LexErrorKind {
    /// Diagnostic code for this kind.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexErrorKind::UnterminatedString => DiagnosticCode::E_UNTERMINATED_STRING,
            LexErrorKind::UnterminatedRegex => DiagnosticCode::E_UNTERMINATED_REGEX,
            LexErrorKind::UnterminatedComment => DiagnosticCode::E_UNTERMINATED_COMMENT,
            LexErrorKind::InvalidEscape => DiagnosticCode::E_INVALID_ESCAPE,
            LexErrorKind::InvalidNumber => DiagnosticCode::E_INVALID_NUMBER,
            LexErrorKind::UnexpectedChar(_) => DiagnosticCode::E_UNEXPECTED_CHAR,
        }
    }
}

/// A lexical error and the source range it was detected in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("LexError: {kind} at line {}, column {}", .span.line, .span.column)]
pub struct LexError {
    /// What went wrong.
    pub kind: LexErrorKind,
    /// From the start of the offending token to where lexing stopped.
    pub span: Span,
}

impl LexError {
    /// Creates an error.
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// 1-based line.
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based column.
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Converts into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.kind.to_string())
            .code(self.kind.code())
            .span(self.span)
            .build()
    }
}

/// Result type alias for lexing.
pub type LexResult<T> = std::result::Result<T, LexError>;
