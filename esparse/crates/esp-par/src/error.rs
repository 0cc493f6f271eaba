//! Parse errors.
//!
//! Parsing stops at the first error. A [`ParseError`] is either the lexer's
//! error passed through or a [`SyntaxError`] raised by the grammar.

use esp_lex::LexError;
use esp_util::{Diagnostic, DiagnosticCode, Span};
use thiserror::Error;

/// What the grammar rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// A token that cannot appear here.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { found: String, expected: String },

    /// Two statements on one line without a `;` between them.
    #[error("missing ';' before {found}")]
    MissingSemicolon { found: String },

    /// `for (x + 1 in o)` and similar.
    #[error("invalid left-hand side in for-in")]
    InvalidForInTarget,

    /// `1 = 2`, `a + b = c`, `++x = 1`.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,

    /// `throw` and its operand on different lines.
    #[error("line break after 'throw'")]
    NewlineAfterThrow,

    /// `if (x) function f() {}`.
    #[error("function declaration not allowed in statement position")]
    FunctionInStatementPosition,

    /// A second `default:` in one switch.
    #[error("more than one default clause in switch")]
    DuplicateDefault,

    /// A getter with parameters, or a setter without exactly one.
    #[error("{0}")]
    InvalidAccessor(&'static str),

    /// `import` with imports turned off.
    #[error("import declarations are disabled")]
    ImportDisabled,

    /// Statements and expressions nested past the configured limit.
    #[error("nesting deeper than {0} levels")]
    NestingTooDeep(usize),

    /// A future reserved word used as an identifier.
    #[error("'{0}' is a reserved word")]
    ReservedWord(String),
}

impl SyntaxErrorKind {
    pub fn code(&self) -> DiagnosticCode {
        match self {
            SyntaxErrorKind::UnexpectedToken { .. } => DiagnosticCode::E_UNEXPECTED_TOKEN,
            SyntaxErrorKind::MissingSemicolon { .. } => DiagnosticCode::E_MISSING_SEMICOLON,
            SyntaxErrorKind::InvalidForInTarget => DiagnosticCode::E_INVALID_FOR_IN_TARGET,
            SyntaxErrorKind::InvalidAssignmentTarget => {
                DiagnosticCode::E_INVALID_ASSIGNMENT_TARGET
            }
            SyntaxErrorKind::NewlineAfterThrow => DiagnosticCode::E_NEWLINE_AFTER_THROW,
            SyntaxErrorKind::FunctionInStatementPosition => {
                DiagnosticCode::E_FUNCTION_IN_STATEMENT_POSITION
            }
            SyntaxErrorKind::DuplicateDefault => DiagnosticCode::E_DUPLICATE_DEFAULT,
            SyntaxErrorKind::InvalidAccessor(_) => DiagnosticCode::E_INVALID_ACCESSOR,
            SyntaxErrorKind::ImportDisabled => DiagnosticCode::E_IMPORT_DISABLED,
            SyntaxErrorKind::NestingTooDeep(_) => DiagnosticCode::E_NESTING_TOO_DEEP,
            SyntaxErrorKind::ReservedWord(_) => DiagnosticCode::E_RESERVED_WORD,
        }
    }
}

/// A grammar error at a source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SyntaxError: {kind} at line {}, column {}", .span.line, .span.column)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn line(&self) -> u32 {
        self.span.line
    }

    pub fn column(&self) -> u32 {
        self.span.column
    }
}

/// Any error that ends a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    /// Where the error was detected.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lex(e) => e.span,
            ParseError::Syntax(e) => e.span,
        }
    }

    /// 1-based line.
    pub fn line(&self) -> u32 {
        self.span().line
    }

    /// 1-based column.
    pub fn column(&self) -> u32 {
        self.span().column
    }

    /// The syntax error kind, if this is not a lexical error.
    pub fn syntax_kind(&self) -> Option<&SyntaxErrorKind> {
        match self {
            ParseError::Syntax(e) => Some(&e.kind),
            ParseError::Lex(_) => None,
        }
    }

    /// Converts into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ParseError::Lex(e) => e.to_diagnostic(),
            ParseError::Syntax(e) => Diagnostic::error(e.kind.to_string())
                .code(e.kind.code())
                .span(e.span)
                .build(),
        }
    }
}

/// Result type alias for parsing.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
