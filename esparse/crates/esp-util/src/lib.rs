//! esp-util - shared foundation types for the esparse front end.
//!
//! Everything in here is used by more than one phase:
//!
//! - [`Symbol`]: 4-byte handle to an interned string. Identifiers, decoded
//!   string literals and regex bodies are all interned, so the lexer can hand
//!   out `Copy` tokens and the AST can compare names with an integer compare.
//! - [`Span`]: byte range plus 1-based line/column of both ends.
//! - [`SourceFile`]: a named buffer with a precomputed line index, used to
//!   turn spans back into source lines for error rendering.
//! - [`Diagnostic`]: a rendered error report with a code, a locator and a
//!   caret underline.

pub mod diagnostic;
pub mod error;
pub mod span;
pub mod symbol;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Level};
pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, Span};
pub use symbol::{interner_stats, InternerStats, Symbol};
