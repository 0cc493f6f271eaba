//! Diagnostic codes.
//!
//! Codes follow the format `{prefix}{number:04}`. Lexer errors live in the
//! `E01xx` range and parser errors in `E02xx`.

use std::fmt;

/// A unique code identifying a diagnostic message.
///
/// ```
/// use esp_util::diagnostic::DiagnosticCode;
///
/// assert_eq!(DiagnosticCode::E_MISSING_SEMICOLON.as_str(), "E0202");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Full code string, e.g. `E0101`.
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER (E0101-E0199)
    // =========================================================================

    pub const E_UNEXPECTED_CHAR: Self = Self::new("E", 101);
    pub const E_UNTERMINATED_STRING: Self = Self::new("E", 102);
    pub const E_UNTERMINATED_REGEX: Self = Self::new("E", 103);
    pub const E_UNTERMINATED_COMMENT: Self = Self::new("E", 104);
    pub const E_INVALID_ESCAPE: Self = Self::new("E", 105);
    pub const E_INVALID_NUMBER: Self = Self::new("E", 106);

    // =========================================================================
    // PARSER (E0201-E0299)
    // =========================================================================

    pub const E_UNEXPECTED_TOKEN: Self = Self::new("E", 201);
    pub const E_MISSING_SEMICOLON: Self = Self::new("E", 202);
    pub const E_INVALID_FOR_IN_TARGET: Self = Self::new("E", 203);
    pub const E_INVALID_ASSIGNMENT_TARGET: Self = Self::new("E", 204);
    pub const E_NEWLINE_AFTER_THROW: Self = Self::new("E", 205);
    pub const E_FUNCTION_IN_STATEMENT_POSITION: Self = Self::new("E", 206);
    pub const E_DUPLICATE_DEFAULT: Self = Self::new("E", 207);
    pub const E_INVALID_ACCESSOR: Self = Self::new("E", 208);
    pub const E_IMPORT_DISABLED: Self = Self::new("E", 209);
    pub const E_NESTING_TOO_DEEP: Self = Self::new("E", 210);
    pub const E_RESERVED_WORD: Self = Self::new("E", 211);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
