//! Character classes used by the lexer.

use esp_util::span::is_line_terminator;

/// Whether `c` can start an identifier.
///
/// ```
/// use esp_lex::unicode::is_id_start;
///
/// assert!(is_id_start('$'));
/// assert!(is_id_start('_'));
/// assert!(is_id_start('\u{3b1}'));
/// assert!(!is_id_start('1'));
/// ```
pub fn is_id_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

/// Whether `c` can continue an identifier.
pub fn is_id_continue(c: char) -> bool {
    is_id_start(c) || c.is_alphanumeric() || c == '\u{200c}' || c == '\u{200d}'
}

/// Whitespace that is not a line terminator.
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\t' | '\u{b}' | '\u{c}' | ' ' | '\u{a0}' | '\u{feff}' => true,
        c => c.is_whitespace() && !is_line_terminator(c),
    }
}

/// Value of a hexadecimal digit.
#[inline]
pub fn hex_value(c: char) -> Option<u32> {
    c.to_digit(16)
}

/// Value of an octal digit.
#[inline]
pub fn octal_value(c: char) -> Option<u32> {
    c.to_digit(8)
}
