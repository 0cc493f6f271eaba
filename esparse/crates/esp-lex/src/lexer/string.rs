//! String literal lexing.
//!
//! The decoded value is built as UTF-16 code units so that `\u` escapes
//! forming a surrogate pair combine into one character. Unpaired surrogates
//! become U+FFFD.

use esp_util::span::is_line_terminator;
use esp_util::Symbol;

use crate::error::{LexErrorKind, LexResult};
use crate::token::TokenKind;
use crate::unicode::{hex_value, octal_value};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string delimited by `quote`.
    pub(crate) fn lex_string(&mut self, quote: char) -> LexResult<TokenKind> {
        self.cursor.advance();
        let mut units: Vec<u16> = Vec::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedString));
            }
            let c = self.cursor.current_char();
            if c == quote {
                self.cursor.advance();
                break;
            }
            if is_line_terminator(c) {
                return Err(self.error(LexErrorKind::UnterminatedString));
            }
            self.cursor.advance();
            if c == '\\' {
                self.lex_escape(&mut units)?;
            } else {
                push_char(&mut units, c);
            }
        }

        Ok(TokenKind::String(Symbol::intern(&String::from_utf16_lossy(
            &units,
        ))))
    }

    /// Decodes the escape after a backslash.
    fn lex_escape(&mut self, out: &mut Vec<u16>) -> LexResult<()> {
        if self.cursor.is_at_end() {
            return Err(self.error(LexErrorKind::UnterminatedString));
        }
        let c = self.cursor.current_char();

        // Line continuation: the backslash and terminator produce nothing.
        if is_line_terminator(c) {
            self.cursor.advance();
            if c == '\r' {
                self.cursor.match_char('\n');
            }
            return Ok(());
        }

        let unit = match c {
            'b' => 0x08,
            'f' => 0x0c,
            'n' => 0x0a,
            'r' => 0x0d,
            't' => 0x09,
            'v' => 0x0b,
            'x' => {
                self.cursor.advance();
                out.push(self.lex_hex_digits(2)? as u16);
                return Ok(());
            }
            'u' => {
                self.cursor.advance();
                out.push(self.lex_hex_digits(4)? as u16);
                return Ok(());
            }
            '0'..='7' => {
                out.push(self.lex_octal_escape());
                return Ok(());
            }
            other => {
                self.cursor.advance();
                push_char(out, other);
                return Ok(());
            }
        };
        self.cursor.advance();
        out.push(unit);
        Ok(())
    }

    /// Legacy octal escape: up to three digits when the first is 0-3, up to
    /// two otherwise, so the value never exceeds `\377`.
    fn lex_octal_escape(&mut self) -> u16 {
        let first = self.cursor.current_char();
        let max_len = if first <= '3' { 3 } else { 2 };
        let mut value = 0u16;
        for _ in 0..max_len {
            if self.cursor.is_at_end() {
                break;
            }
            match octal_value(self.cursor.current_char()) {
                Some(d) => {
                    value = value * 8 + d as u16;
                    self.cursor.advance();
                }
                None => break,
            }
        }
        value
    }

    /// Reads exactly `count` hex digits.
    pub(crate) fn lex_hex_digits(&mut self, count: usize) -> LexResult<u32> {
        let mut value = 0u32;
        for _ in 0..count {
            let digit = if self.cursor.is_at_end() {
                None
            } else {
                hex_value(self.cursor.current_char())
            };
            match digit {
                Some(d) => {
                    value = value * 16 + d;
                    self.cursor.advance();
                }
                None => return Err(self.error(LexErrorKind::InvalidEscape)),
            }
        }
        Ok(value)
    }
}

fn push_char(out: &mut Vec<u16>, c: char) {
    let mut buf = [0u16; 2];
    out.extend_from_slice(c.encode_utf16(&mut buf));
}

#[cfg(test)]
mod tests {
    use crate::{KeywordTable, LexErrorKind, Lexer, TokenKind};

    fn lex_str(source: &str) -> String {
        let keywords = KeywordTable::new();
        match Lexer::new(source, &keywords).next_token().unwrap().kind {
            TokenKind::String(s) => s.as_str().to_string(),
            other => panic!("expected string, got {:?}", other),
        }
    }

    fn lex_err(source: &str) -> LexErrorKind {
        let keywords = KeywordTable::new();
        Lexer::new(source, &keywords).next_token().unwrap_err().kind
    }

    #[test]
    fn test_both_quotes() {
        assert_eq!(lex_str("\"it's\""), "it's");
        assert_eq!(lex_str("'say \"hi\"'"), "say \"hi\"");
    }

    #[test]
    fn test_simple_escapes() {
        assert_eq!(lex_str(r#""\b\f\n\r\t\v""#), "\u{8}\u{c}\n\r\t\u{b}");
        assert_eq!(lex_str(r#"'\'\"\\'"#), "'\"\\");
    }

    #[test]
    fn test_unknown_escape_is_identity() {
        assert_eq!(lex_str(r#""\q\8""#), "q8");
    }

    #[test]
    fn test_hex_and_unicode_escapes() {
        assert_eq!(lex_str(r#""\x41\u00e9""#), "A\u{e9}");
    }

    #[test]
    fn test_surrogate_pair_combines() {
        assert_eq!(lex_str(r#""\ud83d\ude00""#), "\u{1f600}");
    }

    #[test]
    fn test_lone_surrogate_replaced() {
        assert_eq!(lex_str(r#""\ud800x""#), "\u{fffd}x");
    }

    #[test]
    fn test_octal_escapes() {
        assert_eq!(lex_str(r#""\0""#), "\0");
        assert_eq!(lex_str(r#""\101\7a""#), "A\u{7}a");
        assert_eq!(lex_str(r#""\477""#), "\u{27}7");
    }

    #[test]
    fn test_line_continuation() {
        assert_eq!(lex_str("'a\\\nb'"), "ab");
        assert_eq!(lex_str("'a\\\r\nb'"), "ab");
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(lex_err("'abc"), LexErrorKind::UnterminatedString);
        assert_eq!(lex_err("'ab\ncd'"), LexErrorKind::UnterminatedString);
        assert_eq!(lex_err("'ab\\"), LexErrorKind::UnterminatedString);
    }

    #[test]
    fn test_invalid_escapes() {
        assert_eq!(lex_err(r#""\x4""#), LexErrorKind::InvalidEscape);
        assert_eq!(lex_err(r#""\u12g4""#), LexErrorKind::InvalidEscape);
    }

    #[test]
    fn test_non_ascii_content() {
        assert_eq!(lex_str("'\u{65e5}\u{672c}'"), "\u{65e5}\u{672c}");
    }
}
