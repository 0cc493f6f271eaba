//! Numeric literal lexing.
//!
//! Decimal literals (with fraction and exponent), hexadecimal `0x` literals
//! and legacy octal literals (`017`). Values are decoded to `f64` here.

use crate::error::{LexErrorKind, LexResult};
use crate::token::TokenKind;
use crate::unicode::{is_id_continue, is_id_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a numeric literal starting at a digit or at `.` followed by a
    /// digit.
    pub(crate) fn lex_number(&mut self) -> LexResult<TokenKind> {
        let start = self.cursor.position();
        let first = self.cursor.current_char();
        let second = self.cursor.peek_char(1);

        let value = if first == '0' && matches!(second, 'x' | 'X') {
            self.cursor.advance();
            self.cursor.advance();
            self.lex_radix_digits(16)?
        } else if first == '0' && second.is_ascii_digit() && self.is_legacy_octal() {
            self.cursor.advance();
            self.lex_radix_digits(8)?
        } else {
            self.lex_decimal(start)?
        };

        // A literal may not run straight into an identifier or digit: `3in`, `0x1g`.
        if !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if is_id_start(c) || c.is_ascii_digit() || c == '\\' {
                while !self.cursor.is_at_end() && is_id_continue(self.cursor.current_char()) {
                    self.cursor.advance();
                }
                return Err(self.error(LexErrorKind::InvalidNumber));
            }
        }

        Ok(TokenKind::Number(value))
    }

    /// A leading `0` followed only by octal digits. `08` and `09` are decimal.
    fn is_legacy_octal(&self) -> bool {
        self.cursor
            .remaining()
            .chars()
            .skip(1)
            .take_while(|c| c.is_ascii_digit())
            .all(|c| c < '8')
    }

    /// Reads one or more digits in `radix`.
    fn lex_radix_digits(&mut self, radix: u32) -> LexResult<f64> {
        let mut value = 0f64;
        let mut digits = 0usize;
        while !self.cursor.is_at_end() {
            match self.cursor.current_char().to_digit(radix) {
                Some(d) => {
                    value = value * f64::from(radix) + f64::from(d);
                    digits += 1;
                    self.cursor.advance();
                }
                None => break,
            }
        }
        if digits == 0 {
            return Err(self.error(LexErrorKind::InvalidNumber));
        }
        Ok(value)
    }

    fn lex_decimal(&mut self, start: usize) -> LexResult<f64> {
        self.skip_decimal_digits();
        if self.cursor.current_char() == '.' {
            self.cursor.advance();
            self.skip_decimal_digits();
        }
        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            if self.skip_decimal_digits() == 0 {
                return Err(self.error(LexErrorKind::InvalidNumber));
            }
        }
        self.cursor
            .slice_from(start)
            .parse::<f64>()
            .map_err(|_| self.error(LexErrorKind::InvalidNumber))
    }

    fn skip_decimal_digits(&mut self) -> usize {
        let mut count = 0;
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
            count += 1;
        }
        count
    }
}
