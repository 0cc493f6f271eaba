//! Punctuator lexing.
//!
//! Longest match wins: `>>>=` before `>>>` before `>>` before `>`.

use crate::error::{LexErrorKind, LexResult};
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a punctuator, or fails on a character that starts no token.
    pub(crate) fn lex_punctuator(&mut self) -> LexResult<TokenKind> {
        let c = self.cursor.current_char();
        self.cursor.advance();

        let kind = match c {
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '.' => TokenKind::Dot,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            '~' => TokenKind::Tilde,
            '<' => {
                if self.cursor.match_char('<') {
                    self.with_eq(TokenKind::Shl, TokenKind::ShlEq)
                } else {
                    self.with_eq(TokenKind::Lt, TokenKind::LtEq)
                }
            }
            '>' => {
                if self.cursor.match_char('>') {
                    if self.cursor.match_char('>') {
                        self.with_eq(TokenKind::UShr, TokenKind::UShrEq)
                    } else {
                        self.with_eq(TokenKind::Shr, TokenKind::ShrEq)
                    }
                } else {
                    self.with_eq(TokenKind::Gt, TokenKind::GtEq)
                }
            }
            '=' => {
                if self.cursor.match_char('=') {
                    self.with_eq(TokenKind::EqEq, TokenKind::EqEqEq)
                } else {
                    TokenKind::Eq
                }
            }
            '!' => {
                if self.cursor.match_char('=') {
                    self.with_eq(TokenKind::NotEq, TokenKind::NotEqEq)
                } else {
                    TokenKind::Bang
                }
            }
            '+' => {
                if self.cursor.match_char('+') {
                    TokenKind::PlusPlus
                } else {
                    self.with_eq(TokenKind::Plus, TokenKind::PlusEq)
                }
            }
            '-' => {
                if self.cursor.match_char('-') {
                    TokenKind::MinusMinus
                } else {
                    self.with_eq(TokenKind::Minus, TokenKind::MinusEq)
                }
            }
            '&' => {
                if self.cursor.match_char('&') {
                    TokenKind::AmpAmp
                } else {
                    self.with_eq(TokenKind::Amp, TokenKind::AmpEq)
                }
            }
            '|' => {
                if self.cursor.match_char('|') {
                    TokenKind::PipePipe
                } else {
                    self.with_eq(TokenKind::Pipe, TokenKind::PipeEq)
                }
            }
            '*' => self.with_eq(TokenKind::Star, TokenKind::StarEq),
            '%' => self.with_eq(TokenKind::Percent, TokenKind::PercentEq),
            '^' => self.with_eq(TokenKind::Caret, TokenKind::CaretEq),
            '/' => self.with_eq(TokenKind::Slash, TokenKind::SlashEq),
            other => return Err(self.error(LexErrorKind::UnexpectedChar(other))),
        };
        Ok(kind)
    }

    /// `plain`, or `compound` if a `=` follows.
    #[inline]
    fn with_eq(&mut self, plain: TokenKind, compound: TokenKind) -> TokenKind {
        if self.cursor.match_char('=') {
            compound
        } else {
            plain
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{KeywordTable, LexErrorKind, Lexer, TokenKind};

    fn kinds(source: &str) -> Vec<TokenKind> {
        let keywords = KeywordTable::new();
        Lexer::new(source, &keywords)
            .map(|t| t.unwrap().kind)
            .collect()
    }

    #[test]
    fn test_shift_family() {
        assert_eq!(
            kinds("< << <<= <= > >> >>= >>> >>>= >="),
            vec![
                TokenKind::Lt,
                TokenKind::Shl,
                TokenKind::ShlEq,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::Shr,
                TokenKind::ShrEq,
                TokenKind::UShr,
                TokenKind::UShrEq,
                TokenKind::GtEq,
            ]
        );
    }

    #[test]
    fn test_equality_family() {
        assert_eq!(
            kinds("= == === ! != !=="),
            vec![
                TokenKind::Eq,
                TokenKind::EqEq,
                TokenKind::EqEqEq,
                TokenKind::Bang,
                TokenKind::NotEq,
                TokenKind::NotEqEq,
            ]
        );
    }

    #[test]
    fn test_arithmetic_and_logical() {
        assert_eq!(
            kinds("+ ++ += - -- -= * *= % %= & && &= | || |= ^ ^= ~"),
            vec![
                TokenKind::Plus,
                TokenKind::PlusPlus,
                TokenKind::PlusEq,
                TokenKind::Minus,
                TokenKind::MinusMinus,
                TokenKind::MinusEq,
                TokenKind::Star,
                TokenKind::StarEq,
                TokenKind::Percent,
                TokenKind::PercentEq,
                TokenKind::Amp,
                TokenKind::AmpAmp,
                TokenKind::AmpEq,
                TokenKind::Pipe,
                TokenKind::PipePipe,
                TokenKind::PipeEq,
                TokenKind::Caret,
                TokenKind::CaretEq,
                TokenKind::Tilde,
            ]
        );
    }

    #[test]
    fn test_slash_is_division_until_rescanned() {
        assert_eq!(kinds("/ /="), vec![TokenKind::Slash, TokenKind::SlashEq]);
    }

    #[test]
    fn test_greedy_plus() {
        assert_eq!(
            kinds("a+++b"),
            vec![
                TokenKind::Ident(esp_util::Symbol::intern("a")),
                TokenKind::PlusPlus,
                TokenKind::Plus,
                TokenKind::Ident(esp_util::Symbol::intern("b")),
            ]
        );
    }

    #[test]
    fn test_unexpected_char() {
        let keywords = KeywordTable::new();
        let err = Lexer::new("@", &keywords).next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnexpectedChar('@'));
        assert_eq!(err.span.len(), 1);
    }
}
