//! Identifier and keyword lexing.

use esp_util::Symbol;

use crate::error::{LexErrorKind, LexResult};
use crate::keywords::KeywordClass;
use crate::token::TokenKind;
use crate::unicode::{is_id_continue, is_id_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword or future reserved word.
    ///
    /// `\uXXXX` escapes are decoded. A name written with an escape is always
    /// an identifier, even if it spells a keyword.
    pub(crate) fn lex_identifier(&mut self) -> LexResult<TokenKind> {
        let start = self.cursor.position();
        // Only allocated once an escape shows up.
        let mut decoded: Option<String> = None;
        let mut first = true;

        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if c == '\\' {
                let prefix = self.cursor.slice_from(start);
                let buf = decoded.get_or_insert_with(|| prefix.to_owned());
                let ch = self.lex_identifier_escape(first)?;
                buf.push(ch);
            } else if (first && is_id_start(c)) || (!first && is_id_continue(c)) {
                self.cursor.advance();
                if let Some(buf) = decoded.as_mut() {
                    buf.push(c);
                }
            } else {
                break;
            }
            first = false;
        }

        if let Some(name) = decoded {
            return Ok(TokenKind::Ident(Symbol::intern(&name)));
        }

        let word = self.cursor.slice_from(start);
        Ok(match self.keywords.lookup(word) {
            Some(KeywordClass::Keyword(kind)) => kind,
            Some(KeywordClass::FutureReserved) => TokenKind::Reserved(Symbol::intern(word)),
            None => TokenKind::Ident(Symbol::intern(word)),
        })
    }

    /// Reads `\uXXXX` inside an identifier; the escaped character must itself
    /// be valid at that position.
    fn lex_identifier_escape(&mut self, first: bool) -> LexResult<char> {
        self.cursor.advance();
        if !self.cursor.match_char('u') {
            return Err(self.error(LexErrorKind::InvalidEscape));
        }
        let code = self.lex_hex_digits(4)?;
        match char::from_u32(code) {
            Some(c) if (first && is_id_start(c)) || (!first && is_id_continue(c)) => Ok(c),
            _ => Err(self.error(LexErrorKind::InvalidEscape)),
        }
    }
}
