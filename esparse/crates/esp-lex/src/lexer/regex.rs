//! Regular expression literals.
//!
//! The lexer never decides on its own that `/` starts a regex. The parser
//! knows when it is at the start of an expression and asks for a re-scan of
//! the `/` or `/=` token it is looking at.

use esp_util::span::is_line_terminator;
use esp_util::Symbol;

use crate::cursor::CursorSnapshot;
use crate::error::{LexErrorKind, LexResult};
use crate::token::{Token, TokenKind};
use crate::unicode::is_id_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Re-lexes `slash`, the most recently returned token, as a regular
    /// expression literal.
    ///
    /// The body runs to the first `/` that is neither escaped nor inside a
    /// character class. The pattern is kept verbatim; flags are the
    /// identifier characters after the closing slash. The new token keeps
    /// the `newline_before` flag of `slash`.
    ///
    /// ```
    /// use esp_lex::{KeywordTable, Lexer, TokenKind};
    ///
    /// let keywords = KeywordTable::new();
    /// let mut lexer = Lexer::new("/a[/]b/gi.x", &keywords);
    /// let slash = lexer.next_token().unwrap();
    /// assert_eq!(slash.kind, TokenKind::Slash);
    ///
    /// let regex = lexer.rescan_as_regex(&slash).unwrap();
    /// match regex.kind {
    ///     TokenKind::Regex { pattern, flags } => {
    ///         assert_eq!(pattern.as_str(), "a[/]b");
    ///         assert_eq!(flags.as_str(), "gi");
    ///     }
    ///     other => panic!("{:?}", other),
    /// }
    /// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Dot);
    /// ```
    pub fn rescan_as_regex(&mut self, slash: &Token) -> LexResult<Token> {
        debug_assert!(matches!(slash.kind, TokenKind::Slash | TokenKind::SlashEq));

        self.cursor.restore(CursorSnapshot {
            position: slash.span.start,
            line: slash.span.line,
            column: slash.span.column,
        });
        self.newline_before = slash.newline_before;
        self.mark_token_start();
        self.cursor.advance();

        let body_start = self.cursor.position();
        let mut in_class = false;
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedRegex));
            }
            let c = self.cursor.current_char();
            if is_line_terminator(c) {
                return Err(self.error(LexErrorKind::UnterminatedRegex));
            }
            match c {
                '\\' => {
                    self.cursor.advance();
                    if self.cursor.is_at_end() || is_line_terminator(self.cursor.current_char()) {
                        return Err(self.error(LexErrorKind::UnterminatedRegex));
                    }
                }
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => break,
                _ => {}
            }
            self.cursor.advance();
        }

        let pattern = self.cursor.slice_from(body_start);
        self.cursor.advance();

        let flags_start = self.cursor.position();
        while !self.cursor.is_at_end() && is_id_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let flags = self.cursor.slice_from(flags_start);

        log::trace!("rescanned regex /{}/{} at {}:{}", pattern, flags, slash.span.line, slash.span.column);

        Ok(self.make_token(TokenKind::Regex {
            pattern: Symbol::intern(pattern),
            flags: Symbol::intern(flags),
        }))
    }
}
