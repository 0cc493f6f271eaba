//! Whitespace and comment skipping.

use esp_util::span::is_line_terminator;

use crate::error::{LexErrorKind, LexResult};
use crate::unicode::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace, line terminators and comments.
    ///
    /// Sets `newline_before` when a line terminator is crossed, including one
    /// inside a block comment.
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> LexResult<()> {
        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }
            let c = self.cursor.current_char();
            if is_line_terminator(c) {
                self.newline_before = true;
                self.cursor.advance();
            } else if is_whitespace(c) {
                self.cursor.advance();
            } else if c == '/' && self.cursor.peek_char(1) == '/' {
                self.skip_line_comment();
            } else if c == '/' && self.cursor.peek_char(1) == '*' {
                self.skip_block_comment()?;
            } else {
                return Ok(());
            }
        }
    }

    /// Skips `//` up to, not including, the line terminator.
    fn skip_line_comment(&mut self) {
        while !self.cursor.is_at_end() && !is_line_terminator(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }

    /// Skips a `/* ... */` comment. Block comments do not nest.
    fn skip_block_comment(&mut self) -> LexResult<()> {
        self.mark_token_start();
        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error(LexErrorKind::UnterminatedComment));
            }
            let c = self.cursor.current_char();
            if c == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            if is_line_terminator(c) {
                self.newline_before = true;
            }
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{KeywordTable, LexErrorKind, Lexer, TokenKind};

    #[test]
    fn test_skip_line_comment() {
        let keywords = KeywordTable::new();
        let mut lexer = Lexer::new("// comment\nx", &keywords);
        let tok = lexer.next_token().unwrap();
        assert!(matches!(tok.kind, TokenKind::Ident(_)));
        assert!(tok.newline_before);
    }

    #[test]
    fn test_block_comment_on_one_line_is_not_a_newline() {
        let keywords = KeywordTable::new();
        let mut lexer = Lexer::new("a /* c */ b", &keywords);
        lexer.next_token().unwrap();
        assert!(!lexer.next_token().unwrap().newline_before);
    }

    #[test]
    fn test_multiline_block_comment_counts_as_newline() {
        let keywords = KeywordTable::new();
        let mut lexer = Lexer::new("a /* \n */ b", &keywords);
        lexer.next_token().unwrap();
        assert!(lexer.next_token().unwrap().newline_before);
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let keywords = KeywordTable::new();
        let mut lexer = Lexer::new("/* /* */ x", &keywords);
        assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Ident(_)));
    }

    #[test]
    fn test_unterminated_block_comment() {
        let keywords = KeywordTable::new();
        let mut lexer = Lexer::new("x /* never closed", &keywords);
        lexer.next_token().unwrap();
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.kind, LexErrorKind::UnterminatedComment);
        assert_eq!((err.line(), err.column()), (1, 3));
    }
}
