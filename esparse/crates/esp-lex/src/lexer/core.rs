//! Core lexer implementation.

use esp_util::Span;

use crate::cursor::Cursor;
use crate::error::{LexError, LexErrorKind, LexResult};
use crate::keywords::KeywordTable;
use crate::token::{Token, TokenKind};
use crate::unicode::is_id_start;

/// Lexer for ECMAScript source.
///
/// Tokens are produced on demand by [`next_token`](Self::next_token). The
/// sequence is finite and ends with an `Eof` token; asking again after `Eof`
/// keeps returning `Eof`. The first error is terminal for the caller.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Reserved-word table, built by the caller.
    pub(crate) keywords: &'a KeywordTable,

    /// Byte offset where the current token starts.
    token_start: usize,

    /// Line where the current token starts (1-based).
    token_start_line: u32,

    /// Column where the current token starts (1-based).
    token_start_column: u32,

    /// Whether a line terminator was skipped before the current token.
    pub(crate) newline_before: bool,

    /// Set once the iterator has yielded `Eof` or an error.
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source` using the given keyword table.
    pub fn new(source: &'a str, keywords: &'a KeywordTable) -> Self {
        Self {
            cursor: Cursor::new(source),
            keywords,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            newline_before: false,
            finished: false,
        }
    }

    /// Returns the next token.
    ///
    /// Skips whitespace, line terminators and comments (recording whether a
    /// line was crossed), then dispatches on the first character.
    pub fn next_token(&mut self) -> LexResult<Token> {
        self.newline_before = false;
        self.skip_whitespace_and_comments()?;
        self.mark_token_start();

        if self.cursor.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof));
        }

        let kind = match self.cursor.current_char() {
            quote @ ('"' | '\'') => self.lex_string(quote)?,
            '0'..='9' => self.lex_number()?,
            '.' if self.cursor.peek_char(1).is_ascii_digit() => self.lex_number()?,
            c if is_id_start(c) || c == '\\' => self.lex_identifier()?,
            _ => self.lex_punctuator()?,
        };
        Ok(self.make_token(kind))
    }

    pub(crate) fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span from the current token start to the cursor.
    pub(crate) fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
            self.cursor.line(),
            self.cursor.column(),
        )
    }

    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, self.current_span(), self.newline_before)
    }

    pub(crate) fn error(&self, kind: LexErrorKind) -> LexError {
        LexError::new(kind, self.current_span())
    }

    /// The buffer being lexed.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Current line (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

/// Yields every token before `Eof`, or tokens up to and including the first
/// error.
impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.kind == TokenKind::Eof => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}
