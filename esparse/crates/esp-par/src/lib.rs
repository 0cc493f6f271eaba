//! esp-par - parser for ECMAScript source.
//!
//! A recursive descent parser for statements and a precedence-climbing
//! parser for binary expressions. It pulls tokens from an
//! [`esp_lex::Lexer`] one at a time and builds a [`Program`] tree.
//!
//! # Overview
//!
//! The grammar has a few context-dependent corners, all handled here
//! rather than in the lexer:
//!
//! - **Regex vs division.** A `/` or `/=` token seen where an expression
//!   must start is re-read as a regular expression literal.
//! - **Automatic semicolon insertion.** A statement may end without `;` when
//!   the next token is `}`, the end of input, or on a new line. See
//!   [`asi`](crate::asi).
//! - **Restricted productions.** `return`, `break`, `continue` and postfix
//!   `++`/`--` stop at a line terminator. `throw` followed by a line break
//!   is an error.
//! - **`in` inside `for` heads.** The initializer of a `for` is parsed with
//!   `in` disabled so that `for (x in o)` is recognized.
//!
//! Parsing stops at the first error, which is returned as a [`ParseError`]
//! carrying a line and column.
//!
//! # Example
//!
//! ```
//! use esp_par::{dump, parse_program};
//!
//! let program = parse_program("var a = 1 + 2 * 3").unwrap();
//! assert_eq!(program.body.len(), 1);
//! assert_eq!(dump::dump_program(&program), "(var (= a (+ 1 (* 2 3))))");
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(test)]
mod edge_cases;

pub mod asi;
pub mod ast;
pub mod dump;
pub mod error;
pub mod expr;
pub mod items;
pub mod options;
pub mod stmt;

pub use ast::*;
pub use error::{ParseError, ParseResult, SyntaxError, SyntaxErrorKind};
pub use options::ParseOptions;

use esp_lex::{KeywordTable, Lexer, Token, TokenKind};
use esp_util::Span;
use log::debug;

/// Remaining stack below which the parser switches to a new segment.
const STACK_RED_ZONE: usize = 128 * 1024;
/// Size of each additional stack segment.
const STACK_SEGMENT_SIZE: usize = 1024 * 1024;

/// Parses `source` with default options.
pub fn parse_program(source: &str) -> ParseResult<Program> {
    let keywords = KeywordTable::new();
    parse_program_with(source, &keywords, ParseOptions::default())
}

/// Parses `source` with a caller-provided keyword table and options.
pub fn parse_program_with(
    source: &str,
    keywords: &KeywordTable,
    options: ParseOptions,
) -> ParseResult<Program> {
    Parser::new(source, keywords, options).parse_program()
}

/// Recursive descent parser over a lazily lexed token stream.
///
/// A parser is single-use: [`parse_program`](Self::parse_program) consumes
/// it.
pub struct Parser<'a> {
    /// Token source
    lexer: Lexer<'a>,

    /// The one token of lookahead
    current: Token,

    /// Span of the last consumed token
    prev_span: Span,

    options: ParseOptions,

    /// Current statement plus expression nesting
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser. No input is read until
    /// [`parse_program`](Self::parse_program) is called.
    pub fn new(source: &'a str, keywords: &'a KeywordTable, options: ParseOptions) -> Self {
        Self {
            lexer: Lexer::new(source, keywords),
            current: Token::new(TokenKind::Eof, Span::DUMMY, false),
            prev_span: Span::DUMMY,
            options,
            depth: 0,
        }
    }

    /// Parses the whole input as a program.
    ///
    /// # Errors
    ///
    /// The first lexical or syntax error.
    pub fn parse_program(mut self) -> ParseResult<Program> {
        debug!("parsing program ({} bytes)", self.lexer.source().len());

        self.current = self.lexer.next_token()?;
        let start = self.current.span;
        let body = self.parse_source_elements(|kind| matches!(kind, TokenKind::Eof))?;
        let span = if body.is_empty() {
            self.current.span
        } else {
            start.to(self.prev_span)
        };

        debug!("parsed {} top-level statements", body.len());
        Ok(Program { body, span })
    }

    // ========================================================================
    // TOKEN HELPERS
    // ========================================================================

    /// Consumes the current token and returns it.
    pub(crate) fn bump(&mut self) -> ParseResult<Token> {
        let next = self.lexer.next_token()?;
        let prev = std::mem::replace(&mut self.current, next);
        self.prev_span = prev.span;
        Ok(prev)
    }

    #[inline]
    pub(crate) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the current token if it is `kind`.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> ParseResult<bool> {
        if self.at(kind) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a token of `kind` or fails.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.at(kind) {
            self.bump()
        } else {
            Err(self.unexpected(&kind.describe()))
        }
    }

    /// Consumes an identifier.
    pub(crate) fn expect_ident(&mut self) -> ParseResult<Ident> {
        match self.current.kind {
            TokenKind::Ident(name) => {
                let token = self.bump()?;
                Ok(Ident::new(name, token.span))
            }
            TokenKind::Reserved(name) => Err(self.syntax(
                SyntaxErrorKind::ReservedWord(name.as_str().to_string()),
                self.current.span,
            )),
            _ => Err(self.unexpected("identifier")),
        }
    }

    /// Error for the current token, which is not `expected`.
    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        self.syntax(
            SyntaxErrorKind::UnexpectedToken {
                found: self.current.kind.describe(),
                expected: expected.to_string(),
            },
            self.current.span,
        )
    }

    pub(crate) fn syntax(&self, kind: SyntaxErrorKind, span: Span) -> ParseError {
        ParseError::Syntax(SyntaxError::new(kind, span))
    }

    /// Span from `start` to the end of the last consumed token.
    #[inline]
    pub(crate) fn finish(&self, start: Span) -> Span {
        start.to(self.prev_span)
    }

    /// Runs `f` one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<T> {
        if self.depth >= self.options.max_depth {
            return Err(self.syntax(
                SyntaxErrorKind::NestingTooDeep(self.options.max_depth),
                self.current.span,
            ));
        }
        self.depth += 1;
        let result = self.with_stack(f);
        self.depth -= 1;
        result
    }

    /// Runs `f`, first moving to a fresh stack segment if the current one
    /// is nearly exhausted. Every recursive cycle in the grammar passes
    /// through here, so stack use is bounded by the heap, not the thread.
    #[inline]
    pub(crate) fn with_stack<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT_SIZE, || f(self))
    }
}
