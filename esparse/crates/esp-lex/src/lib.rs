//! esp-lex - lexical analyzer for ECMAScript source.
//!
//! The lexer turns a source buffer into a lazy, finite sequence of
//! [`Token`]s ending with [`TokenKind::Eof`]. It is pulled one token at a
//! time by the parser, which is what makes the two context-dependent parts
//! of the language workable:
//!
//! - **Regex vs division.** `/` and `/=` are always lexed as punctuators.
//!   When the parser is at the start of an expression it calls
//!   [`Lexer::rescan_as_regex`] to re-read the same characters as a regular
//!   expression literal.
//! - **Automatic semicolon insertion.** Every token records whether a line
//!   terminator (or a block comment spanning lines) preceded it, in
//!   [`Token::newline_before`].
//!
//! Numeric and string literals are decoded while lexing: numbers to `f64`,
//! strings to an interned [`Symbol`](esp_util::Symbol).
//!
//! # Example
//!
//! ```
//! use esp_lex::{KeywordTable, Lexer, TokenKind};
//!
//! let keywords = KeywordTable::new();
//! let mut lexer = Lexer::new("return\nx", &keywords);
//!
//! let ret = lexer.next_token().unwrap();
//! assert_eq!(ret.kind, TokenKind::Return);
//!
//! let x = lexer.next_token().unwrap();
//! assert!(x.newline_before);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - token kinds and the token record
//! - [`keywords`] - the keyword / future-reserved-word table
//! - [`lexer`] - the scanner, split by token family
//! - [`cursor`] - character cursor with line/column tracking
//! - [`unicode`] - character classes
//! - [`error`] - `LexError`

#![warn(missing_docs)]

pub mod cursor;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

pub use error::{LexError, LexErrorKind, LexResult};
pub use keywords::{KeywordClass, KeywordTable};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
