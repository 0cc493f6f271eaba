//! Lexer module.
//!
//! The implementation is split by token family:
//! - `core` - the `Lexer` struct, token dispatch and span bookkeeping
//! - `comment` - whitespace, line terminators and comments
//! - `identifier` - identifiers, keywords and reserved words
//! - `number` - numeric literals
//! - `string` - string literals and escapes
//! - `operator` - punctuators
//! - `regex` - regular expression re-scan

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod regex;
mod string;

pub use core::Lexer;
