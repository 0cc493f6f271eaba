//! Automatic semicolon insertion.
//!
//! Statements that end in `;` in the grammar (expression statements,
//! `var`, `const`, `do-while`, `continue`, `break`, `return`, `throw`,
//! `debugger` and `import`) call [`Parser::consume_semicolon`]. A missing
//! `;` is inserted when the next token:
//!
//! 1. is `}`,
//! 2. is the end of input, or
//! 3. is preceded by a line terminator.
//!
//! Everything else is a [`MissingSemicolon`](SyntaxErrorKind::MissingSemicolon)
//! error. A semicolon is never inserted inside a `for` head and never
//! produces an empty statement; both follow from only calling this at the
//! end of the statements listed above.

use esp_lex::TokenKind;
use log::trace;

use crate::error::{ParseResult, SyntaxErrorKind};
use crate::Parser;

impl Parser<'_> {
    /// Consumes a statement terminator, inserting one if the rules allow.
    pub(crate) fn consume_semicolon(&mut self) -> ParseResult<()> {
        if self.eat(TokenKind::Semicolon)? {
            return Ok(());
        }
        if self.can_insert_semicolon() {
            trace!(
                "inserted ';' before {} at {}:{}",
                self.current.kind.describe(),
                self.current.span.line,
                self.current.span.column
            );
            return Ok(());
        }
        Err(self.syntax(
            SyntaxErrorKind::MissingSemicolon {
                found: self.current.kind.describe(),
            },
            self.current.span,
        ))
    }

    /// Whether a `;` may be assumed before the current token.
    pub(crate) fn can_insert_semicolon(&self) -> bool {
        matches!(self.current.kind, TokenKind::RBrace | TokenKind::Eof)
            || self.current.newline_before
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse_program, ParseError, SyntaxErrorKind, StmtKind};

    #[test]
    fn test_explicit_semicolons() {
        let program = parse_program("a; b;").unwrap();
        assert_eq!(program.body.len(), 2);
    }

    #[test]
    fn test_insert_before_newline() {
        let program = parse_program("a\nb").unwrap();
        assert_eq!(program.body.len(), 2);
    }

    #[test]
    fn test_insert_before_brace_and_eof() {
        let program = parse_program("{ a } b").unwrap();
        assert_eq!(program.body.len(), 2);
    }

    #[test]
    fn test_insert_after_block_comment_with_newline() {
        let program = parse_program("a /*\n*/ b").unwrap();
        assert_eq!(program.body.len(), 2);
    }

    #[test]
    fn test_no_insert_on_same_line() {
        let err = parse_program("a b").unwrap_err();
        match err {
            ParseError::Syntax(e) => {
                assert!(matches!(e.kind, SyntaxErrorKind::MissingSemicolon { .. }));
                assert_eq!(e.line(), 1);
                assert_eq!(e.column(), 3);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_empty_statement_inserted() {
        let program = parse_program("\n\n;\n").unwrap();
        assert_eq!(program.body.len(), 1);
        assert_eq!(program.body[0].kind, StmtKind::Empty);
    }

    #[test]
    fn test_statement_span_excludes_inserted_semicolon() {
        let program = parse_program("foo\nbar;").unwrap();
        assert_eq!(program.body[0].span.start, 0);
        assert_eq!(program.body[0].span.end, 3);
        assert_eq!(program.body[1].span.end, 8);
    }
}
