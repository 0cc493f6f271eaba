//! Source elements: function declarations and expressions, bodies, and
//! `import` declarations.

use esp_lex::TokenKind;

use crate::ast::*;
use crate::error::{ParseResult, SyntaxErrorKind};
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses source elements until `stop` matches the current token. The
    /// stopping token is not consumed.
    pub(crate) fn parse_source_elements(
        &mut self,
        stop: impl Fn(&TokenKind) -> bool,
    ) -> ParseResult<Vec<Stmt>> {
        let mut body = Vec::new();
        while !stop(&self.current.kind) {
            body.push(self.parse_source_element()?);
        }
        Ok(body)
    }

    /// A function declaration or a statement.
    pub(crate) fn parse_source_element(&mut self) -> ParseResult<Stmt> {
        if !self.at(TokenKind::Function) {
            return self.parse_statement();
        }
        let function = self.parse_function(true)?;
        let span = function.span;
        Ok(Stmt {
            kind: StmtKind::Function(function),
            span,
        })
    }

    /// `function name(params) { body }`. The name is required for
    /// declarations and optional for expressions.
    pub(crate) fn parse_function(&mut self, require_name: bool) -> ParseResult<Function> {
        let start = self.current.span;
        self.expect(TokenKind::Function)?;

        let name = if require_name || !self.at(TokenKind::LParen) {
            Some(self.expect_ident()?)
        } else {
            None
        };
        let params = self.parse_params()?;
        let body = self.nested(|p| p.parse_function_body())?;

        Ok(Function {
            name,
            params,
            body,
            span: self.finish(start),
        })
    }

    /// `( a, b, c )`
    pub(crate) fn parse_params(&mut self) -> ParseResult<Vec<Ident>> {
        self.expect(TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.at(TokenKind::RParen) {
            loop {
                params.push(self.expect_ident()?);
                if !self.eat(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(params)
    }

    /// `{ source elements }`
    pub(crate) fn parse_function_body(&mut self) -> ParseResult<FunctionBody> {
        let start = self.current.span;
        self.expect(TokenKind::LBrace)?;
        let body = self.parse_source_elements(|kind| {
            matches!(kind, TokenKind::RBrace | TokenKind::Eof)
        })?;
        self.expect(TokenKind::RBrace)?;
        Ok(FunctionBody {
            body,
            span: self.finish(start),
        })
    }

    /// `import a.b;`, `import a.b.*;` or `import alias = a.b;`
    pub(crate) fn parse_import(&mut self) -> ParseResult<ImportDecl> {
        if !self.options.allow_import {
            return Err(self.syntax(SyntaxErrorKind::ImportDisabled, self.current.span));
        }
        self.expect(TokenKind::Import)?;

        let first = self.expect_ident()?;
        let (alias, mut path) = if self.eat(TokenKind::Eq)? {
            (Some(first), vec![self.expect_ident()?])
        } else {
            (None, vec![first])
        };

        let mut wildcard = false;
        while self.eat(TokenKind::Dot)? {
            if self.at(TokenKind::Star) {
                if alias.is_some() {
                    return Err(self.unexpected("identifier"));
                }
                self.bump()?;
                wildcard = true;
                break;
            }
            path.push(self.expect_ident()?);
        }
        self.consume_semicolon()?;

        Ok(ImportDecl {
            path,
            wildcard,
            alias,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::dump::dump_program;
    use crate::*;
    use esp_lex::KeywordTable;

    fn dump(src: &str) -> String {
        dump_program(&parse_program(src).unwrap())
    }

    fn syntax_kind(src: &str) -> SyntaxErrorKind {
        match parse_program(src) {
            Err(ParseError::Syntax(e)) => e.kind,
            other => panic!("expected syntax error for {:?}, got {:?}", src, other),
        }
    }

    #[test]
    fn test_function_declaration() {
        assert_eq!(dump("function f(a, b) { return a }"), "(function f (a b) (return a))");
        assert_eq!(dump("function g() {}"), "(function g ())");
    }

    #[test]
    fn test_function_declaration_requires_name() {
        assert!(matches!(
            syntax_kind("function () {}"),
            SyntaxErrorKind::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_function_expression() {
        assert_eq!(dump("f = function () {}"), "(= f (function _ ()))");
        assert_eq!(dump("f = function g(x) { x }"), "(= f (function g (x) x))");
    }

    #[test]
    fn test_nested_functions() {
        let program = parse_program("function a() { function b() { return 1 } return b }").unwrap();
        match &program.body[0].kind {
            StmtKind::Function(f) => {
                assert_eq!(f.body.body.len(), 2);
                assert!(matches!(f.body.body[0].kind, StmtKind::Function(_)));
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_params_must_be_identifiers() {
        assert!(matches!(
            syntax_kind("function f(a, 1) {}"),
            SyntaxErrorKind::UnexpectedToken { .. }
        ));
        assert_eq!(
            syntax_kind("function f(enum) {}"),
            SyntaxErrorKind::ReservedWord("enum".to_string())
        );
    }

    #[test]
    fn test_import_forms() {
        assert_eq!(dump("import a.b;"), "(import a.b)");
        assert_eq!(dump("import a.b.*;"), "(import a.b.*)");
        assert_eq!(dump("import x = a.b.c;"), "(import x = a.b.c)");
        assert_eq!(dump("import a"), "(import a)");
    }

    #[test]
    fn test_import_node() {
        let program = parse_program("import x = a.b;").unwrap();
        match &program.body[0].kind {
            StmtKind::Import(decl) => {
                assert_eq!(decl.path_string(), "a.b");
                assert!(!decl.wildcard);
                assert_eq!(decl.alias.map(|a| a.as_str()), Some("x"));
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn test_import_aliased_wildcard_rejected() {
        assert!(matches!(
            syntax_kind("import x = a.*;"),
            SyntaxErrorKind::UnexpectedToken { .. }
        ));
    }

    #[test]
    fn test_import_disabled() {
        let keywords = KeywordTable::new();
        let options = ParseOptions::default().with_import(false);
        let err = parse_program_with("import a.b;", &keywords, options).unwrap_err();
        assert_eq!(err.syntax_kind(), Some(&SyntaxErrorKind::ImportDisabled));
        assert_eq!(err.column(), 1);
    }
}
