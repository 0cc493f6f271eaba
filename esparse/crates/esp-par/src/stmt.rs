//! Statement parsing - blocks, declarations, control flow.

use esp_lex::TokenKind;

use crate::ast::*;
use crate::error::{ParseResult, SyntaxErrorKind};
use crate::expr::ExprCtx;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses one statement. Function declarations are not statements; see
    /// [`parse_source_element`](Self::parse_source_element).
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        self.nested(|p| p.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> ParseResult<Stmt> {
        let start = self.current.span;

        let kind = match self.current.kind {
            TokenKind::LBrace => StmtKind::Block(self.parse_block()?),
            TokenKind::Var => StmtKind::Var(self.parse_var_statement(VarKind::Var)?),
            TokenKind::Const => StmtKind::Var(self.parse_var_statement(VarKind::Const)?),
            TokenKind::Semicolon => {
                self.bump()?;
                StmtKind::Empty
            }
            TokenKind::If => self.parse_if()?,
            TokenKind::Do => self.parse_do_while()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::For => self.parse_for()?,
            TokenKind::Continue => StmtKind::Continue(self.parse_jump_label()?),
            TokenKind::Break => StmtKind::Break(self.parse_jump_label()?),
            TokenKind::Return => self.parse_return()?,
            TokenKind::Throw => self.parse_throw()?,
            TokenKind::With => self.parse_with()?,
            TokenKind::Switch => self.parse_switch()?,
            TokenKind::Try => self.parse_try()?,
            TokenKind::Debugger => {
                self.bump()?;
                self.consume_semicolon()?;
                StmtKind::Debugger
            }
            TokenKind::Import => StmtKind::Import(self.parse_import()?),
            TokenKind::Function => {
                return Err(self.syntax(
                    SyntaxErrorKind::FunctionInStatementPosition,
                    self.current.span,
                ));
            }
            _ => return self.parse_expression_statement(),
        };

        Ok(Stmt {
            kind,
            span: self.finish(start),
        })
    }

    /// Expression statement, or a labelled statement when the expression is
    /// a bare identifier followed by `:`.
    fn parse_expression_statement(&mut self) -> ParseResult<Stmt> {
        let start = self.current.span;
        let expr = self.parse_expression(ExprCtx::NO_BF)?;

        if let ExprKind::Ident(label) = expr.kind {
            if self.eat(TokenKind::Colon)? {
                let body = self.parse_statement()?;
                return Ok(Stmt {
                    kind: StmtKind::Labelled {
                        label,
                        body: Box::new(body),
                    },
                    span: self.finish(start),
                });
            }
        }

        self.consume_semicolon()?;
        Ok(Stmt {
            kind: StmtKind::Expr(expr),
            span: self.finish(start),
        })
    }

    /// `{ source elements }`
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        let start = self.current.span;
        self.expect(TokenKind::LBrace)?;
        let body = self.parse_source_elements(|kind| {
            matches!(kind, TokenKind::RBrace | TokenKind::Eof)
        })?;
        self.expect(TokenKind::RBrace)?;
        Ok(Block {
            body,
            span: self.finish(start),
        })
    }

    // =========================================================================
    // DECLARATIONS
    // =========================================================================

    fn parse_var_statement(&mut self, kind: VarKind) -> ParseResult<VarDecl> {
        let decl = self.parse_var_declarations(kind, ExprCtx::PLAIN)?;
        self.consume_semicolon()?;
        Ok(decl)
    }

    /// `var a = 1, b` without the terminator. `ctx` decides whether `in` may
    /// appear in initializers.
    fn parse_var_declarations(&mut self, kind: VarKind, ctx: ExprCtx) -> ParseResult<VarDecl> {
        let start = self.current.span;
        self.bump()?;

        let mut declarations = vec![self.parse_var_declarator(ctx)?];
        while self.eat(TokenKind::Comma)? {
            declarations.push(self.parse_var_declarator(ctx)?);
        }

        Ok(VarDecl {
            kind,
            declarations,
            span: self.finish(start),
        })
    }

    fn parse_var_declarator(&mut self, ctx: ExprCtx) -> ParseResult<VarDeclarator> {
        let start = self.current.span;
        let name = self.expect_ident()?;
        let init = if self.eat(TokenKind::Eq)? {
            Some(self.parse_assignment(ctx)?)
        } else {
            None
        };
        Ok(VarDeclarator {
            name,
            init,
            span: self.finish(start),
        })
    }

    // =========================================================================
    // CONTROL FLOW
    // =========================================================================

    /// `( expr )` around conditions.
    fn parse_paren_expression(&mut self) -> ParseResult<Expr> {
        self.expect(TokenKind::LParen)?;
        let expr = self.parse_expression(ExprCtx::PLAIN)?;
        self.expect(TokenKind::RParen)?;
        Ok(expr)
    }

    fn parse_if(&mut self) -> ParseResult<StmtKind> {
        self.bump()?;
        let test = self.parse_paren_expression()?;
        let consequent = Box::new(self.parse_statement()?);
        // `else` binds to the nearest `if`.
        let alternate = if self.eat(TokenKind::Else)? {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };
        Ok(StmtKind::If {
            test,
            consequent,
            alternate,
        })
    }

    fn parse_do_while(&mut self) -> ParseResult<StmtKind> {
        self.bump()?;
        let body = Box::new(self.parse_statement()?);
        self.expect(TokenKind::While)?;
        let test = self.parse_paren_expression()?;
        self.consume_semicolon()?;
        Ok(StmtKind::DoWhile { body, test })
    }

    fn parse_while(&mut self) -> ParseResult<StmtKind> {
        self.bump()?;
        let test = self.parse_paren_expression()?;
        let body = Box::new(self.parse_statement()?);
        Ok(StmtKind::While { test, body })
    }

    /// `for (init; test; update) body` or `for (target in object) body`.
    fn parse_for(&mut self) -> ParseResult<StmtKind> {
        self.bump()?;
        self.expect(TokenKind::LParen)?;

        let init = match self.current.kind {
            TokenKind::Semicolon => None,
            TokenKind::Var => {
                let mut decl = self.parse_var_declarations(VarKind::Var, ExprCtx::NO_IN)?;
                if self.at(TokenKind::In) {
                    if decl.declarations.len() != 1 {
                        return Err(self.unexpected(&TokenKind::Semicolon.describe()));
                    }
                    let target = decl.declarations.remove(0);
                    return self.parse_for_in_rest(ForInTarget::Var(target));
                }
                Some(ForInit::Var(decl))
            }
            _ => {
                let expr = self.parse_expression(ExprCtx::NO_IN)?;
                if self.at(TokenKind::In) {
                    if !expr.is_lvalue_shaped() {
                        return Err(self.syntax(SyntaxErrorKind::InvalidForInTarget, expr.span));
                    }
                    let target = ForInTarget::Expr(expr.into_unparenthesized());
                    return self.parse_for_in_rest(target);
                }
                Some(ForInit::Expr(expr))
            }
        };

        self.expect(TokenKind::Semicolon)?;
        let test = self.parse_optional_expression(TokenKind::Semicolon)?;
        self.expect(TokenKind::Semicolon)?;
        let update = self.parse_optional_expression(TokenKind::RParen)?;
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.parse_statement()?);

        Ok(StmtKind::For {
            init,
            test,
            update,
            body,
        })
    }

    fn parse_for_in_rest(&mut self, target: ForInTarget) -> ParseResult<StmtKind> {
        self.expect(TokenKind::In)?;
        let object = self.parse_expression(ExprCtx::PLAIN)?;
        self.expect(TokenKind::RParen)?;
        let body = Box::new(self.parse_statement()?);
        Ok(StmtKind::ForIn {
            target,
            object,
            body,
        })
    }

    fn parse_optional_expression(&mut self, end: TokenKind) -> ParseResult<Option<Expr>> {
        if self.at(end) {
            Ok(None)
        } else {
            self.parse_expression(ExprCtx::PLAIN).map(Some)
        }
    }

    /// Label of `break` / `continue`; absent across a line break.
    fn parse_jump_label(&mut self) -> ParseResult<Option<Ident>> {
        self.bump()?;
        let label = match self.current.kind {
            TokenKind::Ident(name) if !self.current.newline_before => {
                let token = self.bump()?;
                Some(Ident::new(name, token.span))
            }
            _ => None,
        };
        self.consume_semicolon()?;
        Ok(label)
    }

    fn parse_return(&mut self) -> ParseResult<StmtKind> {
        self.bump()?;
        let value = if self.can_insert_semicolon() || self.at(TokenKind::Semicolon) {
            None
        } else {
            Some(self.parse_expression(ExprCtx::PLAIN)?)
        };
        self.consume_semicolon()?;
        Ok(StmtKind::Return(value))
    }

    fn parse_throw(&mut self) -> ParseResult<StmtKind> {
        self.bump()?;
        if self.current.newline_before {
            return Err(self.syntax(SyntaxErrorKind::NewlineAfterThrow, self.current.span));
        }
        let value = self.parse_expression(ExprCtx::PLAIN)?;
        self.consume_semicolon()?;
        Ok(StmtKind::Throw(value))
    }

    fn parse_with(&mut self) -> ParseResult<StmtKind> {
        self.bump()?;
        let object = self.parse_paren_expression()?;
        let body = Box::new(self.parse_statement()?);
        Ok(StmtKind::With { object, body })
    }

    fn parse_switch(&mut self) -> ParseResult<StmtKind> {
        self.bump()?;
        let discriminant = self.parse_paren_expression()?;
        self.expect(TokenKind::LBrace)?;

        let mut cases = CaseBlock::default();
        loop {
            let start = self.current.span;
            match self.current.kind {
                TokenKind::Case => {
                    self.bump()?;
                    let test = self.parse_expression(ExprCtx::PLAIN)?;
                    self.expect(TokenKind::Colon)?;
                    let body = self.parse_case_body()?;
                    let clause = CaseClause {
                        test,
                        body,
                        span: self.finish(start),
                    };
                    if cases.default.is_some() {
                        cases.after_default.push(clause);
                    } else {
                        cases.before_default.push(clause);
                    }
                }
                TokenKind::Default => {
                    if cases.default.is_some() {
                        return Err(self.syntax(SyntaxErrorKind::DuplicateDefault, start));
                    }
                    self.bump()?;
                    self.expect(TokenKind::Colon)?;
                    let body = self.parse_case_body()?;
                    cases.default = Some(DefaultClause {
                        body,
                        span: self.finish(start),
                    });
                }
                TokenKind::RBrace => break,
                _ => return Err(self.unexpected("'case', 'default' or '}'")),
            }
        }
        self.expect(TokenKind::RBrace)?;

        Ok(StmtKind::Switch {
            discriminant,
            cases,
        })
    }

    fn parse_case_body(&mut self) -> ParseResult<Vec<Stmt>> {
        self.parse_source_elements(|kind| {
            matches!(
                kind,
                TokenKind::Case | TokenKind::Default | TokenKind::RBrace | TokenKind::Eof
            )
        })
    }

    fn parse_try(&mut self) -> ParseResult<StmtKind> {
        self.bump()?;
        let block = self.parse_block()?;

        let catch = if self.at(TokenKind::Catch) {
            let start = self.current.span;
            self.bump()?;
            self.expect(TokenKind::LParen)?;
            let param = self.expect_ident()?;
            self.expect(TokenKind::RParen)?;
            let body = self.parse_block()?;
            Some(CatchClause {
                param,
                body,
                span: self.finish(start),
            })
        } else {
            None
        };

        let finally = if self.eat(TokenKind::Finally)? {
            Some(self.parse_block()?)
        } else {
            None
        };

        let handler = match (catch, finally) {
            (Some(c), Some(f)) => TryHandler::CatchFinally(c, f),
            (Some(c), None) => TryHandler::Catch(c),
            (None, Some(f)) => TryHandler::Finally(f),
            (None, None) => return Err(self.unexpected("'catch' or 'finally'")),
        };
        Ok(StmtKind::Try { block, handler })
    }
}
