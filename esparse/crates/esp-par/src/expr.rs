//! Expression parsing.
//!
//! Assignment, conditional and unary levels are recursive descent; binary
//! operators use precedence climbing over the [`bp`] table.
//!
//! # Operator Precedence (lowest to highest)
//!
//! | Level | Operators | Associativity |
//! |-------|-----------|---------------|
//! | - | `,` | Left |
//! | - | `=`, `+=`, `-=`, ... | Right |
//! | - | `? :` | Right |
//! | 1 | `\|\|` | Left |
//! | 2 | `&&` | Left |
//! | 3 | `\|` | Left |
//! | 4 | `^` | Left |
//! | 5 | `&` | Left |
//! | 6 | `==`, `!=`, `===`, `!==` | Left |
//! | 7 | `<`, `>`, `<=`, `>=`, `instanceof`, `in` | Left |
//! | 8 | `<<`, `>>`, `>>>` | Left |
//! | 9 | `+`, `-` | Left |
//! | 10 | `*`, `/`, `%` | Left |
//! | - | `delete`, `void`, `typeof`, `+`, `-`, `~`, `!`, prefix `++`/`--` | Right |
//! | - | postfix `++`/`--` | - |
//! | - | `new`, calls, `.`, `[]` | Left |

use esp_lex::TokenKind;
use log::trace;

use crate::ast::*;
use crate::error::{ParseResult, SyntaxErrorKind};
use crate::Parser;

/// Binding power levels for binary operators.
/// Higher numbers bind tighter.
#[doc(hidden)]
pub mod bp {
    /// Start of a binary expression
    pub const MIN: u8 = 0;

    /// `||`
    pub const LOGICAL_OR: u8 = 1;

    /// `&&`
    pub const LOGICAL_AND: u8 = 2;

    /// `|`
    pub const BITWISE_OR: u8 = 3;

    /// `^`
    pub const BITWISE_XOR: u8 = 4;

    /// `&`
    pub const BITWISE_AND: u8 = 5;

    /// `==`, `!=`, `===`, `!==`
    pub const EQUALITY: u8 = 6;

    /// `<`, `>`, `<=`, `>=`, `instanceof`, `in`
    pub const RELATIONAL: u8 = 7;

    /// `<<`, `>>`, `>>>`
    pub const SHIFT: u8 = 8;

    /// `+`, `-`
    pub const ADDITIVE: u8 = 9;

    /// `*`, `/`, `%`
    pub const MULTIPLICATIVE: u8 = 10;
}

/// Grammar context threaded through expression parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ExprCtx {
    /// `in` is a binary operator here. Off inside `for (...;` initializers.
    pub allow_in: bool,
    /// The expression may start with `{` or `function`. Off at the start of
    /// an expression statement.
    pub allow_brace_or_function: bool,
}

impl ExprCtx {
    pub const PLAIN: ExprCtx = ExprCtx {
        allow_in: true,
        allow_brace_or_function: true,
    };

    pub const NO_IN: ExprCtx = ExprCtx {
        allow_in: false,
        allow_brace_or_function: true,
    };

    pub const NO_BF: ExprCtx = ExprCtx {
        allow_in: true,
        allow_brace_or_function: false,
    };

    /// Context for everything after the first token.
    #[inline]
    pub fn rest(self) -> ExprCtx {
        ExprCtx {
            allow_brace_or_function: true,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Infix {
    Binary(BinaryOp),
    Logical(LogicalOp),
}

fn infix_op(kind: &TokenKind, allow_in: bool) -> Option<(u8, Infix)> {
    use Infix::*;
    let op = match kind {
        TokenKind::PipePipe => (bp::LOGICAL_OR, Logical(LogicalOp::Or)),
        TokenKind::AmpAmp => (bp::LOGICAL_AND, Logical(LogicalOp::And)),
        TokenKind::Pipe => (bp::BITWISE_OR, Binary(BinaryOp::BitOr)),
        TokenKind::Caret => (bp::BITWISE_XOR, Binary(BinaryOp::BitXor)),
        TokenKind::Amp => (bp::BITWISE_AND, Binary(BinaryOp::BitAnd)),
        TokenKind::EqEq => (bp::EQUALITY, Binary(BinaryOp::Eq)),
        TokenKind::NotEq => (bp::EQUALITY, Binary(BinaryOp::NotEq)),
        TokenKind::EqEqEq => (bp::EQUALITY, Binary(BinaryOp::StrictEq)),
        TokenKind::NotEqEq => (bp::EQUALITY, Binary(BinaryOp::StrictNotEq)),
        TokenKind::Lt => (bp::RELATIONAL, Binary(BinaryOp::Lt)),
        TokenKind::Gt => (bp::RELATIONAL, Binary(BinaryOp::Gt)),
        TokenKind::LtEq => (bp::RELATIONAL, Binary(BinaryOp::LtEq)),
        TokenKind::GtEq => (bp::RELATIONAL, Binary(BinaryOp::GtEq)),
        TokenKind::InstanceOf => (bp::RELATIONAL, Binary(BinaryOp::InstanceOf)),
        TokenKind::In if allow_in => (bp::RELATIONAL, Binary(BinaryOp::In)),
        TokenKind::Shl => (bp::SHIFT, Binary(BinaryOp::Shl)),
        TokenKind::Shr => (bp::SHIFT, Binary(BinaryOp::Shr)),
        TokenKind::UShr => (bp::SHIFT, Binary(BinaryOp::UShr)),
        TokenKind::Plus => (bp::ADDITIVE, Binary(BinaryOp::Add)),
        TokenKind::Minus => (bp::ADDITIVE, Binary(BinaryOp::Sub)),
        TokenKind::Star => (bp::MULTIPLICATIVE, Binary(BinaryOp::Mul)),
        TokenKind::Slash => (bp::MULTIPLICATIVE, Binary(BinaryOp::Div)),
        TokenKind::Percent => (bp::MULTIPLICATIVE, Binary(BinaryOp::Mod)),
        _ => return None,
    };
    Some(op)
}

fn assign_op(kind: &TokenKind) -> Option<AssignOp> {
    let op = match kind {
        TokenKind::Eq => AssignOp::Assign,
        TokenKind::PlusEq => AssignOp::Add,
        TokenKind::MinusEq => AssignOp::Sub,
        TokenKind::StarEq => AssignOp::Mul,
        TokenKind::SlashEq => AssignOp::Div,
        TokenKind::PercentEq => AssignOp::Mod,
        TokenKind::ShlEq => AssignOp::Shl,
        TokenKind::ShrEq => AssignOp::Shr,
        TokenKind::UShrEq => AssignOp::UShr,
        TokenKind::AmpEq => AssignOp::BitAnd,
        TokenKind::CaretEq => AssignOp::BitXor,
        TokenKind::PipeEq => AssignOp::BitOr,
        _ => return None,
    };
    Some(op)
}

fn unary_op(kind: &TokenKind) -> Option<UnaryOp> {
    let op = match kind {
        TokenKind::Delete => UnaryOp::Delete,
        TokenKind::Void => UnaryOp::Void,
        TokenKind::TypeOf => UnaryOp::TypeOf,
        TokenKind::Plus => UnaryOp::Plus,
        TokenKind::Minus => UnaryOp::Minus,
        TokenKind::Tilde => UnaryOp::BitNot,
        TokenKind::Bang => UnaryOp::Not,
        _ => return None,
    };
    Some(op)
}

fn update_op(kind: &TokenKind) -> Option<UpdateOp> {
    match kind {
        TokenKind::PlusPlus => Some(UpdateOp::Increment),
        TokenKind::MinusMinus => Some(UpdateOp::Decrement),
        _ => None,
    }
}

impl<'a> Parser<'a> {
    // =========================================================================
    // COMMA, ASSIGNMENT, CONDITIONAL
    // =========================================================================

    /// Parses a comma expression.
    pub(crate) fn parse_expression(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        let start = self.current.span;
        let mut expr = self.parse_assignment(ctx)?;
        while self.eat(TokenKind::Comma)? {
            let right = self.parse_assignment(ctx.rest())?;
            expr = Expr::new(
                ExprKind::Comma {
                    left: Box::new(expr),
                    right: Box::new(right),
                },
                self.finish(start),
            );
        }
        Ok(expr)
    }

    /// Parses an assignment expression, the operand of most constructs.
    pub(crate) fn parse_assignment(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        self.with_stack(|p| p.parse_assignment_inner(ctx))
    }

    fn parse_assignment_inner(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        let start = self.current.span;
        let target = self.parse_conditional(ctx)?;

        let Some(op) = assign_op(&self.current.kind) else {
            return Ok(target);
        };
        if !target.is_left_hand_side() {
            return Err(self.syntax(SyntaxErrorKind::InvalidAssignmentTarget, target.span));
        }
        self.bump()?;
        let value = self.nested(|p| p.parse_assignment(ctx.rest()))?;

        Ok(Expr::new(
            ExprKind::Assign {
                op,
                target: Box::new(target),
                value: Box::new(value),
            },
            self.finish(start),
        ))
    }

    fn parse_conditional(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        let start = self.current.span;
        let test = self.parse_binary(bp::MIN, ctx)?;
        if !self.eat(TokenKind::Question)? {
            return Ok(test);
        }

        let consequent = self.nested(|p| p.parse_assignment(ExprCtx::PLAIN))?;
        self.expect(TokenKind::Colon)?;
        let alternate = self.nested(|p| p.parse_assignment(ctx.rest()))?;

        Ok(Expr::new(
            ExprKind::Conditional {
                test: Box::new(test),
                consequent: Box::new(consequent),
                alternate: Box::new(alternate),
            },
            self.finish(start),
        ))
    }

    // =========================================================================
    // BINARY OPERATORS
    // =========================================================================

    /// Precedence climbing: consumes operators binding at least `min_bp`.
    /// All binary operators are left-associative.
    fn parse_binary(&mut self, min_bp: u8, ctx: ExprCtx) -> ParseResult<Expr> {
        let start = self.current.span;
        let mut left = self.parse_unary(ctx)?;

        loop {
            let Some((op_bp, op)) = infix_op(&self.current.kind, ctx.allow_in) else {
                break;
            };
            if op_bp < min_bp {
                break;
            }
            self.bump()?;
            let right = self.parse_binary(op_bp + 1, ctx.rest())?;
            let span = self.finish(start);

            left = match op {
                Infix::Binary(op) => Expr::new(
                    ExprKind::Binary {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    span,
                ),
                Infix::Logical(op) => Expr::new(
                    ExprKind::Logical {
                        op,
                        left: Box::new(left),
                        right: Box::new(right),
                    },
                    span,
                ),
            };
        }

        Ok(left)
    }

    // =========================================================================
    // UNARY AND POSTFIX
    // =========================================================================

    fn parse_unary(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        self.with_stack(|p| p.parse_unary_inner(ctx))
    }

    fn parse_unary_inner(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        let start = self.current.span;

        if let Some(op) = unary_op(&self.current.kind) {
            self.bump()?;
            let operand = self.nested(|p| p.parse_unary(ctx.rest()))?;
            return Ok(Expr::new(
                ExprKind::Unary {
                    op,
                    operand: Box::new(operand),
                },
                self.finish(start),
            ));
        }

        if let Some(op) = update_op(&self.current.kind) {
            self.bump()?;
            let operand = self.nested(|p| p.parse_unary(ctx.rest()))?;
            return Ok(Expr::new(
                ExprKind::Update {
                    op,
                    prefix: true,
                    operand: Box::new(operand),
                },
                self.finish(start),
            ));
        }

        self.parse_postfix(ctx)
    }

    fn parse_postfix(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        let start = self.current.span;
        let operand = self.parse_lhs(ctx)?;

        // No line terminator allowed before postfix ++/--.
        if self.current.newline_before {
            return Ok(operand);
        }
        let Some(op) = update_op(&self.current.kind) else {
            return Ok(operand);
        };
        self.bump()?;

        Ok(Expr::new(
            ExprKind::Update {
                op,
                prefix: false,
                operand: Box::new(operand),
            },
            self.finish(start),
        ))
    }

    // =========================================================================
    // CALL, MEMBER, NEW
    // =========================================================================

    /// LeftHandSideExpression: member or `new` expression followed by any
    /// number of calls and member accesses.
    fn parse_lhs(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        let start = self.current.span;
        let mut expr = self.parse_member_or_new(ctx)?;

        loop {
            match self.current.kind {
                TokenKind::LParen => {
                    let args = self.parse_arguments()?;
                    expr = Expr::new(
                        ExprKind::Call {
                            callee: Box::new(expr),
                            args,
                        },
                        self.finish(start),
                    );
                }
                TokenKind::Dot | TokenKind::LBracket => {
                    expr = self.parse_member_suffix(expr, start)?;
                }
                _ => break,
            }
        }

        Ok(expr)
    }

    fn parse_member_or_new(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        let start = self.current.span;

        let mut expr = if self.at(TokenKind::New) {
            self.bump()?;
            let callee = self.nested(|p| p.parse_member_or_new(ctx.rest()))?;
            let args = if self.at(TokenKind::LParen) {
                Some(self.parse_arguments()?)
            } else {
                None
            };
            Expr::new(
                ExprKind::New {
                    callee: Box::new(callee),
                    args,
                },
                self.finish(start),
            )
        } else {
            self.parse_primary(ctx)?
        };

        while matches!(self.current.kind, TokenKind::Dot | TokenKind::LBracket) {
            expr = self.parse_member_suffix(expr, start)?;
        }

        Ok(expr)
    }

    /// One `.name` or `[index]` applied to `object`.
    fn parse_member_suffix(&mut self, object: Expr, start: esp_util::Span) -> ParseResult<Expr> {
        if self.eat(TokenKind::Dot)? {
            let Some(name) = self.current.kind.identifier_name() else {
                return Err(self.unexpected("property name"));
            };
            let token = self.bump()?;
            return Ok(Expr::new(
                ExprKind::Dot {
                    object: Box::new(object),
                    property: Ident::new(name, token.span),
                },
                self.finish(start),
            ));
        }

        self.expect(TokenKind::LBracket)?;
        let index = self.nested(|p| p.parse_expression(ExprCtx::PLAIN))?;
        self.expect(TokenKind::RBracket)?;
        Ok(Expr::new(
            ExprKind::Index {
                object: Box::new(object),
                index: Box::new(index),
            },
            self.finish(start),
        ))
    }

    /// `( a, b, c )`
    fn parse_arguments(&mut self) -> ParseResult<Vec<Expr>> {
        self.nested(|p| p.parse_arguments_inner())
    }

    fn parse_arguments_inner(&mut self) -> ParseResult<Vec<Expr>> {
        self.expect(TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.at(TokenKind::RParen) {
            loop {
                args.push(self.parse_assignment(ExprCtx::PLAIN)?);
                if !self.eat(TokenKind::Comma)? {
                    break;
                }
            }
        }
        self.expect(TokenKind::RParen)?;
        Ok(args)
    }

    // =========================================================================
    // PRIMARY
    // =========================================================================

    fn parse_primary(&mut self, ctx: ExprCtx) -> ParseResult<Expr> {
        let start = self.current.span;

        let kind = match self.current.kind {
            TokenKind::This => ExprKind::This,
            TokenKind::Null => ExprKind::Null,
            TokenKind::True => ExprKind::Bool(true),
            TokenKind::False => ExprKind::Bool(false),
            TokenKind::Number(n) => ExprKind::Number(n),
            TokenKind::String(s) => ExprKind::String(s),
            TokenKind::Ident(name) => ExprKind::Ident(Ident::new(name, start)),
            TokenKind::Reserved(name) => {
                return Err(self.syntax(
                    SyntaxErrorKind::ReservedWord(name.as_str().to_string()),
                    start,
                ));
            }
            TokenKind::Slash | TokenKind::SlashEq => {
                self.current = self.lexer.rescan_as_regex(&self.current)?;
                trace!("re-scanned '/' at {}:{} as regex", start.line, start.column);
                match self.current.kind {
                    TokenKind::Regex { pattern, flags } => ExprKind::Regex { pattern, flags },
                    _ => return Err(self.unexpected("regular expression")),
                }
            }
            TokenKind::LParen => return self.nested(|p| p.parse_group()),
            TokenKind::LBracket => return self.nested(|p| p.parse_array_literal()),
            TokenKind::LBrace if ctx.allow_brace_or_function => {
                return self.nested(|p| p.parse_object_literal());
            }
            TokenKind::Function if ctx.allow_brace_or_function => {
                let function = self.parse_function(false)?;
                let span = function.span;
                return Ok(Expr::new(ExprKind::Function(Box::new(function)), span));
            }
            _ => return Err(self.unexpected("expression")),
        };

        let token = self.bump()?;
        Ok(Expr::new(kind, token.span))
    }

    fn parse_group(&mut self) -> ParseResult<Expr> {
        let start = self.current.span;
        self.expect(TokenKind::LParen)?;
        let inner = self.parse_expression(ExprCtx::PLAIN)?;
        self.expect(TokenKind::RParen)?;
        Ok(Expr::new(ExprKind::Group(Box::new(inner)), self.finish(start)))
    }

    fn parse_array_literal(&mut self) -> ParseResult<Expr> {
        let start = self.current.span;
        self.expect(TokenKind::LBracket)?;

        let mut literal = ArrayLiteral::default();
        let mut elision = 0u32;
        loop {
            match self.current.kind {
                TokenKind::RBracket => break,
                TokenKind::Comma => {
                    self.bump()?;
                    elision += 1;
                }
                _ => {
                    let value = self.parse_assignment(ExprCtx::PLAIN)?;
                    literal.elements.push(ArrayElement { elision, value });
                    elision = 0;
                    // The comma after an element separates; it is not a hole.
                    if !self.at(TokenKind::RBracket) {
                        self.expect(TokenKind::Comma)?;
                    }
                }
            }
        }
        self.expect(TokenKind::RBracket)?;
        literal.trailing_elision = elision;

        Ok(Expr::new(ExprKind::Array(literal), self.finish(start)))
    }

    fn parse_object_literal(&mut self) -> ParseResult<Expr> {
        let start = self.current.span;
        self.expect(TokenKind::LBrace)?;

        let mut properties = Vec::new();
        while !self.at(TokenKind::RBrace) {
            properties.push(self.parse_property()?);
            if !self.eat(TokenKind::Comma)? {
                break;
            }
        }
        self.expect(TokenKind::RBrace)?;

        Ok(Expr::new(ExprKind::Object(properties), self.finish(start)))
    }

    fn parse_property(&mut self) -> ParseResult<Property> {
        let start = self.current.span;

        if let TokenKind::Ident(name) = self.current.kind {
            let getter = name.eq_str("get");
            if getter || name.eq_str("set") {
                self.bump()?;
                if self.at_property_name() {
                    let key = self.parse_property_key()?;
                    let function = self.parse_accessor(start, getter)?;
                    let value = if getter {
                        PropertyValue::Getter(function)
                    } else {
                        PropertyValue::Setter(function)
                    };
                    return Ok(Property {
                        key,
                        value,
                        span: self.finish(start),
                    });
                }
                // Plain property named `get` or `set`.
                return self.finish_init_property(PropertyKey::Ident(name), start);
            }
        }

        let key = self.parse_property_key()?;
        self.finish_init_property(key, start)
    }

    fn finish_init_property(
        &mut self,
        key: PropertyKey,
        start: esp_util::Span,
    ) -> ParseResult<Property> {
        self.expect(TokenKind::Colon)?;
        let value = self.parse_assignment(ExprCtx::PLAIN)?;
        Ok(Property {
            key,
            value: PropertyValue::Init(value),
            span: self.finish(start),
        })
    }

    fn at_property_name(&self) -> bool {
        matches!(
            self.current.kind,
            TokenKind::String(_) | TokenKind::Number(_)
        ) || self.current.kind.identifier_name().is_some()
    }

    fn parse_property_key(&mut self) -> ParseResult<PropertyKey> {
        let key = match self.current.kind {
            TokenKind::String(s) => PropertyKey::String(s),
            TokenKind::Number(n) => PropertyKey::Number(n),
            ref other => match other.identifier_name() {
                Some(name) => PropertyKey::Ident(name),
                None => return Err(self.unexpected("property name")),
            },
        };
        self.bump()?;
        Ok(key)
    }

    /// The parameter list and body of `get key() {}` / `set key(v) {}`.
    fn parse_accessor(&mut self, start: esp_util::Span, getter: bool) -> ParseResult<Function> {
        let params_span = self.current.span;
        let params = self.parse_params()?;
        if getter && !params.is_empty() {
            return Err(self.syntax(
                SyntaxErrorKind::InvalidAccessor("getter must not have parameters"),
                params_span.to(self.prev_span),
            ));
        }
        if !getter && params.len() != 1 {
            return Err(self.syntax(
                SyntaxErrorKind::InvalidAccessor("setter must have exactly one parameter"),
                params_span.to(self.prev_span),
            ));
        }
        let body = self.nested(|p| p.parse_function_body())?;
        Ok(Function {
            name: None,
            params,
            body,
            span: self.finish(start),
        })
    }
}
