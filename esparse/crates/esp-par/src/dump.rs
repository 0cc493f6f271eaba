//! S-expression rendering of the AST.
//!
//! Every operator application is fully parenthesised, so the output shows
//! exactly how the parser grouped the input:
//!
//! ```
//! use esp_par::{dump, parse_program};
//!
//! let program = parse_program("a = b ? c : d || e").unwrap();
//! assert_eq!(dump::dump_program(&program), "(= a (? b c (|| d e)))");
//! ```
//!
//! A program prints one top-level statement per line. Expression statements
//! print as the bare expression. `_` stands for an absent part: a hole in an
//! array, an anonymous function, an empty `for` clause.

use std::fmt::{self, Write};

use crate::ast::*;

/// Renders a whole program, one top-level statement per line.
pub fn dump_program(program: &Program) -> String {
    program
        .body
        .iter()
        .map(dump_stmt)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one statement.
pub fn dump_stmt(stmt: &Stmt) -> String {
    Sexp(stmt).to_string()
}

/// Renders one expression.
pub fn dump_expr(expr: &Expr) -> String {
    Sexp(expr).to_string()
}

/// Display adapter that writes a node in s-expression form.
struct Sexp<'a, T>(&'a T);

impl fmt::Display for Sexp<'_, Stmt> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_stmt(f, self.0)
    }
}

impl fmt::Display for Sexp<'_, Expr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_expr(f, self.0)
    }
}

type Out<'a, 'b> = &'a mut fmt::Formatter<'b>;

fn write_stmts(out: Out<'_, '_>, stmts: &[Stmt]) -> fmt::Result {
    for stmt in stmts {
        out.write_char(' ')?;
        write_stmt(out, stmt)?;
    }
    Ok(())
}

fn write_stmt(out: Out<'_, '_>, stmt: &Stmt) -> fmt::Result {
    match &stmt.kind {
        StmtKind::Block(block) => write_block(out, block),
        StmtKind::Var(decl) => write_var_decl(out, decl),
        StmtKind::Empty => out.write_str("(empty)"),
        StmtKind::Expr(expr) => write_expr(out, expr),
        StmtKind::If {
            test,
            consequent,
            alternate,
        } => {
            out.write_str("(if ")?;
            write_expr(out, test)?;
            out.write_char(' ')?;
            write_stmt(out, consequent)?;
            if let Some(alternate) = alternate {
                out.write_char(' ')?;
                write_stmt(out, alternate)?;
            }
            out.write_char(')')
        }
        StmtKind::While { test, body } => {
            out.write_str("(while ")?;
            write_expr(out, test)?;
            out.write_char(' ')?;
            write_stmt(out, body)?;
            out.write_char(')')
        }
        StmtKind::DoWhile { body, test } => {
            out.write_str("(do ")?;
            write_stmt(out, body)?;
            out.write_char(' ')?;
            write_expr(out, test)?;
            out.write_char(')')
        }
        StmtKind::For {
            init,
            test,
            update,
            body,
        } => {
            out.write_str("(for ")?;
            match init {
                Some(ForInit::Var(decl)) => write_var_decl(out, decl)?,
                Some(ForInit::Expr(expr)) => write_expr(out, expr)?,
                None => out.write_char('_')?,
            }
            for clause in [test, update] {
                out.write_char(' ')?;
                match clause {
                    Some(expr) => write_expr(out, expr)?,
                    None => out.write_char('_')?,
                }
            }
            out.write_char(' ')?;
            write_stmt(out, body)?;
            out.write_char(')')
        }
        StmtKind::ForIn {
            target,
            object,
            body,
        } => {
            out.write_str("(for-in ")?;
            match target {
                ForInTarget::Expr(expr) => write_expr(out, expr)?,
                ForInTarget::Var(declarator) => {
                    out.write_str("(var ")?;
                    write_declarator(out, declarator)?;
                    out.write_char(')')?;
                }
            }
            out.write_char(' ')?;
            write_expr(out, object)?;
            out.write_char(' ')?;
            write_stmt(out, body)?;
            out.write_char(')')
        }
        StmtKind::Continue(label) => write_jump(out, "continue", label.as_ref()),
        StmtKind::Break(label) => write_jump(out, "break", label.as_ref()),
        StmtKind::Return(value) => {
            out.write_str("(return")?;
            if let Some(value) = value {
                out.write_char(' ')?;
                write_expr(out, value)?;
            }
            out.write_char(')')
        }
        StmtKind::With { object, body } => {
            out.write_str("(with ")?;
            write_expr(out, object)?;
            out.write_char(' ')?;
            write_stmt(out, body)?;
            out.write_char(')')
        }
        StmtKind::Switch {
            discriminant,
            cases,
        } => {
            out.write_str("(switch ")?;
            write_expr(out, discriminant)?;
            for clause in &cases.before_default {
                write_case(out, clause)?;
            }
            if let Some(default) = &cases.default {
                out.write_str(" (default")?;
                write_stmts(out, &default.body)?;
                out.write_char(')')?;
            }
            for clause in &cases.after_default {
                write_case(out, clause)?;
            }
            out.write_char(')')
        }
        StmtKind::Labelled { label, body } => {
            write!(out, "(label {} ", label.as_str())?;
            write_stmt(out, body)?;
            out.write_char(')')
        }
        StmtKind::Throw(value) => {
            out.write_str("(throw ")?;
            write_expr(out, value)?;
            out.write_char(')')
        }
        StmtKind::Try { block, handler } => {
            out.write_str("(try ")?;
            write_block(out, block)?;
            if let Some(catch) = handler.catch() {
                write!(out, " (catch {} ", catch.param.as_str())?;
                write_block(out, &catch.body)?;
                out.write_char(')')?;
            }
            if let Some(finally) = handler.finally() {
                out.write_str(" (finally ")?;
                write_block(out, finally)?;
                out.write_char(')')?;
            }
            out.write_char(')')
        }
        StmtKind::Debugger => out.write_str("(debugger)"),
        StmtKind::Import(decl) => {
            out.write_str("(import ")?;
            if let Some(alias) = decl.alias {
                write!(out, "{} = ", alias.as_str())?;
            }
            out.write_str(&decl.path_string())?;
            if decl.wildcard {
                out.write_str(".*")?;
            }
            out.write_char(')')
        }
        StmtKind::Function(function) => write_function(out, function),
    }
}

fn write_block(out: Out<'_, '_>, block: &Block) -> fmt::Result {
    out.write_str("(block")?;
    write_stmts(out, &block.body)?;
    out.write_char(')')
}

fn write_var_decl(out: Out<'_, '_>, decl: &VarDecl) -> fmt::Result {
    write!(out, "({}", decl.kind.as_str())?;
    for declarator in &decl.declarations {
        out.write_char(' ')?;
        write_declarator(out, declarator)?;
    }
    out.write_char(')')
}

fn write_declarator(out: Out<'_, '_>, declarator: &VarDeclarator) -> fmt::Result {
    match &declarator.init {
        Some(init) => {
            write!(out, "(= {} ", declarator.name.as_str())?;
            write_expr(out, init)?;
            out.write_char(')')
        }
        None => out.write_str(declarator.name.as_str()),
    }
}

fn write_jump(out: Out<'_, '_>, keyword: &str, label: Option<&Ident>) -> fmt::Result {
    match label {
        Some(label) => write!(out, "({} {})", keyword, label.as_str()),
        None => write!(out, "({})", keyword),
    }
}

fn write_case(out: Out<'_, '_>, clause: &CaseClause) -> fmt::Result {
    out.write_str(" (case ")?;
    write_expr(out, &clause.test)?;
    write_stmts(out, &clause.body)?;
    out.write_char(')')
}

fn write_function(out: Out<'_, '_>, function: &Function) -> fmt::Result {
    out.write_str("(function ")?;
    match function.name {
        Some(name) => out.write_str(name.as_str())?,
        None => out.write_char('_')?,
    }
    let params: Vec<&str> = function.params.iter().map(|p| p.as_str()).collect();
    write!(out, " ({})", params.join(" "))?;
    write_stmts(out, &function.body.body)?;
    out.write_char(')')
}

fn write_expr(out: Out<'_, '_>, expr: &Expr) -> fmt::Result {
    match &expr.kind {
        ExprKind::Null => out.write_str("null"),
        ExprKind::Bool(b) => write!(out, "{}", b),
        ExprKind::Number(n) => write!(out, "{}", n),
        ExprKind::String(s) => write!(out, "{:?}", s.as_str()),
        ExprKind::Regex { pattern, flags } => write!(out, "/{}/{}", pattern, flags),
        ExprKind::This => out.write_str("this"),
        ExprKind::Ident(ident) => out.write_str(ident.as_str()),
        ExprKind::Array(array) => {
            out.write_str("(array")?;
            for element in &array.elements {
                for _ in 0..element.elision {
                    out.write_str(" _")?;
                }
                out.write_char(' ')?;
                write_expr(out, &element.value)?;
            }
            for _ in 0..array.trailing_elision {
                out.write_str(" _")?;
            }
            out.write_char(')')
        }
        ExprKind::Object(properties) => {
            out.write_str("(object")?;
            for property in properties {
                out.write_char(' ')?;
                write_property(out, property)?;
            }
            out.write_char(')')
        }
        ExprKind::Group(inner) => write_node(out, "group", &[inner]),
        ExprKind::Function(function) => write_function(out, function),
        ExprKind::Dot { object, property } => {
            out.write_str("(. ")?;
            write_expr(out, object)?;
            write!(out, " {})", property.as_str())
        }
        ExprKind::Index { object, index } => write_node(out, "[]", &[object, index]),
        ExprKind::Call { callee, args } => write_call(out, "call", callee, args),
        ExprKind::New { callee, args } => {
            write_call(out, "new", callee, args.as_deref().unwrap_or(&[]))
        }
        ExprKind::Unary { op, operand } => write_node(out, op.as_str(), &[operand]),
        ExprKind::Update {
            op,
            prefix,
            operand,
        } => {
            let fixity = if *prefix { "prefix" } else { "postfix" };
            write!(out, "({} {} ", fixity, op.as_str())?;
            write_expr(out, operand)?;
            out.write_char(')')
        }
        ExprKind::Binary { op, left, right } => write_node(out, op.as_str(), &[left, right]),
        ExprKind::Logical { op, left, right } => write_node(out, op.as_str(), &[left, right]),
        ExprKind::Conditional {
            test,
            consequent,
            alternate,
        } => write_node(out, "?", &[test, consequent, alternate]),
        ExprKind::Assign { op, target, value } => write_node(out, op.as_str(), &[target, value]),
        ExprKind::Comma { left, right } => write_node(out, ",", &[left, right]),
    }
}

/// `(head a b ...)`
fn write_node<E: AsRef<Expr>>(out: Out<'_, '_>, head: &str, children: &[E]) -> fmt::Result {
    write!(out, "({}", head)?;
    for child in children {
        out.write_char(' ')?;
        write_expr(out, child.as_ref())?;
    }
    out.write_char(')')
}

fn write_call(out: Out<'_, '_>, head: &str, callee: &Expr, args: &[Expr]) -> fmt::Result {
    write!(out, "({} ", head)?;
    write_expr(out, callee)?;
    for arg in args {
        out.write_char(' ')?;
        write_expr(out, arg)?;
    }
    out.write_char(')')
}

fn write_property(out: Out<'_, '_>, property: &Property) -> fmt::Result {
    out.write_char('(')?;
    match property.value {
        PropertyValue::Init(_) => {}
        PropertyValue::Getter(_) => out.write_str("get ")?,
        PropertyValue::Setter(_) => out.write_str("set ")?,
    }
    match property.key {
        PropertyKey::Ident(name) => out.write_str(name.as_str())?,
        PropertyKey::String(s) => write!(out, "{:?}", s.as_str())?,
        PropertyKey::Number(n) => write!(out, "{}", n)?,
    }
    out.write_char(' ')?;
    match &property.value {
        PropertyValue::Init(expr) => write_expr(out, expr)?,
        PropertyValue::Getter(function) | PropertyValue::Setter(function) => {
            write_function(out, function)?
        }
    }
    out.write_char(')')
}
