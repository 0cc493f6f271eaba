//! Abstract syntax tree.
//!
//! Nodes are plain data. Every child is owned by exactly one parent through
//! a `Box` or `Vec`, and the [`Program`] owns the whole tree. Each
//! expression and statement carries the span of the tokens consumed to
//! build it.

use esp_util::{Span, Symbol};

/// A name with its location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ident {
    /// Interned name
    pub name: Symbol,
    /// Source location
    pub span: Span,
}

impl Ident {
    pub fn new(name: Symbol, span: Span) -> Self {
        Self { name, span }
    }

    pub fn as_str(&self) -> &'static str {
        self.name.as_str()
    }
}

// ============================================================================
// PROGRAM AND FUNCTIONS
// ============================================================================

/// The root node: the top-level source elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    /// Source elements in order
    pub body: Vec<Stmt>,
    /// Span of all tokens in the program
    pub span: Span,
}

/// A function declaration, function expression or accessor.
#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    /// Always present for declarations
    pub name: Option<Ident>,
    /// Formal parameters, in order
    pub params: Vec<Ident>,
    /// Body, including the braces
    pub body: FunctionBody,
    /// From `function` (or the accessor key) to the closing brace
    pub span: Span,
}

/// A braced list of source elements.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionBody {
    pub body: Vec<Stmt>,
    pub span: Span,
}

// ============================================================================
// STATEMENTS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum StmtKind {
    /// `{ ... }`
    Block(Block),
    /// `var a = 1, b;` or `const c = 2;`
    Var(VarDecl),
    /// `;`
    Empty,
    /// An expression followed by a terminator
    Expr(Expr),
    /// `if (test) consequent else alternate`
    If {
        test: Expr,
        consequent: Box<Stmt>,
        alternate: Option<Box<Stmt>>,
    },
    /// `while (test) body`
    While { test: Expr, body: Box<Stmt> },
    /// `do body while (test);`
    DoWhile { body: Box<Stmt>, test: Expr },
    /// `for (init; test; update) body`
    For {
        init: Option<ForInit>,
        test: Option<Expr>,
        update: Option<Expr>,
        body: Box<Stmt>,
    },
    /// `for (target in object) body`
    ForIn {
        target: ForInTarget,
        object: Expr,
        body: Box<Stmt>,
    },
    /// `continue label;`
    Continue(Option<Ident>),
    /// `break label;`
    Break(Option<Ident>),
    /// `return value;`
    Return(Option<Expr>),
    /// `with (object) body`
    With { object: Expr, body: Box<Stmt> },
    /// `switch (discriminant) { ... }`
    Switch { discriminant: Expr, cases: CaseBlock },
    /// `label: body`
    Labelled { label: Ident, body: Box<Stmt> },
    /// `throw value;`
    Throw(Expr),
    /// `try { } catch (e) { } finally { }`
    Try { block: Block, handler: TryHandler },
    /// `debugger;`
    Debugger,
    /// `import a.b.*;`, `import a.b;`, `import x = a.b;`
    Import(ImportDecl),
    /// `function name(params) { body }` at source-element level
    Function(Function),
}

/// A braced statement list.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub body: Vec<Stmt>,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VarKind {
    Var,
    Const,
}

impl VarKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VarKind::Var => "var",
            VarKind::Const => "const",
        }
    }
}

/// A `var` or `const` declaration list.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDecl {
    pub kind: VarKind,
    /// Never empty
    pub declarations: Vec<VarDeclarator>,
    pub span: Span,
}

/// `name` or `name = init`.
#[derive(Clone, Debug, PartialEq)]
pub struct VarDeclarator {
    pub name: Ident,
    pub init: Option<Expr>,
    pub span: Span,
}

/// First clause of a C-style `for`.
#[derive(Clone, Debug, PartialEq)]
pub enum ForInit {
    Var(VarDecl),
    Expr(Expr),
}

/// What a `for-in` assigns to on each iteration.
#[derive(Clone, Debug, PartialEq)]
pub enum ForInTarget {
    /// An identifier or member expression, parentheses removed.
    Expr(Expr),
    /// `var name` or `var name = init`.
    Var(VarDeclarator),
}

/// The clauses of a `switch`. There is at most one `default`, and clause
/// order is kept on both sides of it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CaseBlock {
    pub before_default: Vec<CaseClause>,
    pub default: Option<DefaultClause>,
    pub after_default: Vec<CaseClause>,
}

impl CaseBlock {
    /// Total number of clauses, counting `default`.
    pub fn len(&self) -> usize {
        self.before_default.len() + self.after_default.len() + usize::from(self.default.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `case test: body`
#[derive(Clone, Debug, PartialEq)]
pub struct CaseClause {
    pub test: Expr,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `default: body`
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultClause {
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// `catch (param) body`
#[derive(Clone, Debug, PartialEq)]
pub struct CatchClause {
    pub param: Ident,
    pub body: Block,
    pub span: Span,
}

/// The handlers of a `try`. At least one of catch and finally is present.
#[derive(Clone, Debug, PartialEq)]
pub enum TryHandler {
    Catch(CatchClause),
    Finally(Block),
    CatchFinally(CatchClause, Block),
}

impl TryHandler {
    pub fn catch(&self) -> Option<&CatchClause> {
        match self {
            TryHandler::Catch(c) | TryHandler::CatchFinally(c, _) => Some(c),
            TryHandler::Finally(_) => None,
        }
    }

    pub fn finally(&self) -> Option<&Block> {
        match self {
            TryHandler::Finally(f) | TryHandler::CatchFinally(_, f) => Some(f),
            TryHandler::Catch(_) => None,
        }
    }
}

/// A package import.
///
/// Purely declarative: the parser records the dotted path and nothing is
/// loaded. `alias` binds a local name to the package; a wildcard import
/// cannot be aliased.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportDecl {
    /// Dotted package path, never empty
    pub path: Vec<Ident>,
    /// `import a.b.*;`
    pub wildcard: bool,
    /// `import alias = a.b;`
    pub alias: Option<Ident>,
}

impl ImportDecl {
    /// `a.b.c`
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    Null,
    Bool(bool),
    Number(f64),
    String(Symbol),
    Regex { pattern: Symbol, flags: Symbol },
    This,
    Ident(Ident),
    Array(ArrayLiteral),
    Object(Vec<Property>),
    /// `( expr )`
    Group(Box<Expr>),
    Function(Box<Function>),
    /// `object.property`
    Dot { object: Box<Expr>, property: Ident },
    /// `object[index]`
    Index { object: Box<Expr>, index: Box<Expr> },
    Call { callee: Box<Expr>, args: Vec<Expr> },
    /// `new callee` or `new callee(args)`
    New {
        callee: Box<Expr>,
        args: Option<Vec<Expr>>,
    },
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// `++x`, `x--`, ...
    Update {
        op: UpdateOp,
        prefix: bool,
        operand: Box<Expr>,
    },
    /// Arithmetic, bitwise, shift, relational and equality operators
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `&&` and `||`
    Logical {
        op: LogicalOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// `test ? consequent : alternate`
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    Assign {
        op: AssignOp,
        target: Box<Expr>,
        value: Box<Expr>,
    },
    /// `left, right`
    Comma { left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The expression with any grouping parentheses removed.
    pub fn unparenthesized(&self) -> &Expr {
        let mut expr = self;
        while let ExprKind::Group(inner) = &expr.kind {
            expr = inner;
        }
        expr
    }

    /// Owned form of [`unparenthesized`](Self::unparenthesized).
    pub fn into_unparenthesized(self) -> Expr {
        let mut expr = self;
        while let ExprKind::Group(inner) = expr.kind {
            expr = *inner;
        }
        expr
    }

    /// An identifier reference or member access, ignoring parentheses.
    pub fn is_lvalue_shaped(&self) -> bool {
        matches!(
            self.unparenthesized().kind,
            ExprKind::Ident(_) | ExprKind::Dot { .. } | ExprKind::Index { .. }
        )
    }

    /// Whether the expression is a LeftHandSideExpression in the grammar:
    /// a primary, member, call or `new` expression.
    pub fn is_left_hand_side(&self) -> bool {
        !matches!(
            self.kind,
            ExprKind::Unary { .. }
                | ExprKind::Update { .. }
                | ExprKind::Binary { .. }
                | ExprKind::Logical { .. }
                | ExprKind::Conditional { .. }
                | ExprKind::Assign { .. }
                | ExprKind::Comma { .. }
        )
    }
}

/// `[a, , b]`: each element records how many holes precede it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ArrayLiteral {
    pub elements: Vec<ArrayElement>,
    /// Holes after the last element
    pub trailing_elision: u32,
}

impl ArrayLiteral {
    /// The array's `length`: elements plus holes.
    pub fn length(&self) -> u64 {
        let holes: u64 = self.elements.iter().map(|e| u64::from(e.elision)).sum();
        self.elements.len() as u64 + holes + u64::from(self.trailing_elision)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArrayElement {
    /// Holes immediately before this element
    pub elision: u32,
    pub value: Expr,
}

/// One entry of an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub key: PropertyKey,
    pub value: PropertyValue,
    pub span: Span,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyKey {
    /// Identifier name, keywords included
    Ident(Symbol),
    String(Symbol),
    Number(f64),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// `key: value`
    Init(Expr),
    /// `get key() { }`
    Getter(Function),
    /// `set key(v) { }`
    Setter(Function),
}

// ============================================================================
// OPERATORS
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Delete,
    Void,
    TypeOf,
    Plus,
    Minus,
    BitNot,
    Not,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Delete => "delete",
            UnaryOp::Void => "void",
            UnaryOp::TypeOf => "typeof",
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::BitNot => "~",
            UnaryOp::Not => "!",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UpdateOp {
    Increment,
    Decrement,
}

impl UpdateOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateOp::Increment => "++",
            UpdateOp::Decrement => "--",
        }
    }
}

/// Grouping of binary operators by precedence level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryCategory {
    Multiplicative,
    Additive,
    Shift,
    Relational,
    Equality,
    Bitwise,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Mul,
    Div,
    Mod,
    Add,
    Sub,
    Shl,
    Shr,
    UShr,
    Lt,
    Gt,
    LtEq,
    GtEq,
    InstanceOf,
    In,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    BitAnd,
    BitXor,
    BitOr,
}

impl BinaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::UShr => ">>>",
            BinaryOp::Lt => "<",
            BinaryOp::Gt => ">",
            BinaryOp::LtEq => "<=",
            BinaryOp::GtEq => ">=",
            BinaryOp::InstanceOf => "instanceof",
            BinaryOp::In => "in",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::StrictEq => "===",
            BinaryOp::StrictNotEq => "!==",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
        }
    }

    pub fn category(self) -> BinaryCategory {
        use BinaryOp::*;
        match self {
            Mul | Div | Mod => BinaryCategory::Multiplicative,
            Add | Sub => BinaryCategory::Additive,
            Shl | Shr | UShr => BinaryCategory::Shift,
            Lt | Gt | LtEq | GtEq | InstanceOf | In => BinaryCategory::Relational,
            Eq | NotEq | StrictEq | StrictNotEq => BinaryCategory::Equality,
            BitAnd | BitXor | BitOr => BinaryCategory::Bitwise,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn as_str(self) -> &'static str {
        match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssignOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Shl,
    Shr,
    UShr,
    BitAnd,
    BitXor,
    BitOr,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Sub => "-=",
            AssignOp::Mul => "*=",
            AssignOp::Div => "/=",
            AssignOp::Mod => "%=",
            AssignOp::Shl => "<<=",
            AssignOp::Shr => ">>=",
            AssignOp::UShr => ">>>=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitXor => "^=",
            AssignOp::BitOr => "|=",
        }
    }
}
