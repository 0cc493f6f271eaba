//! Token definitions.
//!
//! Keywords and punctuators are their own variants, so the parser can match
//! on them directly and can still recover a keyword's spelling when it is
//! used as a property name (`a.default`, `{ if: 1 }`).

use esp_util::{Span, Symbol};
use std::fmt;

/// The kind of a token, with the decoded value of literals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    // ===== Keywords =====
    /// `break`
    Break,
    /// `case`
    Case,
    /// `catch`
    Catch,
    /// `const`
    Const,
    /// `continue`
    Continue,
    /// `debugger`
    Debugger,
    /// `default`
    Default,
    /// `delete`
    Delete,
    /// `do`
    Do,
    /// `else`
    Else,
    /// `false`
    False,
    /// `finally`
    Finally,
    /// `for`
    For,
    /// `function`
    Function,
    /// `if`
    If,
    /// `import`
    Import,
    /// `in`
    In,
    /// `instanceof`
    InstanceOf,
    /// `new`
    New,
    /// `null`
    Null,
    /// `return`
    Return,
    /// `switch`
    Switch,
    /// `this`
    This,
    /// `throw`
    Throw,
    /// `true`
    True,
    /// `try`
    Try,
    /// `typeof`
    TypeOf,
    /// `var`
    Var,
    /// `void`
    Void,
    /// `while`
    While,
    /// `with`
    With,

    // ===== Punctuators =====
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `===`
    EqEqEq,
    /// `!==`
    NotEqEq,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `%`
    Percent,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `>>>`
    UShr,
    /// `&`
    Amp,
    /// `|`
    Pipe,
    /// `^`
    Caret,
    /// `!`
    Bang,
    /// `~`
    Tilde,
    /// `&&`
    AmpAmp,
    /// `||`
    PipePipe,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `=`
    Eq,
    /// `+=`
    PlusEq,
    /// `-=`
    MinusEq,
    /// `*=`
    StarEq,
    /// `%=`
    PercentEq,
    /// `<<=`
    ShlEq,
    /// `>>=`
    ShrEq,
    /// `>>>=`
    UShrEq,
    /// `&=`
    AmpEq,
    /// `|=`
    PipeEq,
    /// `^=`
    CaretEq,
    /// `/`, until the parser asks for a regex re-scan
    Slash,
    /// `/=`, until the parser asks for a regex re-scan
    SlashEq,

    // ===== Names and literals =====
    /// An identifier.
    Ident(Symbol),
    /// A future reserved word (`class`, `enum`, ...).
    Reserved(Symbol),
    /// A numeric literal, decoded.
    Number(f64),
    /// A string literal, with escapes decoded.
    String(Symbol),
    /// A regular expression literal. The pattern is kept verbatim.
    Regex {
        /// Text between the slashes.
        pattern: Symbol,
        /// Flag characters after the closing slash.
        flags: Symbol,
    },
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Spelling of keywords and punctuators.
    pub fn fixed_str(&self) -> Option<&'static str> {
        use TokenKind::*;
        let s = match self {
            Break => "break",
            Case => "case",
            Catch => "catch",
            Const => "const",
            Continue => "continue",
            Debugger => "debugger",
            Default => "default",
            Delete => "delete",
            Do => "do",
            Else => "else",
            False => "false",
            Finally => "finally",
            For => "for",
            Function => "function",
            If => "if",
            Import => "import",
            In => "in",
            InstanceOf => "instanceof",
            New => "new",
            Null => "null",
            Return => "return",
            Switch => "switch",
            This => "this",
            Throw => "throw",
            True => "true",
            Try => "try",
            TypeOf => "typeof",
            Var => "var",
            Void => "void",
            While => "while",
            With => "with",
            LBrace => "{",
            RBrace => "}",
            LParen => "(",
            RParen => ")",
            LBracket => "[",
            RBracket => "]",
            Dot => ".",
            Semicolon => ";",
            Comma => ",",
            Lt => "<",
            Gt => ">",
            LtEq => "<=",
            GtEq => ">=",
            EqEq => "==",
            NotEq => "!=",
            EqEqEq => "===",
            NotEqEq => "!==",
            Plus => "+",
            Minus => "-",
            Star => "*",
            Percent => "%",
            PlusPlus => "++",
            MinusMinus => "--",
            Shl => "<<",
            Shr => ">>",
            UShr => ">>>",
            Amp => "&",
            Pipe => "|",
            Caret => "^",
            Bang => "!",
            Tilde => "~",
            AmpAmp => "&&",
            PipePipe => "||",
            Question => "?",
            Colon => ":",
            Eq => "=",
            PlusEq => "+=",
            MinusEq => "-=",
            StarEq => "*=",
            PercentEq => "%=",
            ShlEq => "<<=",
            ShrEq => ">>=",
            UShrEq => ">>>=",
            AmpEq => "&=",
            PipeEq => "|=",
            CaretEq => "^=",
            Slash => "/",
            SlashEq => "/=",
            Ident(_) | Reserved(_) | Number(_) | String(_) | Regex { .. } | Eof => return None,
        };
        Some(s)
    }

    /// Returns true for the keyword variants.
    pub fn is_keyword(&self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Break
                | Case
                | Catch
                | Const
                | Continue
                | Debugger
                | Default
                | Delete
                | Do
                | Else
                | False
                | Finally
                | For
                | Function
                | If
                | Import
                | In
                | InstanceOf
                | New
                | Null
                | Return
                | Switch
                | This
                | Throw
                | True
                | Try
                | TypeOf
                | Var
                | Void
                | While
                | With
        )
    }

    /// The spelling of a keyword, for use as a property name.
    pub fn keyword_str(&self) -> Option<&'static str> {
        if self.is_keyword() {
            self.fixed_str()
        } else {
            None
        }
    }

    /// The name carried by identifiers, keywords and future reserved words,
    /// i.e. anything allowed after `.` or as an object key.
    pub fn identifier_name(&self) -> Option<Symbol> {
        match self {
            TokenKind::Ident(s) | TokenKind::Reserved(s) => Some(*s),
            other => other.keyword_str().map(Symbol::intern),
        }
    }

    /// Human-readable description for error messages.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(s) => format!("identifier '{}'", s),
            TokenKind::Reserved(s) => format!("reserved word '{}'", s),
            TokenKind::Number(n) => format!("number {}", n),
            TokenKind::String(_) => "string literal".to_string(),
            TokenKind::Regex { .. } => "regular expression".to_string(),
            TokenKind::Eof => "end of input".to_string(),
            other => format!("'{}'", other.fixed_str().unwrap_or("?")),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(s) | TokenKind::Reserved(s) => write!(f, "{}", s),
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::String(s) => write!(f, "{:?}", s.as_str()),
            TokenKind::Regex { pattern, flags } => write!(f, "/{}/{}", pattern, flags),
            TokenKind::Eof => f.write_str("<eof>"),
            other => f.write_str(other.fixed_str().unwrap_or("?")),
        }
    }
}

/// A token: kind, location and the ASI flag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Token {
    /// What was lexed.
    pub kind: TokenKind,
    /// Where it was lexed.
    pub span: Span,
    /// Whether a line terminator occurred between the previous token and
    /// this one.
    pub newline_before: bool,
}

static_assertions::assert_impl_all!(Token: Copy, Send, Sync);

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, span: Span, newline_before: bool) -> Self {
        Self {
            kind,
            span,
            newline_before,
        }
    }

    /// The raw lexeme in `source`, the buffer this token was lexed from.
    pub fn raw<'s>(&self, source: &'s str) -> &'s str {
        source.get(self.span.start..self.span.end).unwrap_or("")
    }

    /// Shorthand for `self.kind == kind`.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
