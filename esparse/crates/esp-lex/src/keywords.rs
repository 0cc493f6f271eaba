//! Reserved-word lookup.
//!
//! The table is an ordinary value: build it once with [`KeywordTable::new`]
//! and lend it to every [`Lexer`](crate::Lexer) that needs it. Nothing is
//! registered globally.

use crate::token::TokenKind;
use rustc_hash::FxHashMap;

/// How a reserved spelling is classified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeywordClass {
    /// A keyword with its own token kind.
    Keyword(TokenKind),
    /// A future reserved word, lexed as [`TokenKind::Reserved`].
    FutureReserved,
}

const KEYWORDS: &[(&str, TokenKind)] = &[
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("catch", TokenKind::Catch),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("debugger", TokenKind::Debugger),
    ("default", TokenKind::Default),
    ("delete", TokenKind::Delete),
    ("do", TokenKind::Do),
    ("else", TokenKind::Else),
    ("false", TokenKind::False),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("function", TokenKind::Function),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("instanceof", TokenKind::InstanceOf),
    ("new", TokenKind::New),
    ("null", TokenKind::Null),
    ("return", TokenKind::Return),
    ("switch", TokenKind::Switch),
    ("this", TokenKind::This),
    ("throw", TokenKind::Throw),
    ("true", TokenKind::True),
    ("try", TokenKind::Try),
    ("typeof", TokenKind::TypeOf),
    ("var", TokenKind::Var),
    ("void", TokenKind::Void),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
];

const FUTURE_RESERVED: &[&str] = &[
    "abstract",
    "boolean",
    "byte",
    "char",
    "class",
    "double",
    "enum",
    "export",
    "extends",
    "final",
    "float",
    "goto",
    "implements",
    "int",
    "interface",
    "long",
    "native",
    "package",
    "private",
    "protected",
    "public",
    "short",
    "static",
    "super",
    "synchronized",
    "throws",
    "transient",
    "volatile",
];

/// Immutable map from reserved spellings to their classification.
///
/// ```
/// use esp_lex::{KeywordClass, KeywordTable, TokenKind};
///
/// let table = KeywordTable::new();
/// assert_eq!(table.lookup("typeof"), Some(KeywordClass::Keyword(TokenKind::TypeOf)));
/// assert_eq!(table.lookup("class"), Some(KeywordClass::FutureReserved));
/// assert_eq!(table.lookup("foo"), None);
/// ```
#[derive(Clone, Debug)]
pub struct KeywordTable {
    map: FxHashMap<&'static str, KeywordClass>,
}

impl KeywordTable {
    /// Builds the table of ECMAScript keywords and future reserved words.
    pub fn new() -> Self {
        let mut map =
            FxHashMap::with_capacity_and_hasher(KEYWORDS.len() + FUTURE_RESERVED.len(), Default::default());
        for &(word, kind) in KEYWORDS {
            map.insert(word, KeywordClass::Keyword(kind));
        }
        for &word in FUTURE_RESERVED {
            map.insert(word, KeywordClass::FutureReserved);
        }
        Self { map }
    }

    /// Classifies `word`, or `None` for an ordinary identifier.
    #[inline]
    pub fn lookup(&self, word: &str) -> Option<KeywordClass> {
        self.map.get(word).copied()
    }

    /// Whether `word` cannot be used as an identifier.
    pub fn is_reserved(&self, word: &str) -> bool {
        self.map.contains_key(word)
    }

    /// Number of reserved spellings.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}
