//! Symbol module - string interning for identifiers and literal payloads.
//!
//! A [`Symbol`] is a compact (4-byte) handle to an interned string. Two
//! symbols are equal exactly when their strings are equal, so comparing
//! names in the AST is an integer compare.
//!
//! # Examples
//!
//! ```
//! use esp_util::symbol::Symbol;
//!
//! let s1 = Symbol::intern("hello");
//! let s2 = Symbol::intern("hello");
//! let s3 = Symbol::intern("world");
//!
//! assert_eq!(s1, s2);
//! assert_ne!(s1, s3);
//! assert_eq!(s3.as_str(), "world");
//! ```
//!
//! The table is shared by every thread in the process, so tokens and ASTs
//! produced on worker threads can be compared on the caller's thread.

mod interner;

use interner::STRING_TABLE;
use std::fmt;

/// Interned string handle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub(crate) index: u32,
}

static_assertions::assert_eq_size!(Symbol, u32);

impl Symbol {
    /// Interns `s` and returns its symbol.
    pub fn intern(s: &str) -> Self {
        Self {
            index: STRING_TABLE.intern(s),
        }
    }

    /// Returns the interned string.
    pub fn as_str(self) -> &'static str {
        // Indices only come from `intern`, so the lookup cannot miss.
        STRING_TABLE.get(self.index).unwrap_or("")
    }

    /// Raw table index, stable for the lifetime of the process.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.index
    }

    /// Compares against a plain string without interning it.
    pub fn eq_str(self, other: &str) -> bool {
        self.as_str() == other
    }

    pub fn is_empty(self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?})", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Symbol::intern(s)
    }
}

/// Size of the string table, for profiling output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InternerStats {
    /// Number of distinct interned strings.
    pub symbols: usize,
    /// Total bytes of string data held by the table.
    pub bytes: usize,
}

/// Snapshot of the global string table's size.
pub fn interner_stats() -> InternerStats {
    InternerStats {
        symbols: STRING_TABLE.len(),
        bytes: STRING_TABLE.total_bytes(),
    }
}
