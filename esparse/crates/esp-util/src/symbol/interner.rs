//! Global string table backing [`Symbol`](super::Symbol).
//!
//! The table is append-only. Strings are leaked on first interning so that
//! `Symbol::as_str` can hand out `&'static str` without holding the lock.
//! An `IndexSet` gives both directions in O(1): the set index is the symbol id.

use indexmap::IndexSet;
use parking_lot::RwLock;
use rustc_hash::FxHasher;
use std::hash::BuildHasherDefault;
use std::sync::LazyLock;

type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// The process-wide string table.
pub(crate) static STRING_TABLE: LazyLock<StringTable> = LazyLock::new(StringTable::new);

pub(crate) struct StringTable {
    strings: RwLock<FxIndexSet<&'static str>>,
}

impl StringTable {
    fn new() -> Self {
        Self {
            strings: RwLock::new(FxIndexSet::default()),
        }
    }

    /// Returns the index of `s`, inserting it on a miss.
    pub(crate) fn intern(&self, s: &str) -> u32 {
        // Read lock first: hits are by far the common case in a lexer.
        if let Some(index) = self.strings.read().get_index_of(s) {
            return to_u32(index);
        }

        let mut strings = self.strings.write();
        // Another thread may have inserted between the two locks.
        if let Some(index) = strings.get_index_of(s) {
            return to_u32(index);
        }
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let (index, _) = strings.insert_full(leaked);
        to_u32(index)
    }

    pub(crate) fn get(&self, index: u32) -> Option<&'static str> {
        self.strings.read().get_index(index as usize).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.strings.read().len()
    }

    pub(crate) fn total_bytes(&self) -> usize {
        self.strings.read().iter().map(|s| s.len()).sum()
    }
}

#[inline]
fn to_u32(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}
