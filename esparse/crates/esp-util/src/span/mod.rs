//! Source locations.
//!
//! A [`Span`] records a byte range together with the 1-based line and column
//! of both ends, so errors can be reported without going back to the source
//! buffer. [`SourceFile`] maps the other way, from spans to source lines.

mod source_file;

pub use source_file::{is_line_terminator, SourceFile};

/// A region of source text.
///
/// `end` is exclusive. `end_line`/`end_column` locate the position just past
/// the last character of the region.
///
/// ```
/// use esp_util::span::Span;
///
/// let a = Span::new(0, 3, 1, 1, 1, 4);
/// let b = Span::new(6, 9, 2, 2, 2, 5);
/// let ab = a.to(b);
/// assert_eq!((ab.start, ab.end), (0, 9));
/// assert_eq!((ab.line, ab.end_line), (1, 2));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line of the first character (1-based)
    pub line: u32,
    /// Column of the first character (1-based, in characters)
    pub column: u32,
    /// Line of the end position
    pub end_line: u32,
    /// Column of the end position
    pub end_column: u32,
}

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);

impl Span {
    /// Placeholder span for synthesized nodes and tests.
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        end_line: 0,
        end_column: 0,
    };

    #[inline]
    pub const fn new(
        start: usize,
        end: usize,
        line: u32,
        column: u32,
        end_line: u32,
        end_column: u32,
    ) -> Self {
        Self {
            start,
            end,
            line,
            column,
            end_line,
            end_column,
        }
    }

    /// Zero-width span at a position.
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column, line, column)
    }

    /// Span running from the start of `self` to the end of `other`.
    ///
    /// `other` is expected to come after `self`; this is the operation the
    /// parser uses to cover a node's first and last tokens.
    #[inline]
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
            line: self.line,
            column: self.column,
            end_line: other.end_line,
            end_column: other.end_column,
        }
    }

    /// Smallest span covering both, regardless of order.
    pub fn merge(self, other: Span) -> Span {
        let (first, last) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        if first.end >= last.end {
            first
        } else {
            first.to(last)
        }
    }

    /// Zero-width span at the start of `self`.
    #[inline]
    pub fn shrink_to_lo(self) -> Span {
        Span::point(self.start, self.line, self.column)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether `other` lies entirely within `self`.
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_empty() {
        let p = Span::point(4, 1, 5);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
    }

    #[test]
    fn test_to_keeps_start_of_first_and_end_of_last() {
        let a = Span::new(2, 4, 1, 3, 1, 5);
        let b = Span::new(10, 12, 3, 1, 3, 3);
        let s = a.to(b);
        assert_eq!(s, Span::new(2, 12, 1, 3, 3, 3));
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = Span::new(2, 4, 1, 3, 1, 5);
        let b = Span::new(10, 12, 3, 1, 3, 3);
        assert_eq!(a.merge(b), b.merge(a));
        assert!(a.merge(b).contains(a));
        assert!(a.merge(b).contains(b));
    }

    #[test]
    fn test_merge_nested() {
        let outer = Span::new(0, 20, 1, 1, 1, 21);
        let inner = Span::new(5, 6, 1, 6, 1, 7);
        assert_eq!(outer.merge(inner), outer);
    }

    #[test]
    fn test_shrink_to_lo() {
        let s = Span::new(3, 9, 2, 4, 2, 10).shrink_to_lo();
        assert_eq!(s, Span::point(3, 2, 4));
    }
}
