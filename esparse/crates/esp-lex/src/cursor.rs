//! Character cursor for traversing source code.
//!
//! The cursor keeps the byte position together with the 1-based line and
//! column. Line tracking follows ECMAScript: LF, CR, LS and PS each end a
//! line, and CR LF counts once.

/// Saved cursor state, restored by [`Cursor::restore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position.
    pub position: usize,
    /// Line (1-based).
    pub line: u32,
    /// Column (1-based, in characters).
    pub column: u32,
}

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use esp_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\r\nb");
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.line(), 1);
/// cursor.advance();
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
/// assert_eq!(cursor.current_char(), 'b');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the current position, or `'\0'` at the end.
    ///
    /// A NUL in the source is indistinguishable from the end by this method
    /// alone; callers that care check [`is_at_end`](Self::is_at_end) first.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead, or `'\0'`.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = &self.source[self.position..];
        if offset == 0 {
            return rest.chars().next().unwrap_or('\0');
        }
        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Advances past the current character, updating line and column.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            match b {
                b'\n' => self.new_line(),
                // CR LF: the LF that follows ends the line.
                b'\r' if self.source.as_bytes().get(self.position) != Some(&b'\n') => {
                    self.new_line()
                }
                _ => self.column += 1,
            }
            return;
        }

        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\u{2028}' || c == '\u{2029}' {
                self.new_line();
            } else {
                self.column += 1;
            }
        }
    }

    #[inline]
    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes `expected` if it is the current character.
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The whole source buffer.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Rewinds (or fast-forwards) to a previously captured state.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position.min(self.source.len());
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_peek() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
    }

    #[test]
    fn test_unicode_columns() {
        let mut cursor = Cursor::new("\u{3b1}\u{3b2}x");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.column(), 3);
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.current_char(), 'x');
    }

    #[test]
    fn test_line_terminators() {
        let mut cursor = Cursor::new("a\rb\u{2028}c\u{2029}d\ne");
        while !cursor.is_at_end() {
            cursor.advance();
        }
        assert_eq!(cursor.line(), 5);
        assert_eq!(cursor.column(), 2);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        let snap = cursor.snapshot();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 2);
        cursor.restore(snap);
        assert_eq!(cursor.current_char(), 'b');
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
    }

    #[test]
    fn test_match_char_and_slice() {
        let mut cursor = Cursor::new(">>=");
        assert!(cursor.match_char('>'));
        assert!(cursor.match_char('>'));
        assert!(!cursor.match_char('>'));
        assert!(cursor.match_char('='));
        assert_eq!(cursor.slice_from(0), ">>=");
        assert_eq!(cursor.remaining(), "");
    }
}
