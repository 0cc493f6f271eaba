//! Named source buffers with a line index.

use crate::error::{SourceError, SourceResult};
use crate::span::Span;
use std::fmt;
use std::sync::Arc;

/// ECMAScript line terminators: LF, CR, LS and PS.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// A source buffer and the byte offset of every line start.
///
/// ```
/// use esp_util::span::SourceFile;
///
/// let file = SourceFile::new("a.js", "var a;\r\nvar b;\u{2028}b");
/// assert_eq!(file.line_count(), 3);
/// assert_eq!(file.line_text(2), Some("var b;"));
/// assert_eq!(file.line_text(3), Some("b"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    src: Arc<str>,
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, src: impl Into<Arc<str>>) -> Self {
        let src = src.into();
        let line_starts = Self::compute_line_starts(&src);
        Self {
            name: name.into(),
            src,
            line_starts,
        }
    }

    fn compute_line_starts(src: &str) -> Arc<[usize]> {
        let mut starts = vec![0];
        let mut chars = src.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if !is_line_terminator(c) {
                continue;
            }
            // CR LF is a single terminator.
            if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
                chars.next();
                starts.push(i + 2);
            } else {
                starts.push(i + c.len_utf8());
            }
        }
        starts.into()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a 1-based line, without its terminator.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.src.len());
        self.src
            .get(start..end)
            .map(|text| text.trim_end_matches(is_line_terminator))
    }

    /// Like [`line_text`](Self::line_text), but with a typed error.
    pub fn try_line_text(&self, line: usize) -> SourceResult<&str> {
        self.line_text(line).ok_or(SourceError::InvalidLine {
            line,
            max_lines: self.line_count(),
        })
    }

    /// The source text a span covers.
    pub fn snippet(&self, span: Span) -> SourceResult<&str> {
        if span.start > span.end || span.end > self.src.len() {
            return Err(SourceError::SpanOutOfRange {
                start: span.start,
                end: span.end,
                len: self.src.len(),
            });
        }
        for offset in [span.start, span.end] {
            if !self.src.is_char_boundary(offset) {
                return Err(SourceError::NotCharBoundary { offset });
            }
        }
        Ok(&self.src[span.start..span.end])
    }
}

impl fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.src.len())
            .field("lines", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line() {
        let file = SourceFile::new("t.js", "a = 1");
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.line_text(1), Some("a = 1"));
        assert_eq!(file.line_text(0), None);
        assert_eq!(file.line_text(2), None);
    }

    #[test]
    fn test_all_terminators() {
        let file = SourceFile::new("t.js", "a\nb\rc\r\nd\u{2028}e\u{2029}f");
        let lines: Vec<_> = (1..=file.line_count())
            .map(|l| file.line_text(l).unwrap())
            .collect();
        assert_eq!(lines, ["a", "b", "c", "d", "e", "f"]);
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let file = SourceFile::new("t.js", "x;\n");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.line_text(2), Some(""));
    }

    #[test]
    fn test_snippet() {
        let file = SourceFile::new("t.js", "var answer = 42;");
        let span = Span::new(4, 10, 1, 5, 1, 11);
        assert_eq!(file.snippet(span).unwrap(), "answer");
    }

    #[test]
    fn test_snippet_out_of_range() {
        let file = SourceFile::new("t.js", "abc");
        let err = file.snippet(Span::new(1, 10, 1, 2, 1, 11)).unwrap_err();
        assert_eq!(
            err,
            SourceError::SpanOutOfRange {
                start: 1,
                end: 10,
                len: 3
            }
        );
    }

    #[test]
    fn test_snippet_not_char_boundary() {
        let file = SourceFile::new("t.js", "'\u{e9}'");
        let err = file.snippet(Span::new(0, 2, 1, 1, 1, 3)).unwrap_err();
        assert_eq!(err, SourceError::NotCharBoundary { offset: 2 });
    }

    #[test]
    fn test_try_line_text_error() {
        let file = SourceFile::new("t.js", "a");
        assert!(matches!(
            file.try_line_text(5),
            Err(SourceError::InvalidLine { line: 5, max_lines: 1 })
        ));
    }
}
