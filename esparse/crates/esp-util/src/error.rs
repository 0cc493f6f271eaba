//! Core error types for esp-util.

use thiserror::Error;

/// Errors raised when a span is mapped back onto a [`SourceFile`](crate::SourceFile).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The span reaches past the end of the buffer.
    #[error("span {start}..{end} is out of range for a source of {len} bytes")]
    SpanOutOfRange { start: usize, end: usize, len: usize },

    /// The span splits a multi-byte character.
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary { offset: usize },

    /// Line numbers are 1-based and bounded by the line count.
    #[error("line {line} does not exist (source has {max_lines} lines)")]
    InvalidLine { line: usize, max_lines: usize },
}

/// Result type alias for source lookups.
pub type SourceResult<T> = std::result::Result<T, SourceError>;
