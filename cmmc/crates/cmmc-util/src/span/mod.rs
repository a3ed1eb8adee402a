//! Span module - Source location tracking.
//!
//! A [`Span`] records where a token or diagnostic came from: the byte range
//! in the source text plus the human-readable line and column of its first
//! character.
//!
//! # Examples
//!
//! ```
//! use cmmc_util::span::Span;
//!
//! // "int" at the start of the second line of "x\nint"
//! let span = Span::new(2, 5, 2, 1);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.line, 2);
//! ```

mod source_file;

pub use source_file::SourceFile;

use std::fmt;

/// Source location span
///
/// Line and column are both 1-based. The column counts characters (a tab is
/// one column), not display cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_span() {
        let span = Span::new(10, 20, 3, 4);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 3);
        assert_eq!(span.column, 4);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Span::new(0, 1, 12, 7).to_string(), "12:7");
    }

    #[test]
    fn test_dummy() {
        assert!(Span::DUMMY.is_empty());
        assert_eq!(Span::DUMMY, Span::default());
    }
}
