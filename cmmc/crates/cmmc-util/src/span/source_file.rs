//! Loaded source text with line lookup.
//!
//! [`SourceFile`] owns the text handed to the lexer and precomputes where
//! each line starts so that diagnostics can quote the offending line.

use std::sync::Arc;

use crate::error::{SourceError, SourceResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use cmmc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.cmm", "int x;\nx = 1;");
/// assert_eq!(file.name(), "main.cmm");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("x = 1;"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or path
    /// * `content` - File content
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline starts a final, empty line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed) without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use cmmc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("main.cmm", "cout << 1;");
    /// assert_eq!(file.extract_range(5, 7).unwrap(), "<<");
    /// assert!(file.extract_range(5, 70).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceResult<&str> {
        if start > end {
            return Err(SourceError::InvalidSpan { start, end });
        }
        self.content
            .get(start..end)
            .ok_or(SourceError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("lines", &self.line_count())
            .finish()
    }
}
