//! Core error types for cmmc-util crate
//!
//! Lexical problems are never errors in this sense; they are reported as
//! [`Diagnostic`](crate::Diagnostic)s. These types cover lookups into loaded
//! source text that can legitimately fail.

use thiserror::Error;

/// Error type for source file operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan { start: usize, end: usize },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        file_len: usize,
        span_start: usize,
        span_end: usize,
    },
}

/// Result type alias for source file operations
pub type SourceResult<T> = std::result::Result<T, SourceError>;
