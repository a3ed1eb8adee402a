//! cmmc-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the C-- compiler crates:
//!
//! - [`span`] - Source locations ([`Span`]) and loaded source text ([`SourceFile`])
//! - [`diagnostic`] - Diagnostics, severity levels, codes and the collecting [`Handler`]
//! - [`error`] - Error types for operations that can fail outside of lexing
//!
//! # Example
//!
//! ```
//! use cmmc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("illegal character ignored: $")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceError, SourceResult};
pub use span::{SourceFile, Span};
