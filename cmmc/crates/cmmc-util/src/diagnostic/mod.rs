//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The lexer never fails: whenever it skips over bad input it records a
//! [`Diagnostic`] in a [`Handler`] and carries on. Drivers inspect the
//! handler afterwards and decide what to print and how to exit.
//!
//! # Examples
//!
//! ```
//! use cmmc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("illegal character ignored: $")
//!     .span(Span::new(3, 4, 1, 4))
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use level::Level;

pub use crate::span::{SourceFile, Span};

use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
///
/// # Examples
///
/// ```
/// use cmmc_util::diagnostic::{Diagnostic, Level, Span};
///
/// let diag = Diagnostic::error("unterminated string literal ignored", Span::DUMMY);
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Render the diagnostic against the file it was reported in.
    ///
    /// The header has the form `name:line:column: level[CODE]: message`.
    /// The offending source line is quoted underneath with carets under the
    /// span, clamped to the end of that line. With `color` set the
    /// level is wrapped in ANSI escapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmmc_util::diagnostic::{Diagnostic, DiagnosticCode, SourceFile, Span};
    ///
    /// let file = SourceFile::new("a.cmm", "x = $;");
    /// let diag = Diagnostic::error("illegal character ignored: $", Span::new(4, 5, 1, 5))
    ///     .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR);
    /// let text = diag.render(&file, false);
    /// assert!(text.starts_with("a.cmm:1:5: error[E1001]: illegal character ignored: $"));
    /// assert!(text.ends_with("    |     ^"));
    /// ```
    pub fn render(&self, file: &SourceFile, color: bool) -> String {
        let level = if color {
            format!(
                "\x1b[{};{}m{}\x1b[0m",
                self.level.intensity(),
                self.level.color_code(),
                self.level
            )
        } else {
            self.level.to_string()
        };

        let mut out = format!("{}:{}: {}", file.name(), self.span, level);
        if let Some(code) = self.code {
            out.push_str(&format!("[{}]", code));
        }
        out.push_str(": ");
        out.push_str(&self.message);

        if let Some(line) = file.line_at(self.span.line as usize) {
            let column = self.span.column as usize;
            let line_len = line.chars().count();
            // Columns count characters; the span is a byte range.
            let span_end = self.span.end.min(file.content().len());
            let width = file
                .extract_range(self.span.start, span_end)
                .map_or(0, |text| text.chars().count());
            let end = (column + width).min(line_len + 1);
            let snippet = SourceSnippet::new(line, self.span.line as usize, column, end);
            out.push('\n');
            out.push_str(&snippet.format());
        }

        for help in &self.helps {
            out.push_str(&format!("\n    = help: {}", help));
        }

        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.span, self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics in emission order and provides methods
/// for querying their counts.
///
/// # Examples
///
/// ```
/// use cmmc_util::diagnostic::{Diagnostic, Handler, Span};
///
/// let handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::warning("integer literal too large; using max value", Span::DUMMY));
///
/// assert!(!handler.has_errors());
/// assert_eq!(handler.warning_count(), 1);
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count_level(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count_level(Level::Warning)
    }

    fn count_level(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get all diagnostics, in the order they were emitted
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Number of collected diagnostics of any level
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("errors", &self.error_count())
            .field("warnings", &self.warning_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_new() {
        let diag = Diagnostic::new(Level::Error, "test", Span::DUMMY);
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "test");
        assert!(diag.code.is_none());
    }

    #[test]
    fn test_diagnostic_with_code() {
        let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
        let diag = Diagnostic::error("test", Span::DUMMY).with_code(code);
        assert_eq!(diag.code, Some(code));
    }

    #[test]
    fn test_diagnostic_with_help() {
        let diag = Diagnostic::error("test", Span::DUMMY)
            .with_help("help 1")
            .with_help("help 2");
        assert_eq!(diag.helps, vec!["help 1", "help 2"]);
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::warning("integer literal too large; using max value", Span::new(0, 10, 2, 3))
            .with_code(DiagnosticCode::W_LEXER_INTEGER_OVERFLOW);
        assert_eq!(
            diag.to_string(),
            "2:3: warning[W1001]: integer literal too large; using max value"
        );
    }

    #[test]
    fn test_render_underlines_span() {
        let file = SourceFile::new("s.cmm", "int x;\ncout << \"abc\\q\";\n");
        let diag = Diagnostic::error("string literal with bad escaped character ignored", Span::new(15, 22, 2, 9))
            .with_code(DiagnosticCode::E_LEXER_INVALID_ESCAPE);
        let rendered = diag.render(&file, false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines[0],
            "s.cmm:2:9: error[E1003]: string literal with bad escaped character ignored"
        );
        assert_eq!(lines[1], "  2 | cout << \"abc\\q\";");
        assert_eq!(lines[2], "    |         ^^^^^^^");
    }

    #[test]
    fn test_render_clamps_underline_to_line() {
        let file = SourceFile::new("s.cmm", "\"abc");
        let diag = Diagnostic::error("unterminated string literal ignored", Span::new(0, 40, 1, 1));
        let rendered = diag.render(&file, false);
        assert!(rendered.ends_with("    | ^^^^"));
    }

    #[test]
    fn test_render_counts_characters_not_bytes() {
        let file = SourceFile::new("u.cmm", "é x");
        let diag = Diagnostic::error("illegal character ignored: é", Span::new(0, 2, 1, 1));
        let rendered = diag.render(&file, false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[1], "  1 | é x");
        assert_eq!(lines[2], "    | ^");
    }

    #[test]
    fn test_render_span_past_end_of_file() {
        let file = SourceFile::new("s.cmm", "ab");
        let diag = Diagnostic::error("unterminated string literal ignored", Span::new(5, 9, 1, 2));
        let rendered = diag.render(&file, false);
        assert!(rendered.ends_with("  1 | ab\n    |  ^"));
    }

    #[test]
    fn test_render_with_color() {
        let file = SourceFile::new("s.cmm", "&");
        let diag = Diagnostic::error("illegal character ignored: &", Span::new(0, 1, 1, 1));
        let rendered = diag.render(&file, true);
        assert!(rendered.contains("\x1b[1;31merror\x1b[0m"));
    }

    #[test]
    fn test_render_helps() {
        let file = SourceFile::new("s.cmm", "9999999999");
        let diag = Diagnostic::warning("integer literal too large; using max value", Span::new(0, 10, 1, 1))
            .with_help("the largest integer literal is 2147483647");
        let rendered = diag.render(&file, false);
        assert!(rendered.ends_with("    = help: the largest integer literal is 2147483647"));
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        assert!(handler.is_empty());
        handler.emit_diagnostic(Diagnostic::error("e1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("e2", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.warning_count(), 1);
        assert_eq!(handler.len(), 3);
    }

    #[test]
    fn test_handler_preserves_order() {
        let handler = Handler::new();
        DiagnosticBuilder::error("first").span(Span::new(0, 1, 1, 1)).emit(&handler);
        DiagnosticBuilder::warning("second").span(Span::new(2, 3, 1, 3)).emit(&handler);
        let messages: Vec<String> = handler.diagnostics().into_iter().map(|d| d.message).collect();
        assert_eq!(messages, vec!["first", "second"]);
    }
}
