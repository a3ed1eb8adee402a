//! Diagnostic severity levels.

use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use cmmc_util::diagnostic::Level;
///
/// assert!(Level::Error.is_error());
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// A problem that makes the input invalid.
    ///
    /// The offending text produced no token.
    Error,
    /// A suspicious construct that still produced a token
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl Level {
    /// Returns true if this level represents an error
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }

    /// Returns true if this level represents a warning
    #[inline]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Level::Warning)
    }

    /// Returns the canonical name for this level
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        }
    }

    /// Returns the ANSI color code for this level
    #[inline]
    pub const fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "31",   // Red
            Level::Warning => "33", // Yellow
            Level::Note => "36",    // Cyan
            Level::Help => "32",    // Green
        }
    }

    /// Returns the intensity modifier for terminal output
    #[inline]
    pub const fn intensity(&self) -> &'static str {
        match self {
            Level::Error => "1",
            _ => "0",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
