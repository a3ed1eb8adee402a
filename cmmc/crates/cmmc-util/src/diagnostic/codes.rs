//! Diagnostic codes for categorizing lexical errors and warnings.
//!
//! # Examples
//!
//! ```
//! use cmmc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where the prefix is
/// "E" for errors or "W" for warnings and the number is zero-padded to four
/// digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001", "W1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Lexer - Character that starts no token
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - String literal not closed on its line
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - String literal with an escape outside the accepted set
    pub const E_LEXER_INVALID_ESCAPE: Self = Self::new("E", 1003);
    /// E1004: Lexer - Unterminated string literal that also has a bad escape
    pub const E_LEXER_UNTERMINATED_INVALID_ESCAPE: Self = Self::new("E", 1004);

    // =========================================================================
    // LEXER WARNING CODES (W1001-W1999)
    // =========================================================================

    /// W1001: Lexer - Integer literal saturated to the 32-bit maximum
    pub const W_LEXER_INTEGER_OVERFLOW: Self = Self::new("W", 1001);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
