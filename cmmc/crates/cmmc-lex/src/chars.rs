//! Character classes and scanner configuration.
//!
//! The scanner works on a fixed ASCII alphabet: every non-ASCII character is
//! an illegal character, even inside identifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Checks if a character can start an identifier (`[A-Za-z_]`).
///
/// # Example
///
/// ```
/// use cmmc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('q'));
/// assert!(!is_ident_start('7'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier (`[A-Za-z0-9_]`).
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is skipped between tokens.
///
/// Space, tab and carriage return occupy one column each; a newline moves
/// to the next line.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Errors from building an [`EscapeSet`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeSetError {
    /// No escape characters were given
    #[error("escape set must not be empty")]
    Empty,

    /// A character that can never follow a backslash inside a literal
    #[error("'{0}' cannot be used as an escape character")]
    Unsupported(char),
}

/// The set of characters accepted after a backslash in a string literal.
///
/// Only printable ASCII characters can be members. The default set is
/// `n t \ " ? a`.
///
/// # Example
///
/// ```
/// use cmmc_lex::chars::EscapeSet;
///
/// let default = EscapeSet::default();
/// assert!(default.contains('?'));
/// assert!(!default.contains('r'));
///
/// let custom: EscapeSet = "nr\\\"".parse().unwrap();
/// assert!(custom.contains('r'));
/// assert!(!custom.contains('?'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeSet {
    /// One bit per ASCII code point.
    bits: u128,
}

impl EscapeSet {
    /// Characters accepted when nothing else is configured.
    pub const DEFAULT_CHARS: &'static str = "nt\\\"?a";

    /// Builds a set from the given characters.
    ///
    /// Duplicates are ignored.
    pub fn new(chars: &str) -> Result<Self, EscapeSetError> {
        let mut bits = 0u128;
        for c in chars.chars() {
            if !c.is_ascii_graphic() {
                return Err(EscapeSetError::Unsupported(c));
            }
            bits |= 1 << (c as u32);
        }
        if bits == 0 {
            return Err(EscapeSetError::Empty);
        }
        Ok(Self { bits })
    }

    /// Returns true if `c` may follow a backslash.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && self.bits & (1 << (c as u32)) != 0
    }

    /// Iterates over the members in ASCII order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .filter(move |&b| self.bits & (1 << b) != 0)
            .map(char::from)
    }

    /// Number of accepted escape characters.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Always false; an escape set holds at least one character.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

impl Default for EscapeSet {
    fn default() -> Self {
        let bits = Self::DEFAULT_CHARS
            .bytes()
            .fold(0u128, |bits, b| bits | (1 << b));
        Self { bits }
    }
}

impl FromStr for EscapeSet {
    type Err = EscapeSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for EscapeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.chars() {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl fmt::Debug for EscapeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EscapeSet({:?})", self.to_string())
    }
}

/// Tunable scanner behavior.
///
/// # Example
///
/// ```
/// use cmmc_lex::chars::{EscapeSet, LexerConfig};
///
/// let config = LexerConfig::default().with_escapes("ntr".parse::<EscapeSet>().unwrap());
/// assert!(config.escapes.contains('r'));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Characters accepted after a backslash in string literals.
    pub escapes: EscapeSet,
}

impl LexerConfig {
    /// Replaces the accepted escape characters.
    pub fn with_escapes(mut self, escapes: EscapeSet) -> Self {
        self.escapes = escapes;
        self
    }
}
