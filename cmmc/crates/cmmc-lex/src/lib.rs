//! cmmc-lex - Lexical Analyzer for the C-- language
//!
//! This crate turns C-- source text into a stream of tokens. The scanner is a
//! pull iterator: each call to [`Lexer::next_token`] returns exactly one
//! token, ending with [`TokenKind::Eof`]. Lexical problems are reported to a
//! [`cmmc_util::Handler`] and skipped; they never stop the scan.
//!
//! # Example Usage
//!
//! ```
//! use cmmc_lex::{Lexer, TokenKind};
//! use cmmc_util::Handler;
//!
//! let source = "int x;\nx = 2147483648;";
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new(source, &mut handler);
//!
//! assert_eq!(lexer.next_token().kind, TokenKind::Int);
//!
//! let tokens: Vec<_> = lexer.collect();
//! let value = &tokens[4];
//! assert_eq!(value.kind, TokenKind::IntLiteral(i32::MAX));
//! assert_eq!((value.line(), value.column()), (2, 5));
//!
//! assert_eq!(handler.warning_count(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor with line/column tracking
//! - [`chars`] - Character classes, escape sets and lexer configuration
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `bool`, `int`, `void`, `true`, `false`, `struct`, `cin`, `cout`, `if`,
//! `else`, `while`, `return`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **Integer**: unsigned decimal, saturating at `2147483647`
//! - **String**: `"..."` on a single line, escapes `\n \t \\ \" \? \a` by default
//!
//! ## Operators and Punctuation
//!
//! `{ } ( ) ; , . << >> ++ -- + - * / ! && || == != < > <= >= =`
//!
//! ## Comments
//!
//! `//` and `#` start a comment that runs to the end of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use chars::{EscapeSet, EscapeSetError, LexerConfig};
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
