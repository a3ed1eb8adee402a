//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Main Lexer struct, dispatch and diagnostics
//! - `comment` - Whitespace and comment skipping
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
