//! Command modules for the cmmt CLI.
//!
//! Each subcommand lives in its own file; shared scanning and reporting
//! helpers are in [`common`].

pub mod common;

pub mod check;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use tokens::{run_tokens, TokensArgs};
