//! The `tokens` command: dump every token of a file.

use std::io::Write;
use std::path::PathBuf;

use cmmc_lex::{LexerConfig, Token, TokenKind};
use serde::Serialize;
use tracing::{debug, info};

use super::common::{scan_file, ScanOutcome};
use crate::config::OutputFormat;
use crate::error::{CmmtError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// File to scan
    pub file: PathBuf,
    /// Write tokens here instead of stdout
    pub output: Option<PathBuf>,
    /// Prefix each token with `line:column`
    pub positions: bool,
    /// Output format
    pub format: OutputFormat,
    /// Colored diagnostics
    pub color: bool,
    /// Whether verbose output is enabled
    pub verbose: bool,
}

/// One token in the JSON dump.
#[derive(Debug, Serialize, PartialEq)]
struct TokenRecord<'a> {
    kind: &'static str,
    line: u32,
    column: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<TokenValue<'a>>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
enum TokenValue<'a> {
    Int(i32),
    Text(&'a str),
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let value = match &token.kind {
            TokenKind::Ident(name) => Some(TokenValue::Text(name)),
            TokenKind::StringLiteral(raw) => Some(TokenValue::Text(raw)),
            TokenKind::IntLiteral(n) => Some(TokenValue::Int(*n)),
            _ => None,
        };
        Self {
            kind: token.kind.name(),
            line: token.line(),
            column: token.column(),
            value,
        }
    }
}

/// Run the tokens command.
///
/// Tokens are written even when the file has lexical errors; the errors only
/// decide the exit status.
pub fn run_tokens(args: TokensArgs, lexer_config: LexerConfig) -> Result<()> {
    let outcome = scan_file(&args.file, lexer_config)?;

    if !outcome.diagnostics.is_empty() {
        eprint!("{}", outcome.render_diagnostics(args.color));
    }

    let rendered = render_tokens(&outcome, args.format, args.positions)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            if args.verbose {
                info!("Wrote tokens to {}", path.display());
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    let errors = outcome.error_count();
    debug!(errors, warnings = outcome.warning_count(), "tokens done");
    if errors > 0 {
        return Err(CmmtError::Lexical {
            file: outcome.file.name().to_string(),
            errors,
        });
    }
    Ok(())
}

fn render_tokens(outcome: &ScanOutcome, format: OutputFormat, positions: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(outcome
            .content_tokens()
            .map(|token| {
                if positions {
                    format!("{}:{} {}\n", token.line(), token.column(), token)
                } else {
                    format!("{}\n", token)
                }
            })
            .collect()),
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> =
                outcome.content_tokens().map(TokenRecord::from).collect();
            let mut json = serde_json::to_string_pretty(&records)?;
            json.push('\n');
            Ok(json)
        }
    }
}
