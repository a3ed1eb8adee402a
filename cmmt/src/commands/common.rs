//! Shared helpers for cmmt commands.
//!
//! Both commands read a file, scan it with a fresh [`Handler`] and print the
//! collected diagnostics; the pieces for that live here.

use std::io::IsTerminal;
use std::path::Path;

use cmmc_lex::{Lexer, LexerConfig, Token};
use cmmc_util::{Diagnostic, Level, SourceFile};
use tracing::debug;

use crate::error::{CmmtError, Result};

/// Tokens and diagnostics produced by scanning one file.
#[derive(Debug)]
pub struct ScanOutcome {
    /// The scanned file
    pub file: SourceFile,
    /// Every token, ending with `Eof`
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were reported
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanOutcome {
    /// Number of error-level diagnostics.
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Number of warnings.
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics.iter().filter(|d| d.level == level).count()
    }

    /// Tokens without the trailing `Eof`.
    pub fn content_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|token| !token.is_eof())
    }

    /// Every diagnostic rendered with its source snippet, one block per line group.
    pub fn render_diagnostics(&self, color: bool) -> String {
        self.diagnostics
            .iter()
            .map(|diag| diag.render(&self.file, color) + "\n")
            .collect()
    }
}

/// Read a source file from disk.
pub fn read_source(path: &Path) -> Result<SourceFile> {
    let content = std::fs::read_to_string(path).map_err(|source| CmmtError::ReadSource {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SourceFile::new(path.display().to_string(), content))
}

/// Scan an already loaded file to completion.
pub fn scan_source(file: SourceFile, config: LexerConfig) -> ScanOutcome {
    let mut handler = cmmc_util::Handler::new();
    let tokens = Lexer::with_config(file.content(), &mut handler, config).tokenize();
    let diagnostics = handler.diagnostics();

    debug!(
        file = file.name(),
        tokens = tokens.len(),
        diagnostics = diagnostics.len(),
        "scanned"
    );

    ScanOutcome {
        file,
        tokens,
        diagnostics,
    }
}

/// Read and scan a file.
pub fn scan_file(path: &Path, config: LexerConfig) -> Result<ScanOutcome> {
    Ok(scan_source(read_source(path)?, config))
}

/// Whether diagnostics on stderr should carry ANSI colors.
pub fn stderr_color(no_color: bool) -> bool {
    !no_color && std::io::stderr().is_terminal()
}
