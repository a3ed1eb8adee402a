//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop and the
//! diagnostic helpers shared by the scanning routines.

use cmmc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::chars::{is_ident_start, LexerConfig};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Lexer for the C-- language.
///
/// The lexer turns source text into tokens on demand. Bad input never stops
/// it: each problem is reported to the [`Handler`] and the offending text is
/// skipped.
///
/// # Example
///
/// ```
/// use cmmc_lex::{Lexer, TokenKind};
/// use cmmc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("cout << x;", &mut handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Cout);
/// assert_eq!(lexer.next_token().kind, TokenKind::Write);
/// assert_eq!(lexer.column(), 8);
/// ```
///
/// The per-construct scanners need the token start that `next_token` records,
/// so they are not callable from outside the crate:
///
/// ```compile_fail
/// use cmmc_lex::Lexer;
/// use cmmc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("x 12", &mut handler);
/// lexer.next_token();
/// lexer.lex_number();
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for lexical diagnostics.
    handler: &'a mut Handler,

    /// Scanner settings.
    pub(crate) config: LexerConfig,

    /// Starting position of the current token (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer with the default configuration.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self::with_config(source, handler, LexerConfig::default())
    }

    /// Creates a lexer with an explicit configuration.
    pub fn with_config(source: &'a str, handler: &'a mut Handler, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            config,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace and comments, then dispatches on the first
    /// significant character. Invalid constructs are reported and skipped,
    /// so one call may consume several of them before it returns. Once the
    /// input is exhausted every call returns an `Eof` token.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();
            self.start_token();

            if self.cursor.is_at_end() {
                return self.finish_token(TokenKind::Eof);
            }

            let scanned = match self.cursor.current_char() {
                c if is_ident_start(c) => Some(self.lex_identifier()),
                c if c.is_ascii_digit() => Some(self.lex_number()),
                '"' => self.lex_string(),
                _ => self.lex_operator(),
            };

            if let Some(kind) = scanned {
                return self.finish_token(kind);
            }
        }
    }

    /// Scans the rest of the input, ending with the `Eof` token.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::{Lexer, TokenKind};
    /// use cmmc_util::Handler;
    ///
    /// let mut handler = Handler::new();
    /// let tokens = Lexer::new("x++", &mut handler).tokenize();
    /// let kinds: Vec<_> = tokens.into_iter().map(|t| t.kind).collect();
    /// assert_eq!(
    ///     kinds,
    ///     vec![TokenKind::Ident("x".into()), TokenKind::PlusPlus, TokenKind::Eof]
    /// );
    /// ```
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    fn start_token(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    fn finish_token(&self, kind: TokenKind) -> Token {
        let token = Token::new(kind, self.token_span());
        trace!(
            kind = token.kind.name(),
            line = token.line(),
            column = token.column(),
            "token"
        );
        token
    }

    /// Span from the start of the current token to the cursor.
    pub(crate) fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Reports a lexical error covering the current token.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: impl Into<String>) {
        self.report(DiagnosticBuilder::error(message).code(code));
    }

    pub(crate) fn report(&mut self, builder: DiagnosticBuilder) {
        let span = self.token_span();
        let diagnostic = builder.span(span).build();
        debug!(
            code = ?diagnostic.code,
            line = span.line,
            column = span.column,
            "{}",
            diagnostic.message
        );
        self.handler.emit_diagnostic(diagnostic);
    }

    /// Returns the current line number (1-based).
    ///
    /// After a call to [`next_token`](Self::next_token) this is the line
    /// just past the returned token.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    ///
    /// After a call to [`next_token`](Self::next_token) this is the column
    /// just past the returned token.
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the configuration in effect.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields tokens until the end of input; the `Eof` marker itself is not
    /// yielded.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
