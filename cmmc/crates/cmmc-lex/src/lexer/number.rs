//! Integer literal lexing.
//!
//! Literals are unsigned decimal digit runs; a leading `-` is always a
//! separate operator token. Values above `i32::MAX` saturate.

use cmmc_util::DiagnosticBuilder;
use cmmc_util::DiagnosticCode;

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer literal.
    ///
    /// An out-of-range literal still produces a token, carrying `i32::MAX`,
    /// and a warning is reported.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        self.cursor.eat_while(|c| c.is_ascii_digit());

        let text = self.cursor.slice_from(self.token_start);

        // `next_token` starts the token at the first digit, so the text is a
        // non-empty digit run and can only fail to parse by overflowing.
        let value = match text.parse::<i32>() {
            Ok(value) => value,
            Err(_) => {
                self.report(
                    DiagnosticBuilder::warning("integer literal too large; using max value")
                        .code(DiagnosticCode::W_LEXER_INTEGER_OVERFLOW)
                        .help(format!("the largest integer literal is {}", i32::MAX)),
                );
                i32::MAX
            },
        };

        TokenKind::IntLiteral(value)
    }
}
