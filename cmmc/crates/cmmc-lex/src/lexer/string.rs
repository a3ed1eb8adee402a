//! String literal lexing.
//!
//! A literal must close on the line it opens on. Escapes are validated
//! against the configured [`EscapeSet`](crate::chars::EscapeSet) but not
//! decoded: the token keeps the raw text, quotes included.

use cmmc_util::DiagnosticCode;

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal starting at the opening quote.
    ///
    /// Returns `None` when the literal is invalid. In that case the rest of
    /// the line has been discarded (the newline is kept) and exactly one
    /// error has been reported.
    pub(crate) fn lex_string(&mut self) -> Option<TokenKind> {
        self.cursor.advance();

        let mut bad_escape = false;

        loop {
            if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                if bad_escape {
                    self.report_error(
                        DiagnosticCode::E_LEXER_UNTERMINATED_INVALID_ESCAPE,
                        "unterminated string literal with bad escaped character ignored",
                    );
                } else {
                    self.report_error(
                        DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
                        "unterminated string literal ignored",
                    );
                }
                return None;
            }

            match self.cursor.current_char() {
                '"' => {
                    self.cursor.advance();
                    break;
                },
                '\\' => {
                    self.cursor.advance();
                    // A backslash at the end of the line escapes nothing.
                    if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                        bad_escape = true;
                        continue;
                    }
                    if !self.config.escapes.contains(self.cursor.current_char()) {
                        bad_escape = true;
                    }
                    self.cursor.advance();
                },
                _ => self.cursor.advance(),
            }
        }

        if bad_escape {
            self.cursor.skip_to_line_end();
            self.report_error(
                DiagnosticCode::E_LEXER_INVALID_ESCAPE,
                "string literal with bad escaped character ignored",
            );
            return None;
        }

        let raw = self.cursor.slice_from(self.token_start);
        Some(TokenKind::StringLiteral(raw.to_string()))
    }
}
