//! Identifier and keyword lexing.

use crate::chars::is_ident_continue;
use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes the longest run of letters, digits and underscores, then
    /// checks it against the reserved words.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);

        keyword_from_ident(text).unwrap_or_else(|| TokenKind::Ident(text.to_string()))
    }
}
