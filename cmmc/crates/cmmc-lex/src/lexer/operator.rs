//! Operator and punctuation lexing.
//!
//! Two-character operators are matched greedily but only when contiguous:
//! `! =` is `!` followed by `=`.

use cmmc_util::DiagnosticCode;

use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or punctuation token.
    ///
    /// Any character that starts no token (including a lone `&` or `|`) is
    /// reported, consumed on its own, and `None` is returned.
    pub(crate) fn lex_operator(&mut self) -> Option<TokenKind> {
        let c = self.cursor.current_char();
        self.cursor.advance();

        let kind = match c {
            '{' => TokenKind::LCurly,
            '}' => TokenKind::RCurly,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '*' => TokenKind::Times,
            '/' => TokenKind::Divide,
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '+' => self.pick('+', TokenKind::PlusPlus, TokenKind::Plus),
            '-' => self.pick('-', TokenKind::MinusMinus, TokenKind::Minus),
            '=' => self.pick('=', TokenKind::Equals, TokenKind::Assign),
            '!' => self.pick('=', TokenKind::NotEquals, TokenKind::Not),
            '&' if self.cursor.match_char('&') => TokenKind::And,
            '|' if self.cursor.match_char('|') => TokenKind::Or,
            other => {
                self.report_error(
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                    format!("illegal character ignored: {}", other),
                );
                return None;
            },
        };

        Some(kind)
    }

    /// Handles: `<`, `<=`, `<<`
    fn lex_less(&mut self) -> TokenKind {
        if self.cursor.match_char('<') {
            TokenKind::Write
        } else if self.cursor.match_char('=') {
            TokenKind::LessEq
        } else {
            TokenKind::Less
        }
    }

    /// Handles: `>`, `>=`, `>>`
    fn lex_greater(&mut self) -> TokenKind {
        if self.cursor.match_char('>') {
            TokenKind::Read
        } else if self.cursor.match_char('=') {
            TokenKind::GreaterEq
        } else {
            TokenKind::Greater
        }
    }

    /// Returns `double` if `next` follows immediately (consuming it), else `single`.
    fn pick(&mut self, next: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.cursor.match_char(next) {
            double
        } else {
            single
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use cmmc_util::{DiagnosticCode, Handler};

    fn lex_ops(source: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        crate::Lexer::new(source, &mut handler)
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            lex_ops("{}();,."),
            vec![
                TokenKind::LCurly,
                TokenKind::RCurly,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::Dot,
            ]
        );
    }

    #[test]
    fn test_two_char_operators() {
        assert_eq!(
            lex_ops("<< >> ++ -- == != <= >= && ||"),
            vec![
                TokenKind::Write,
                TokenKind::Read,
                TokenKind::PlusPlus,
                TokenKind::MinusMinus,
                TokenKind::Equals,
                TokenKind::NotEquals,
                TokenKind::LessEq,
                TokenKind::GreaterEq,
                TokenKind::And,
                TokenKind::Or,
            ]
        );
    }

    #[test]
    fn test_single_char_fallbacks() {
        assert_eq!(
            lex_ops("< > + - ! = * /"),
            vec![
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Not,
                TokenKind::Assign,
                TokenKind::Times,
                TokenKind::Divide,
            ]
        );
    }

    #[test]
    fn test_not_space_equals_is_two_tokens() {
        assert_eq!(lex_ops("! ="), vec![TokenKind::Not, TokenKind::Assign]);
    }

    #[test]
    fn test_maximal_munch_is_greedy() {
        assert_eq!(
            lex_ops("+++"),
            vec![TokenKind::PlusPlus, TokenKind::Plus]
        );
        assert_eq!(
            lex_ops("<<="),
            vec![TokenKind::Write, TokenKind::Assign]
        );
        assert_eq!(
            lex_ops("==="),
            vec![TokenKind::Equals, TokenKind::Assign]
        );
        assert_eq!(
            lex_ops("<>"),
            vec![TokenKind::Less, TokenKind::Greater]
        );
    }

    #[test]
    fn test_lone_ampersand_and_pipe_are_illegal() {
        let mut handler = Handler::new();
        let kinds: Vec<_> = crate::Lexer::new("a & b | c &&", &mut handler)
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Ident("b".into()),
                TokenKind::Ident("c".into()),
                TokenKind::And,
            ]
        );
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].message, "illegal character ignored: &");
        assert_eq!(diags[1].message, "illegal character ignored: |");
        assert_eq!(diags[1].span.column, 7);
    }

    #[test]
    fn test_illegal_character_consumes_one_char() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("$$x", &mut handler);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Ident("x".into()));
        assert_eq!(token.column(), 3);
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 2);
        assert!(diags
            .iter()
            .all(|d| d.code == Some(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)));
        assert_eq!(diags[1].span.column, 2);
        assert_eq!(diags[1].span.len(), 1);
    }

    #[test]
    fn test_non_ascii_is_illegal() {
        let mut handler = Handler::new();
        let mut lexer = crate::Lexer::new("λ", &mut handler);
        assert!(lexer.next_token().is_eof());
        assert_eq!(lexer.column(), 2);
        assert_eq!(handler.diagnostics()[0].message, "illegal character ignored: λ");
    }
}
