//! Edge case tests for cmmc-lex

#[cfg(test)]
mod tests {
    use crate::{Lexer, Token, TokenKind};
    use cmmc_util::{Diagnostic, Handler};

    fn lex_all(source: &str) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut handler = Handler::new();
        let tokens = Lexer::new(source, &mut handler).tokenize();
        (tokens, handler.diagnostics())
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).0.into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_only_newlines() {
        let (tokens, diags) = lex_all("\n\n\n");
        assert_eq!(tokens.len(), 1);
        assert_eq!((tokens[0].line(), tokens[0].column()), (4, 1));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let (tokens, diags) = lex_all("int\r\nx");
        assert_eq!(tokens[1].kind, TokenKind::Ident("x".into()));
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 1));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let (tokens, _) = lex_all(&format!("int {};", name));
        assert_eq!(tokens[1].kind, TokenKind::Ident(name));
        assert_eq!(tokens[2].column(), 10005);
    }

    #[test]
    fn test_edge_underscore_identifiers() {
        assert_eq!(
            kinds("_ __ _1"),
            vec![
                TokenKind::Ident("_".into()),
                TokenKind::Ident("__".into()),
                TokenKind::Ident("_1".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_keyword_glued_to_punctuation() {
        assert_eq!(
            kinds("return(x);"),
            vec![
                TokenKind::Return,
                TokenKind::LParen,
                TokenKind::Ident("x".into()),
                TokenKind::RParen,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        let (tokens, diags) = lex_all("\"# not // a comment\"");
        assert_eq!(
            tokens[0].kind,
            TokenKind::StringLiteral("\"# not // a comment\"".into())
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn test_edge_comment_directly_after_token() {
        assert_eq!(
            kinds("x// c\ny#c"),
            vec![
                TokenKind::Ident("x".into()),
                TokenKind::Ident("y".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_string_then_code_on_next_line() {
        let (tokens, diags) = lex_all("\"unterminated\nint");
        assert_eq!(tokens[0].kind, TokenKind::Int);
        assert_eq!((tokens[0].line(), tokens[0].column()), (2, 1));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].span.line, 1);
    }

    #[test]
    fn test_edge_two_strings_on_a_line() {
        assert_eq!(
            kinds("\"a\"\"b\""),
            vec![
                TokenKind::StringLiteral("\"a\"".into()),
                TokenKind::StringLiteral("\"b\"".into()),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_edge_overflow_then_more_tokens() {
        let (tokens, diags) = lex_all("99999999999 + 1");
        assert_eq!(tokens[0].kind, TokenKind::IntLiteral(i32::MAX));
        assert_eq!(tokens[1].kind, TokenKind::Plus);
        assert_eq!(tokens[1].column(), 13);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_edge_nul_byte_is_illegal() {
        let (tokens, diags) = lex_all("a\0b");
        assert_eq!(tokens.len(), 3);
        assert_eq!(diags.len(), 1);
        assert_eq!(tokens[1].column(), 3);
    }

    #[test]
    fn test_edge_form_feed_and_vertical_tab_are_illegal() {
        let (_, diags) = lex_all("\u{0C}\u{0B}");
        assert_eq!(diags.len(), 2);
    }

    #[test]
    fn test_edge_errors_keep_line_tracking() {
        let (tokens, diags) = lex_all("$\n\"x\\q\"\n@\nif");
        assert_eq!(tokens[0].kind, TokenKind::If);
        assert_eq!(tokens[0].line(), 4);
        let lines: Vec<u32> = diags.iter().map(|d| d.span.line).collect();
        assert_eq!(lines, vec![1, 2, 3]);
    }

    #[test]
    fn test_edge_iterator_matches_tokenize() {
        let source = "while (i < 10) { i++; }";
        let mut handler = Handler::new();
        let iterated: Vec<Token> = Lexer::new(source, &mut handler).collect();
        let (mut tokenized, _) = lex_all(source);
        assert!(tokenized.pop().is_some_and(|t| t.is_eof()));
        assert_eq!(iterated, tokenized);
    }
}
