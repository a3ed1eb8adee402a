//! Token definitions for the C-- lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with the [`Span`] it was scanned from.
//! Payloads live inside the kind: identifiers carry their name, integer
//! literals their (possibly saturated) value and string literals their raw
//! text including the surrounding quotes.

use std::fmt;

use cmmc_util::Span;

/// The closed set of token kinds produced by the scanner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // ==================== KEYWORDS ====================
    /// `bool`
    Bool,
    /// `int`
    Int,
    /// `void`
    Void,
    /// `true`
    True,
    /// `false`
    False,
    /// `struct`
    Struct,
    /// `cin`
    Cin,
    /// `cout`
    Cout,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `return`
    Return,

    // ==================== LITERALS ====================
    /// Identifier name
    Ident(String),
    /// Integer literal, saturated to `i32::MAX`
    IntLiteral(i32),
    /// String literal, raw text including both quotes
    StringLiteral(String),

    // ==================== PUNCTUATION ====================
    /// `{`
    LCurly,
    /// `}`
    RCurly,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,

    // ==================== OPERATORS ====================
    /// `<<`
    Write,
    /// `>>`
    Read,
    /// `++`
    PlusPlus,
    /// `--`
    MinusMinus,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,
    /// `!`
    Not,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `==`
    Equals,
    /// `!=`
    NotEquals,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEq,
    /// `>=`
    GreaterEq,
    /// `=`
    Assign,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns the symbolic name of the kind, e.g. `ID` or `PLUSPLUS`.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Write.name(), "WRITE");
    /// assert_eq!(TokenKind::IntLiteral(3).name(), "INTLITERAL");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Bool => "BOOL",
            TokenKind::Int => "INT",
            TokenKind::Void => "VOID",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Struct => "STRUCT",
            TokenKind::Cin => "CIN",
            TokenKind::Cout => "COUT",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Return => "RETURN",
            TokenKind::Ident(_) => "ID",
            TokenKind::IntLiteral(_) => "INTLITERAL",
            TokenKind::StringLiteral(_) => "STRINGLITERAL",
            TokenKind::LCurly => "LCURLY",
            TokenKind::RCurly => "RCURLY",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Write => "WRITE",
            TokenKind::Read => "READ",
            TokenKind::PlusPlus => "PLUSPLUS",
            TokenKind::MinusMinus => "MINUSMINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Not => "NOT",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Equals => "EQUALS",
            TokenKind::NotEquals => "NOTEQUALS",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::LessEq => "LESSEQ",
            TokenKind::GreaterEq => "GREATEREQ",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Eof => "EOF",
        }
    }

    /// Returns the fixed spelling of keywords, operators and punctuation.
    ///
    /// Kinds with a payload, and `Eof`, have no fixed spelling.
    pub fn as_str(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Bool => "bool",
            TokenKind::Int => "int",
            TokenKind::Void => "void",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Struct => "struct",
            TokenKind::Cin => "cin",
            TokenKind::Cout => "cout",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Return => "return",
            TokenKind::LCurly => "{",
            TokenKind::RCurly => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Write => "<<",
            TokenKind::Read => ">>",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Divide => "/",
            TokenKind::Not => "!",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEq => "<=",
            TokenKind::GreaterEq => ">=",
            TokenKind::Assign => "=",
            TokenKind::Ident(_)
            | TokenKind::IntLiteral(_)
            | TokenKind::StringLiteral(_)
            | TokenKind::Eof => return None,
        };
        Some(text)
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Bool
                | TokenKind::Int
                | TokenKind::Void
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Struct
                | TokenKind::Cin
                | TokenKind::Cout
                | TokenKind::If
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Return
        )
    }

    /// Returns true for identifiers and literals, the kinds with a payload.
    pub fn has_payload(&self) -> bool {
        matches!(
            self,
            TokenKind::Ident(_) | TokenKind::IntLiteral(_) | TokenKind::StringLiteral(_)
        )
    }
}

impl fmt::Display for TokenKind {
    /// Writes the token the way it appeared in the source: keywords and
    /// operators by spelling, identifiers by name, integers by value and
    /// strings by raw text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Ident(name) => f.write_str(name),
            TokenKind::IntLiteral(value) => write!(f, "{}", value),
            TokenKind::StringLiteral(raw) => f.write_str(raw),
            TokenKind::Eof => f.write_str("EOF"),
            other => f.write_str(other.as_str().unwrap_or_default()),
        }
    }
}

/// Looks up a reserved word. Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use cmmc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("cout"), Some(TokenKind::Cout));
/// assert_eq!(keyword_from_ident("Cout"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    let kind = match ident {
        "bool" => TokenKind::Bool,
        "int" => TokenKind::Int,
        "void" => TokenKind::Void,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "struct" => TokenKind::Struct,
        "cin" => TokenKind::Cin,
        "cout" => TokenKind::Cout,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "while" => TokenKind::While,
        "return" => TokenKind::Return,
        _ => return None,
    };
    Some(kind)
}

/// A scanned token and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// What was scanned, with its payload
    pub kind: TokenKind,
    /// Byte range plus the line and column of the first character
    pub span: Span,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Line of the token's first character (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the token's first character (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true for the end-of-input marker.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORDS: [&str; 12] = [
        "bool", "int", "void", "true", "false", "struct", "cin", "cout", "if", "else", "while",
        "return",
    ];

    #[test]
    fn test_every_keyword_round_trips_its_spelling() {
        for word in KEYWORDS {
            let kind = keyword_from_ident(word).unwrap();
            assert!(kind.is_keyword());
            assert_eq!(kind.as_str(), Some(word));
            assert_eq!(kind.name(), word.to_uppercase());
        }
    }

    #[test]
    fn test_keyword_lookup_is_case_sensitive() {
        assert_eq!(keyword_from_ident("INT"), None);
        assert_eq!(keyword_from_ident("While"), None);
        assert_eq!(keyword_from_ident("int_"), None);
    }

    #[test]
    fn test_display_uses_source_text() {
        assert_eq!(TokenKind::Ident("count".into()).to_string(), "count");
        assert_eq!(TokenKind::IntLiteral(2147483647).to_string(), "2147483647");
        assert_eq!(
            TokenKind::StringLiteral("\"hi\\n\"".into()).to_string(),
            "\"hi\\n\""
        );
        assert_eq!(TokenKind::Write.to_string(), "<<");
        assert_eq!(TokenKind::GreaterEq.to_string(), ">=");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_payload_kinds_have_no_spelling() {
        assert_eq!(TokenKind::Ident("x".into()).as_str(), None);
        assert_eq!(TokenKind::Eof.as_str(), None);
        assert!(TokenKind::StringLiteral(String::new()).has_payload());
        assert!(!TokenKind::Plus.has_payload());
        assert!(!TokenKind::Ident("if".into()).is_keyword());
    }

    #[test]
    fn test_token_position() {
        let token = Token::new(TokenKind::Semicolon, Span::new(9, 10, 3, 4));
        assert_eq!(token.line(), 3);
        assert_eq!(token.column(), 4);
        assert!(!token.is_eof());
        assert_eq!(token.to_string(), ";");
    }
}
