//! Tokens of the CWF message DSL.

use std::fmt;

/// Every token class the lexer can produce. Keywords get their own variant so
/// the parser can match on them without re-inspecting lexeme text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Ident,
    Int,
    LBrace,
    RBrace,
    LParen,
    RParen,
    Colon,
    Semi,
    Comma,
    KwOperation,
    KwMessage,
    KwIn,
    KwOut,
    KwInt,
    KwDecimal,
    KwString,
    Eof,
}

impl TokenKind {
    /// Reclassify an identifier lexeme into its keyword kind, if it is one.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "operation" => Some(TokenKind::KwOperation),
            "message" => Some(TokenKind::KwMessage),
            "in" => Some(TokenKind::KwIn),
            "out" => Some(TokenKind::KwOut),
            "int" => Some(TokenKind::KwInt),
            "decimal" => Some(TokenKind::KwDecimal),
            "string" => Some(TokenKind::KwString),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Colon => "':'",
            TokenKind::Semi => "';'",
            TokenKind::Comma => "','",
            TokenKind::KwOperation => "'operation'",
            TokenKind::KwMessage => "'message'",
            TokenKind::KwIn => "'in'",
            TokenKind::KwOut => "'out'",
            TokenKind::KwInt => "'int'",
            TokenKind::KwDecimal => "'decimal'",
            TokenKind::KwString => "'string'",
            TokenKind::Eof => "end of input",
        };
        f.write_str(s)
    }
}

/// A lexed token: kind, lexeme text, and the 1-based source position where it
/// starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub col: u32,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Int => write!(f, "'{}'", self.text),
            kind => write!(f, "{}", kind),
        }
    }
}
