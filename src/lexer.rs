//! Hand-written lexer for the CWF message DSL.
//!
//! Scans source text byte by byte, producing one [`Token`] per call.
//! Recognizes identifiers (reclassified to keywords), unsigned integer
//! literals, the punctuation set `{ } ( ) : ; ,`, and skips whitespace plus
//! `//` line and `/* */` block comments. Every token is stamped with the
//! 1-based line/column where it starts.

use crate::token::{Token, TokenKind};

/// A diagnostic from the front end (lexing or parsing). Carries the source
/// position; the driver prepends the file name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    #[error("{line}:{col}: expected {expected}, found {found}")]
    Expected {
        line: u32,
        col: u32,
        expected: String,
        found: String,
    },
    #[error("{line}:{col}: stray character '{ch}'")]
    StrayChar { line: u32, col: u32, ch: char },
    #[error("{line}:{col}: unterminated block comment")]
    UnterminatedComment { line: u32, col: u32 },
    #[error("{line}:{col}: integer literal '{text}' out of range")]
    IntOutOfRange { line: u32, col: u32, text: String },
    #[error("{line}:{col}: decimal({width},{digits}): decimal digits must be fewer than the field width")]
    DecimalDigits {
        line: u32,
        col: u32,
        width: usize,
        digits: usize,
    },
}

/// The DSL lexer. Pull-based: the parser asks for one token at a time.
pub struct Lexer<'src> {
    source: &'src [u8],
    pos: usize,
    line: u32,
    col: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source: source.as_bytes(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Scan the next token, skipping whitespace and comments. Returns an
    /// [`TokenKind::Eof`] token at end of input (repeatedly, if asked again).
    pub fn next_token(&mut self) -> Result<Token, SyntaxError> {
        self.skip_trivia()?;

        let (line, col) = (self.line, self.col);
        let ch = match self.peek() {
            Some(c) => c,
            None => return Ok(self.token(TokenKind::Eof, String::new(), line, col)),
        };

        if ch.is_ascii_alphabetic() || ch == b'_' {
            return Ok(self.lex_ident(line, col));
        }
        if ch.is_ascii_digit() {
            return self.lex_int(line, col);
        }

        let kind = match ch {
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b':' => TokenKind::Colon,
            b';' => TokenKind::Semi,
            b',' => TokenKind::Comma,
            other => {
                return Err(SyntaxError::StrayChar {
                    line,
                    col,
                    ch: other as char,
                })
            }
        };
        self.advance();
        Ok(self.token(kind, (ch as char).to_string(), line, col))
    }

    fn lex_ident(&mut self, line: u32, col: u32) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == b'_' {
                self.advance();
            } else {
                break;
            }
        }
        let text = String::from_utf8_lossy(&self.source[start..self.pos]).into_owned();
        let kind = TokenKind::keyword(&text).unwrap_or(TokenKind::Ident);
        self.token(kind, text, line, col)
    }

    fn lex_int(&mut self, line: u32, col: u32) -> Result<Token, SyntaxError> {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }
        let text = String::from_utf8_lossy(&self.source[start..self.pos]).into_owned();
        // Range-check here so the parser can use the lexeme without re-parsing.
        if text.parse::<usize>().is_err() {
            return Err(SyntaxError::IntOutOfRange { line, col, text });
        }
        Ok(self.token(TokenKind::Int, text, line, col))
    }

    /// Skip whitespace and both comment forms until the next significant byte.
    fn skip_trivia(&mut self) -> Result<(), SyntaxError> {
        loop {
            match self.peek() {
                Some(c) if c.is_ascii_whitespace() => {
                    self.advance();
                }
                Some(b'/') if self.peek_at(1) == Some(b'/') => {
                    while let Some(c) = self.peek() {
                        if c == b'\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    let (line, col) = (self.line, self.col);
                    self.advance();
                    self.advance();
                    loop {
                        match self.peek() {
                            Some(b'*') if self.peek_at(1) == Some(b'/') => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            Some(_) => {
                                self.advance();
                            }
                            None => {
                                return Err(SyntaxError::UnterminatedComment { line, col })
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn token(&self, kind: TokenKind, text: String, line: u32, col: u32) -> Token {
        Token {
            kind,
            text,
            line,
            col,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.pos + offset).copied()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += 1;
            if c == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
    }
}
