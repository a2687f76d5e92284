//! Predictive recursive-descent parser for the CWF message DSL.
//!
//! Single token of lookahead, no backtracking. The parser owns its lexer and
//! lookahead state and builds the semantic model directly; there is no
//! intermediate syntax tree. Field offsets are assigned inline as a running
//! prefix sum while each field is parsed.
//!
//! Grammar:
//!
//! ```text
//! Operation  := "operation" Ident "{" "in" ":" Message "out" ":" Message "}"
//! Message    := Ident "{" FieldDecl+ "}"
//! FieldDecl  := Ident FieldType
//! FieldType  := "int" "(" Int ")" ";"
//!             | "string" "(" Int ")" ";"
//!             | "decimal" "(" Int "," Int ")" ";"
//! ```
//!
//! Artifacts are emitted through a [`Sink`] exactly once per completed
//! production, in parse order: each message's XSD right after its closing
//! brace, then the operation's WSDL and marshaller source after the
//! operation's closing brace. The first error aborts the parse; there is no
//! resynchronization or multi-error collection.

use crate::compile::{CompileError, Sink};
use crate::lexer::{Lexer, SyntaxError};
use crate::model::{Field, FieldType, Message, Operation};
use crate::token::{Token, TokenKind};
use crate::{datahandler, wsdl, xsd};

pub struct Parser<'src> {
    lexer: Lexer<'src>,
    lookahead: Token,
}

impl<'src> Parser<'src> {
    /// Create a parser over `source` and prime the lookahead.
    pub fn new(source: &'src str) -> Result<Self, SyntaxError> {
        let mut lexer = Lexer::new(source);
        let lookahead = lexer.next_token()?;
        Ok(Parser { lexer, lookahead })
    }

    /// The current lookahead token, for unit dispatch by the driver.
    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// Match the lookahead against `kind` and advance. Returns the consumed
    /// lexeme text. A mismatch is fatal to the parse.
    fn expect(&mut self, kind: TokenKind) -> Result<String, SyntaxError> {
        if self.lookahead.kind != kind {
            return Err(SyntaxError::Expected {
                line: self.lookahead.line,
                col: self.lookahead.col,
                expected: kind.to_string(),
                found: self.lookahead.to_string(),
            });
        }
        let text = std::mem::take(&mut self.lookahead.text);
        self.lookahead = self.lexer.next_token()?;
        Ok(text)
    }

    /// Consume an integer literal and return its value. The lexer has already
    /// range-checked the lexeme.
    fn int(&mut self) -> Result<usize, SyntaxError> {
        let (line, col) = (self.lookahead.line, self.lookahead.col);
        let text = self.expect(TokenKind::Int)?;
        text.parse()
            .map_err(|_| SyntaxError::IntOutOfRange { line, col, text })
    }

    /// `Operation := "operation" Ident "{" "in" ":" Message "out" ":" Message "}"`
    ///
    /// Emits both messages' XSDs, the WSDL, and the marshaller source through
    /// `sink` as each production completes.
    pub fn operation(&mut self, sink: &mut dyn Sink) -> Result<Operation, CompileError> {
        self.expect(TokenKind::KwOperation)?;
        let name = self.expect(TokenKind::Ident)?;
        self.expect(TokenKind::LBrace)?;

        self.expect(TokenKind::KwIn)?;
        self.expect(TokenKind::Colon)?;
        let input = self.message()?;
        sink.write(&format!("{}.xsd", input.name), &xsd::render(&input))?;

        self.expect(TokenKind::KwOut)?;
        self.expect(TokenKind::Colon)?;
        let output = self.message()?;
        sink.write(&format!("{}.xsd", output.name), &xsd::render(&output))?;

        self.expect(TokenKind::RBrace)?;

        let op = Operation {
            name,
            input,
            output,
        };
        sink.write(&format!("{}.wsdl", op.name), &wsdl::render(&op))?;
        sink.write(&format!("{}DH.java", op.name), &datahandler::render(&op))?;
        Ok(op)
    }

    /// The reduced unit: `"message" Message`. No artifact is emitted here;
    /// the driver names the XSD after the input file path.
    pub fn bare_message(&mut self) -> Result<Message, SyntaxError> {
        self.expect(TokenKind::KwMessage)?;
        self.message()
    }

    /// `Message := Ident "{" FieldDecl+ "}"`. The total record length is
    /// finalized from the last field once the closing brace is consumed.
    fn message(&mut self) -> Result<Message, SyntaxError> {
        let name = self.expect(TokenKind::Ident)?;
        self.expect(TokenKind::LBrace)?;
        let fields = self.field_list()?;
        self.expect(TokenKind::RBrace)?;

        // Grammar guarantees at least one field.
        let last = &fields[fields.len() - 1];
        let length = last.pos + last.width;
        Ok(Message {
            name,
            fields,
            length,
        })
    }

    /// `FieldDecl+`, with offsets assigned as a running prefix sum.
    fn field_list(&mut self) -> Result<Vec<Field>, SyntaxError> {
        let mut fields = vec![self.field_decl(0)?];
        while self.lookahead.kind != TokenKind::RBrace {
            let prev = &fields[fields.len() - 1];
            let pos = prev.pos + prev.width;
            let f = self.field_decl(pos)?;
            fields.push(f);
        }
        Ok(fields)
    }

    /// `FieldDecl := Ident FieldType`, placed at byte offset `pos`.
    fn field_decl(&mut self, pos: usize) -> Result<Field, SyntaxError> {
        let name = self.expect(TokenKind::Ident)?;
        let (ty, width, decimal_digits) = self.field_type()?;
        Ok(Field {
            name,
            ty,
            pos,
            width,
            decimal_digits,
        })
    }

    /// `FieldType := "int" "(" Int ")" ";" | "string" "(" Int ")" ";"
    ///             | "decimal" "(" Int "," Int ")" ";"`
    fn field_type(&mut self) -> Result<(FieldType, usize, usize), SyntaxError> {
        let (line, col) = (self.lookahead.line, self.lookahead.col);
        match self.lookahead.kind {
            kind @ (TokenKind::KwInt | TokenKind::KwString) => {
                let ty = if kind == TokenKind::KwInt {
                    FieldType::Int
                } else {
                    FieldType::String
                };
                self.expect(kind)?;
                self.expect(TokenKind::LParen)?;
                let width = self.int()?;
                self.expect(TokenKind::RParen)?;
                self.expect(TokenKind::Semi)?;
                Ok((ty, width, 0))
            }
            TokenKind::KwDecimal => {
                self.expect(TokenKind::KwDecimal)?;
                self.expect(TokenKind::LParen)?;
                let width = self.int()?;
                self.expect(TokenKind::Comma)?;
                let digits = self.int()?;
                self.expect(TokenKind::RParen)?;
                self.expect(TokenKind::Semi)?;
                // The unpack split at width - digits is meaningless otherwise.
                if digits >= width {
                    return Err(SyntaxError::DecimalDigits {
                        line,
                        col,
                        width,
                        digits,
                    });
                }
                Ok((FieldType::Decimal, width, digits))
            }
            _ => Err(SyntaxError::Expected {
                line,
                col,
                expected: "a field type ('int', 'decimal' or 'string')".to_string(),
                found: self.lookahead.to_string(),
            }),
        }
    }

    /// Reject trailing input after the compilation unit.
    pub fn finish(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Eof).map(|_| ())
    }
}
