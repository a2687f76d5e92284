//! Compilation driver: artifact sinks, error types, and unit dispatch.
//!
//! Library code here is exit-free; the CLI binary alone maps a
//! [`CompileError`] to diagnostics and a process exit code. Artifacts flow
//! through a [`Sink`] so the parser's emission points stay testable without
//! touching the file system.

use crate::lexer::SyntaxError;
use crate::model::{Message, Operation};
use crate::parser::Parser;
use crate::token::TokenKind;
use crate::xsd;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Failure to produce one output artifact.
#[derive(Debug, thiserror::Error)]
#[error("writing {artifact}: {source}")]
pub struct EmitError {
    pub artifact: String,
    #[source]
    pub source: std::io::Error,
}

/// Anything that can abort a compilation: the first syntax error, or an I/O
/// failure on an output artifact. Artifacts written before the failing point
/// stay on disk; there is no transactional guarantee across them.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("{0}")]
    Syntax(#[from] SyntaxError),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Destination for generated artifacts. Each artifact is written once,
/// whole, as soon as its grammar production completes.
pub trait Sink {
    fn write(&mut self, name: &str, contents: &str) -> Result<(), EmitError>;
}

/// Writes artifacts as files under a directory (the current working
/// directory for the CLI). Files are closed on every path out.
pub struct FsSink {
    root: PathBuf,
}

impl FsSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsSink { root: root.into() }
    }
}

impl Sink for FsSink {
    fn write(&mut self, name: &str, contents: &str) -> Result<(), EmitError> {
        let path = self.root.join(name);
        let emit_err = |source| EmitError {
            artifact: name.to_string(),
            source,
        };
        let mut file = File::create(&path).map_err(emit_err)?;
        file.write_all(contents.as_bytes()).map_err(emit_err)
    }
}

/// In-memory sink, for tests and tooling.
#[derive(Debug, Default)]
pub struct MemSink {
    pub artifacts: Vec<(String, String)>,
}

impl MemSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.as_str())
    }
}

impl Sink for MemSink {
    fn write(&mut self, name: &str, contents: &str) -> Result<(), EmitError> {
        self.artifacts.push((name.to_string(), contents.to_string()));
        Ok(())
    }
}

/// What a source file compiled to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unit {
    Operation(Operation),
    /// The reduced variant: a single bare message. Its XSD is named after
    /// the input path, not the message.
    Message(Message),
}

/// Compile one source text. Dispatches on the first token: a full
/// `operation` unit emits two XSDs, a WSDL and the marshaller source; a bare
/// `message` unit emits `<source_name>.xsd`. Exactly one unit per file;
/// trailing input is rejected.
pub fn compile(source: &str, source_name: &str, sink: &mut dyn Sink) -> Result<Unit, CompileError> {
    let mut parser = Parser::new(source)?;
    match parser.lookahead().kind {
        TokenKind::KwOperation => {
            let op = parser.operation(sink)?;
            parser.finish()?;
            Ok(Unit::Operation(op))
        }
        TokenKind::KwMessage => {
            let msg = parser.bare_message()?;
            parser.finish()?;
            sink.write(&format!("{}.xsd", source_name), &xsd::render(&msg))?;
            Ok(Unit::Message(msg))
        }
        _ => {
            let tok = parser.lookahead();
            Err(SyntaxError::Expected {
                line: tok.line,
                col: tok.col,
                expected: "'operation' or 'message'".to_string(),
                found: tok.to_string(),
            }
            .into())
        }
    }
}
