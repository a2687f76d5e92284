//! # cwfc — fixed-width-record (CWF) message DSL compiler
//!
//! Compiles a small description language for fixed-width wire records into
//! three artifacts per operation: an XML Schema (XSD) for each message, a
//! WSDL service wrapper binding the request/response pair, and Java source
//! for a marshaller (DataHandler) converting between the wire record and a
//! structured object.
//!
//! ## The DSL
//!
//! ```text
//! operation Echo {
//!   in: Req {
//!     a string(3);
//!     b int(2);
//!   }
//!   out: Resp {
//!     c decimal(4,1);
//!   }
//! }
//! ```
//!
//! Field byte offsets are never written by the user: the first field starts
//! at 0 and each subsequent field starts where the previous one ends, so
//! `Req` above is `a@0..3`, `b@3..5`, total length 5. A reduced variant
//! accepts a single bare `message Name { ... }` and produces only its XSD.
//!
//! ## Pipeline
//!
//! Lexer → predictive parser (one token of lookahead) → semantic model with
//! inline offset computation → three independent emitters. Artifacts are
//! emitted through a [`Sink`] as each grammar production completes, in parse
//! order. The first syntax or I/O error aborts the run; the library never
//! exits the process — that is the CLI's call.

pub mod compile;
pub mod datahandler;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod token;
pub mod wsdl;
pub mod xsd;

pub use compile::{compile, CompileError, EmitError, FsSink, MemSink, Sink, Unit};
pub use lexer::{Lexer, SyntaxError};
pub use model::{Field, FieldType, Message, Operation};
pub use parser::Parser;
pub use token::{Token, TokenKind};
