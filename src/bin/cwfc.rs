//! CWF DSL compiler CLI.
//!
//! Usage:
//!   cwfc FILE
//!
//! Compiles the single `operation { ... }` (or bare `message { ... }`)
//! declaration in FILE, writing artifacts to the current working directory:
//! `<MessageName>.xsd` per message, `<OperationName>.wsdl`, and
//! `<OperationName>DH.java`; the bare variant writes `<FILE>.xsd`.
//!
//! Diagnostics go to standard output with the `file:line:column` of the
//! failure; the exit code is nonzero on any syntax or I/O error.

use anyhow::{anyhow, Context};
use cwfc::{compile, FsSink};
use std::process;

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().ok_or_else(|| anyhow!("usage: cwfc FILE"))?;
    if args.next().is_some() {
        return Err(anyhow!("usage: cwfc FILE"));
    }

    let source = std::fs::read_to_string(&path).with_context(|| format!("opening {}", path))?;
    let mut sink = FsSink::new(".");
    compile(&source, &path, &mut sink).with_context(|| path.clone())?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        println!("{:#}", e);
        process::exit(1);
    }
}
