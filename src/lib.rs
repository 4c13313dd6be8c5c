//! # varith
//!
//! varith is a minimal symbolic calculator written in Rust.
//! It reads line-oriented commands that declare variables, assign literal or
//! referential values, declare functions over previously declared identifiers,
//! and resolve and print identifier values on demand.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::interpreter::session::Session;

/// Defines the structure of parsed commands.
///
/// This module declares the `Command` enum and related types that represent a
/// single validated command line. Commands are built by the parser and executed
/// by the session against the identifier table.
///
/// # Responsibilities
/// - Defines one variant per accepted command form.
/// - Defines the arithmetic operators usable in a function declaration.
pub mod ast;
/// Provides unified error types for parsing and table operations.
///
/// This module defines all errors that can be raised while reading command
/// lines or while operating on the identifier table. It standardizes error
/// reporting and carries the identifier names involved in failures.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, table, resolver).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of command execution.
///
/// This module ties together lexing, parsing, the identifier table, the
/// expression resolver and output formatting to provide a complete runtime for
/// calculator sessions. It exposes the public API for executing commands.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, table, resolver, session.
/// - Provides entry points for handling single lines or whole scripts.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// # Responsibilities
/// - Compare floating-point numbers within machine epsilon.
pub mod util;

/// Runs a command script against a fresh calculator session.
///
/// Each line of the script is handled as one command. Responses and error
/// messages are written to `output`; a rejected command never aborts the run.
///
/// # Errors
/// Returns an error only when writing to `output` fails.
///
/// # Examples
/// ```
/// use varith::run_script;
///
/// let mut output = Vec::new();
/// run_script("let a=2\nlet b=2\nfn Sum2And2=a+b\nprint Sum2And2", &mut output).unwrap();
/// assert_eq!(output, b"4.00\n");
/// ```
pub fn run_script(source: &str, output: &mut impl Write) -> io::Result<()> {
    let mut session = Session::new(output);

    for line in source.lines() {
        session.handle_line(line)?;
    }

    Ok(())
}
