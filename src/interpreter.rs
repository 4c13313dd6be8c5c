/// The evaluator module owns the identifier table and resolves function
/// values.
///
/// This is the core of the calculator: an ordered table of named identifiers
/// plus the engine that recursively resolves function expressions over it.
///
/// # Responsibilities
/// - Stores variables and functions in one shared, name-ordered namespace.
/// - Resolves function values on demand, propagating the undefined sentinel.
/// - Reports table misuse such as duplicate declarations or cyclic references.
pub mod evaluator;
/// The lexer module tokenizes command lines.
///
/// The lexer reads one raw command line and produces a stream of tokens:
/// keywords, identifiers, number literals and operators. This is the first
/// stage of command handling.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source spans.
/// - Skips blanks while keeping enough position information to recover the
///   original word boundaries.
pub mod lexer;
/// The parser module builds commands from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the `Command` value a line represents, validating the accepted grammar and
/// rejecting everything else.
///
/// # Responsibilities
/// - Converts tokens into structured `Command` values.
/// - Validates declarations, assignments and function expressions.
/// - Distinguishes malformed commands from unknown ones.
pub mod parser;
/// The session module dispatches commands and formats responses.
///
/// A session owns one identifier table and one output sink. It executes parsed
/// commands, recovers every failure locally by writing a fixed message, and
/// formats numeric output.
///
/// # Responsibilities
/// - Executes commands against the identifier table.
/// - Maps core errors to the fixed user-facing message texts.
/// - Formats values, including the `nan` and `inf` renderings.
pub mod session;
/// The value module defines the stored identifier representations.
///
/// This module declares the record stored per identifier: the variable/function
/// distinction and the snapshot-or-expression payload of a function.
///
/// # Responsibilities
/// - Defines the `Identifier` entry type and its `Kind`.
/// - Defines the unevaluated function payload.
pub mod value;
