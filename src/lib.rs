//! # tally
//!
//! tally evaluates integer arithmetic expressions such as `(2 + 3) * 4`.
//! It supports `+`, `-`, `*`, `/` with the usual precedence, left
//! associativity and parentheses. Parsing and evaluation are fused into a
//! single recursive-descent pass over the tokens of one line.

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

use crate::{
    error::InterpretResult,
    interpreter::{lexer::Lexer, parser::Interpreter},
};

/// Provides the error types for lexing, parsing and evaluating.
///
/// Every failure carries the byte offset in the line it refers to. The
/// per-phase errors are unified by [`error::InterpretError`].
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, arithmetic).
/// - Renders messages of the form `Error at position N: ...`.
/// - Converts phase errors into the unified error for `?` propagation.
pub mod error;
/// The evaluation core: tokens, lexer, recursive-descent interpreter and
/// checked arithmetic.
pub mod interpreter;
/// Line-oriented driver around [`evaluate`].
///
/// Reads lines, recognises the exit keyword, evaluates everything else and
/// reports each result. An error on one line never stops the loop.
pub mod repl;

/// Evaluates one line of input.
///
/// A fresh lexer and interpreter are built for every call, so separate
/// evaluations never share state.
///
/// # Errors
/// Returns the first lexical, grammar or arithmetic error in the line.
///
/// # Examples
/// ```
/// use tally::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(evaluate("10 - 2 - 3").unwrap(), 5);
///
/// // Characters outside the grammar are reported with their position.
/// let err = evaluate("2 + a").unwrap_err();
/// assert_eq!(err.position(), 4);
/// ```
pub fn evaluate(source: &str) -> InterpretResult<i64> {
    Interpreter::new(Lexer::new(source))?.evaluate()
}
