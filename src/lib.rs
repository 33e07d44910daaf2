//! # rpcalc
//!
//! rpcalc is a reverse-Polish-notation calculator written in Rust.
//! It tokenizes its input with a table-driven finite-state lexer and
//! interprets the resulting token stream in a single pass against a stack
//! of floating-point values.

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

use crate::interpreter::{evaluator::Interpreter, lexer::core::tokenize};

/// Provides unified error types for interpretation.
///
/// This module defines all errors that can be raised while executing a
/// token stream. It standardizes error reporting and implements the
/// standard error traits so callers can propagate or display failures
/// uniformly.
///
/// # Responsibilities
/// - Defines the error enum for all runtime failure modes.
/// - Attaches a one-line human-readable message to each condition.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together byte classification, the lexer automaton, the
/// numeric stack, and the evaluator to provide a complete runtime for
/// reverse-Polish arithmetic. It exposes the types a driver needs to
/// tokenize input and execute the resulting stream.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, stack, and evaluator.
/// - Provides the tokenizer entry point and the interpreter lifecycle.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities supporting interpretation.
///
/// This module holds helpers that are not specific to a single phase,
/// currently the tolerant numeric literal parser used when number tokens
/// are pushed.
pub mod util;

/// Evaluates a complete source string against a fresh stack.
///
/// The source is tokenized in full, then interpreted token by token. After
/// a successful run, values left on the stack are reported to standard
/// error and discarded. A runtime failure stops evaluation immediately and
/// skips the leftover report.
///
/// # Errors
/// Returns an error if interpretation fails; reading from an in-memory
/// source cannot fail, so every error is a `RuntimeError`.
///
/// # Examples
/// ```
/// use rpcalc::evaluate;
///
/// // Prints `7` on standard output.
/// let res = evaluate("3 4 + =");
/// assert!(res.is_ok());
///
/// // Dividing needs two operands: the stack underflows.
/// let res = evaluate("3 /");
/// assert!(res.is_err());
/// ```
pub fn evaluate(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tokens = tokenize(source.as_bytes())?;

    let mut interpreter = Interpreter::new();
    interpreter.setup();
    interpreter.run(&tokens)?;
    interpreter.teardown();

    Ok(())
}
