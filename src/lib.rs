//! # bigcalc
//!
//! bigcalc is an embeddable engine for infix integer expressions.
//! Each line is tokenized, converted to postfix with the shunting-yard
//! algorithm and evaluated over arbitrary-precision integers, against a
//! variable store that lives for the whole session.

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

use dashu::integer::IBig;

use crate::{error::EvaluationError, interpreter::evaluator::core::Context};

/// Classifies the lines typed into the interactive shell.
///
/// Lines starting with `/` are commands such as `/help`, `/exit` or
/// `/loglevel:N`; empty lines are ignored and everything else is handed to the
/// evaluator.
pub mod command;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// validating, converting or evaluating a line. Every failure is reported as a
/// value; none of them leaves the session unusable.
///
/// # Responsibilities
/// - Defines `ParseError` for failures before evaluation.
/// - Defines `RuntimeError` for failures of the postfix evaluation.
/// - Joins both into `EvaluationError`, the error of the public entry point.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together normalization, tokenizing, parenthesis
/// validation, postfix conversion and evaluation, along with the variable
/// store and the optional trace output.
///
/// # Responsibilities
/// - Coordinates lexer, converter and evaluator.
/// - Owns the session state in `Context`.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for numeric parsing and conversion.
///
/// # Responsibilities
/// - Parse decimal operand text without panicking.
/// - Narrow exponents to a machine-sized power with range checks.
pub mod util;

/// Evaluates a single line in a fresh context.
///
/// Variables assigned by the line are discarded afterwards; use
/// [`Context`] to keep them across lines.
///
/// # Errors
/// Returns an error if the line is malformed or evaluation fails.
///
/// # Examples
/// ```
/// use bigcalc::evaluate;
/// use dashu::integer::IBig;
///
/// assert_eq!(evaluate("3+4*2").unwrap(), Some(IBig::from(11)));
/// assert_eq!(evaluate("2^3^2").unwrap(), Some(IBig::from(64)));
///
/// // Assignments print nothing.
/// assert_eq!(evaluate("x = 5").unwrap(), None);
///
/// // 'y' is not defined.
/// assert!(evaluate("y + 1").is_err());
/// ```
pub fn evaluate(line: &str) -> Result<Option<IBig>, EvaluationError> {
    Context::new().evaluate(line)
}
