//! # spi
//!
//! spi is a small integer arithmetic interpreter written in Rust.
//! It tokenizes, parses and evaluates expressions built from integers, the
//! operators `+ - * /`, unary signs and parentheses.

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

use log::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum that represents an arithmetic
/// expression as a tree. The AST is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines the literal, unary and binary node shapes.
/// - Keeps the producing token and its source offset on every node.
/// - Renders trees in prefix form for diagnostics.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while interpreting
/// source code, each carrying the byte offset it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Combines them into the `Error` type returned by [`interpret`].
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the stages of interpretation.
///
/// This module ties together the lexer, the parser and the evaluator.
pub mod interpreter;

/// Analyzes, parses and evaluates an arithmetic expression.
///
/// This is the composition of [`tokenize`], [`parse`] and [`evaluate`]. The
/// first error from any stage is returned unchanged; there are no partial
/// results.
///
/// # Errors
/// - `Error::Lex` for unrecognized characters or oversized literals.
/// - `Error::Parse` if the tokens do not form exactly one expression.
/// - `Error::Runtime` for division by zero, overflow, or a broken invariant.
///
/// # Examples
/// ```
/// use spi::interpret;
///
/// assert_eq!(interpret("2 + 3 * 4").unwrap(), 14);
/// assert_eq!(interpret("(2 + 3) * 4").unwrap(), 20);
/// assert_eq!(interpret("- - - + -5").unwrap(), 5);
/// assert_eq!(interpret("-7 / 2").unwrap(), -4);
///
/// assert!(interpret("1 $ 2").is_err());
/// assert!(interpret("(1 + 2").is_err());
/// assert!(interpret("1 / 0").is_err());
/// ```
pub fn interpret(source: &str) -> Result<i64, Error> {
    let tree = parse(tokenize(source))?;
    debug!("parsed {source:?} into {tree}");

    let value = evaluate(&tree)?;
    debug!("evaluated {tree} to {value}");

    Ok(value)
}
