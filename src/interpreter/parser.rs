/// Parses additive and multiplicative binary expressions.
///
/// Implements the `expression` and `term` levels of the grammar, both of
/// which fold their operators to the left.
pub mod binary;
/// Core parser entry points.
///
/// Defines the `ParseResult` type, the whole-input `parse` entry point and
/// `parse_expression`, the entry into the precedence hierarchy.
pub mod core;
/// Parses unary expressions and primary expressions.
///
/// Handles prefix `+` and `-`, integer literals and parenthesized
/// sub-expressions.
pub mod unary;
/// Helpers shared by the parsing functions.
///
/// Provides one-token lookahead over the fallible token stream and the
/// `eat` primitive that consumes an expected token.
pub mod utils;

pub use self::core::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH, ParseResult, parse};
