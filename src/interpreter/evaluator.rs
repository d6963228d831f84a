/// Binary operator evaluation.
///
/// Implements the four arithmetic operators, including floor division and
/// range checks.
pub mod binary;
/// Core evaluation logic.
///
/// Contains the `EvalResult` type, the dispatch over expression variants and
/// the narrowing of intermediate values into the `i64` result range.
pub mod core;
/// Unary operator evaluation.
///
/// Handles prefix plus and negation.
pub mod unary;

pub use self::core::{EvalResult, evaluate};
