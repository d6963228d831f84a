use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, narrow},
        lexer::Token,
    },
};

/// Applies a unary operator to an already evaluated operand.
///
/// Supported operators:
/// - `Token::Plus`: identity.
/// - `Token::Minus`: negation.
///
/// The operand may lie outside the `i64` range (an unsigned literal); the
/// result may not.
///
/// # Parameters
/// - `op`: The operator token.
/// - `value`: The operand value.
/// - `position`: Offset of the operator for error reporting.
///
/// # Example
/// ```
/// use spi::interpreter::{evaluator::unary::eval_unary, lexer::Token};
///
/// assert_eq!(eval_unary(Token::Minus, 5, 0).unwrap(), -5);
/// assert_eq!(eval_unary(Token::Plus, -5, 0).unwrap(), -5);
/// assert_eq!(eval_unary(Token::Minus, 9_223_372_036_854_775_808, 0).unwrap(), i64::MIN);
/// assert!(eval_unary(Token::Minus, i128::from(i64::MIN), 0).is_err());
/// assert!(eval_unary(Token::Star, 5, 0).is_err());
/// ```
pub fn eval_unary(op: Token, value: i128, position: usize) -> EvalResult<i64> {
    match op {
        Token::Plus => narrow(value, position),
        Token::Minus => narrow(-value, position),
        other => Err(RuntimeError::Internal { details: format!("{other} is not a unary operator"),
                                              position }),
    }
}
