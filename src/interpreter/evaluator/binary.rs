use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, narrow},
        lexer::Token,
    },
};

/// Applies a binary operator to two already evaluated operands.
///
/// `+`, `-` and `*` are exact; any result outside the `i64` range is
/// reported as an overflow. `/` is floor division, see [`floor_div`].
///
/// # Parameters
/// - `op`: The operator token.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Offset of the operator for error reporting.
///
/// # Example
/// ```
/// use spi::interpreter::{evaluator::binary::eval_binary, lexer::Token};
///
/// assert_eq!(eval_binary(Token::Plus, 3, 4, 0).unwrap(), 7);
/// assert_eq!(eval_binary(Token::Slash, -7, 2, 0).unwrap(), -4);
/// assert!(eval_binary(Token::Slash, 1, 0, 0).is_err());
/// ```
pub fn eval_binary(op: Token, left: i128, right: i128, position: usize) -> EvalResult<i64> {
    let result = match op {
        Token::Plus => left.checked_add(right),
        Token::Minus => left.checked_sub(right),
        Token::Star => left.checked_mul(right),
        Token::Slash => return floor_div(left, right, position),
        other => {
            return Err(RuntimeError::Internal { details: format!("{other} is not a binary operator"),
                                                position });
        },
    };
    narrow(result.ok_or(RuntimeError::Overflow { position })?, position)
}

/// Integer division rounding toward negative infinity.
///
/// Rust's `/` truncates toward zero, so the quotient is lowered by one when
/// the division is inexact and the operands have opposite signs.
///
/// # Errors
/// - `DivisionByZero` if `right` is zero.
/// - `Overflow` if the quotient does not fit into an `i64`, as for
///   `i64::MIN / -1`.
pub fn floor_div(left: i128, right: i128, position: usize) -> EvalResult<i64> {
    if right == 0 {
        return Err(RuntimeError::DivisionByZero { position });
    }
    let quotient = left.checked_div(right)
                       .ok_or(RuntimeError::Overflow { position })?;
    if left % right != 0 && ((left < 0) != (right < 0)) {
        narrow(quotient - 1, position)
    } else {
        narrow(quotient, position)
    }
}
