use log::trace;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        lexer::Token,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree and returns its integer value.
///
/// The evaluator dispatches on the expression variant: literals yield their
/// value, unary and binary operations evaluate their operands first and then
/// apply the operator. Errors from any subtree abort the whole evaluation.
///
/// Literals are unsigned, so a bare literal may exceed `i64::MAX` until a sign
/// or an operator brings it back into range; `-9223372036854775808` is
/// `i64::MIN`. Every operator result must fit into an `i64`.
///
/// # Errors
/// - `DivisionByZero` if a `/` has a zero right operand.
/// - `Overflow` if an operator result or the final value does not fit into an
///   `i64`.
/// - `Internal` if a node carries a token the parser never produces there.
///
/// # Example
/// ```
/// use spi::interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse};
///
/// let tree = parse(tokenize("(2 + 3) * 4")).unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), 20);
///
/// let tree = parse(tokenize("-9223372036854775808")).unwrap();
/// assert_eq!(evaluate(&tree).unwrap(), i64::MIN);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    narrow(eval_node(expr)?, expr.position())
}

/// Evaluates `expr` in the wider `i128` domain shared by literals and
/// operator results.
fn eval_node(expr: &Expr) -> EvalResult<i128> {
    let value = match expr {
        Expr::Literal { token, position } => eval_literal(*token, *position)?,
        Expr::UnaryOp { op, expr, position } => {
            i128::from(eval_unary(*op, eval_node(expr)?, *position)?)
        },
        Expr::BinaryOp { left,
                         op,
                         right,
                         position, } => {
            let left = eval_node(left)?;
            let right = eval_node(right)?;
            i128::from(eval_binary(*op, left, right, *position)?)
        },
    };
    trace!("{expr} => {value}");
    Ok(value)
}

fn eval_literal(token: Token, position: usize) -> EvalResult<i128> {
    match token {
        Token::Integer(value) => Ok(i128::from(value)),
        other => Err(RuntimeError::Internal { details: format!("literal node holds {other}"),
                                              position }),
    }
}

/// Converts a wide intermediate value into the `i64` result range.
///
/// # Errors
/// Returns `RuntimeError::Overflow` at `position` if `value` is out of range.
pub fn narrow(value: i128, position: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { position })
}
