use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{LexResult, Token},
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::{check_height, peek_token},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `a - b - c`
/// becomes `(a - b) - c`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with one token of lookahead.
/// - `depth`: Current nesting depth, passed through to the operands.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<(Token, usize)>>
{
    let mut left = parse_multiplicative(tokens, depth)?;
    let mut height = left.depth();
    loop {
        let (op, position) = peek_token(tokens)?;
        if !matches!(op, Token::Plus | Token::Minus) {
            break;
        }
        tokens.next();
        let right = parse_multiplicative(tokens, depth)?;
        height = 1 + height.max(right.depth());
        check_height(height, position)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with one token of lookahead.
/// - `depth`: Current nesting depth, passed through to the operands.
///
/// # Returns
/// A binary expression tree combining factor-level nodes.
pub fn parse_multiplicative<I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<(Token, usize)>>
{
    let mut left = parse_unary(tokens, depth)?;
    let mut height = left.depth();
    loop {
        let (op, position) = peek_token(tokens)?;
        if !matches!(op, Token::Star | Token::Slash) {
            break;
        }
        tokens.next();
        let right = parse_unary(tokens, depth)?;
        height = 1 + height.max(right.depth());
        check_height(height, position)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }
    Ok(left)
}
