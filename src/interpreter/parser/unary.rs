use std::iter::Peekable;

use crate::{
    ast::Expr,
    interpreter::{
        lexer::{LexResult, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{check_height, check_nesting, eat, peek_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`. Unary operators are
/// right-associative and chain, so `- - +5` is parsed as `-( -( +5 ) )`.
/// Every sign counts as one level of nesting.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     factor := ("+" | "-") factor
///             | primary
/// ```
/// # Parameters
/// - `tokens`: Token stream with one token of lookahead.
/// - `depth`: Number of parentheses and signs enclosing this factor.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
///
/// # Errors
/// Returns `NestingTooDeep` once `depth` exceeds the nesting limit.
pub(crate) fn parse_unary<I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<(Token, usize)>>
{
    let (token, position) = peek_token(tokens)?;
    check_nesting(depth, position)?;

    match token {
        op @ (Token::Plus | Token::Minus) => {
            tokens.next();
            let expr = parse_unary(tokens, depth + 1)?;
            check_height(1 + expr.depth(), position)?;
            Ok(Expr::UnaryOp { op,
                               expr: Box::new(expr),
                               position })
        },
        _ => parse_primary(tokens, depth),
    }
}

/// Parses a primary (atomic) expression: an integer literal or a
/// parenthesized expression.
///
/// Grammar:
/// ```text
///     primary := INTEGER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a primary expression.
/// - `depth`: Number of parentheses and signs enclosing this primary.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` naming the accepted kinds.
pub(crate) fn parse_primary<I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<(Token, usize)>>
{
    match eat(tokens, &[TokenKind::Integer, TokenKind::LParen])? {
        (token @ Token::Integer(_), position) => Ok(Expr::Literal { token, position }),
        _ => parse_grouping(tokens, depth + 1),
    }
}

/// Parses the remainder of a parenthesized expression after the opening `(`.
///
/// # Errors
/// Returns `UnexpectedToken` if the closing `)` is missing.
fn parse_grouping<I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<(Token, usize)>>
{
    let expr = parse_expression(tokens, depth)?;
    eat(tokens, &[TokenKind::RParen])?;
    Ok(expr)
}
