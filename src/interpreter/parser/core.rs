use std::iter::Peekable;

use log::trace;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{LexResult, Token},
        parser::{binary::parse_additive, utils::peek_token},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting of parentheses and unary signs the parser descends into.
pub const MAX_NESTING_DEPTH: usize = 256;
/// Tallest tree the parser builds. Long operator chains grow the tree
/// without nesting, so they are bounded separately.
pub const MAX_TREE_DEPTH: usize = 1024;

/// Parses a complete input into a single expression tree.
///
/// After the expression, the next token must be `Eof`; anything else is
/// rejected rather than silently dropped.
///
/// # Parameters
/// - `tokens`: Any stream of lexer items, usually from
///   [`crate::interpreter::lexer::tokenize`].
///
/// # Returns
/// The root of the parsed tree.
///
/// # Errors
/// - `UnexpectedToken` if the tokens do not match the grammar.
/// - `UnexpectedTrailingTokens` if input remains after the expression.
/// - `NestingTooDeep` past [`MAX_NESTING_DEPTH`] or [`MAX_TREE_DEPTH`].
/// - `Lexical` if the stream reports a lexical error.
/// - `UnexpectedEndOfInput` if the stream ends without `Eof`.
///
/// # Example
/// ```
/// use spi::interpreter::{lexer::tokenize, parser::parse};
///
/// let tree = parse(tokenize("2 + 3 * 4")).unwrap();
/// assert_eq!(tree.to_string(), "(+ 2 (* 3 4))");
///
/// assert!(parse(tokenize("(2 + 3")).is_err());
/// assert!(parse(tokenize("2 3")).is_err());
/// ```
pub fn parse<T>(tokens: T) -> ParseResult<Expr>
    where T: IntoIterator<Item = LexResult<(Token, usize)>>
{
    let mut tokens = tokens.into_iter().peekable();
    let expr = parse_expression(&mut tokens, 0)?;

    match peek_token(&mut tokens)? {
        (Token::Eof, _) => {
            trace!("parsed {expr}");
            Ok(expr)
        },
        (found, position) => Err(ParseError::UnexpectedTrailingTokens { found, position }),
    }
}

/// Parses a full expression.
///
/// This is the entry into the precedence hierarchy. It begins at the lowest
/// precedence level, addition and subtraction, and recursively descends.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with one token of lookahead.
/// - `depth`: Number of parentheses and signs enclosing this expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = LexResult<(Token, usize)>>
{
    parse_additive(tokens, depth)
}
