use std::iter::Peekable;

use log::trace;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{LexResult, Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, MAX_TREE_DEPTH, ParseResult},
    },
};

/// Returns the next token without consuming it.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the stream reports a lexical error (`ParseError::Lexical`),
/// - the stream ended without an `Eof` token.
pub(in crate::interpreter::parser) fn peek_token<I>(tokens: &mut Peekable<I>)
                                                    -> ParseResult<(Token, usize)>
    where I: Iterator<Item = LexResult<(Token, usize)>>
{
    match tokens.peek() {
        Some(Ok((token, position))) => Ok((*token, *position)),
        Some(Err(error)) => Err(error.clone().into()),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Consumes and returns the next token if its kind is one of `expected`.
///
/// The token is left in the stream when it does not match, although no
/// caller recovers from the error.
///
/// # Parameters
/// - `tokens`: Token stream with one token of lookahead.
/// - `expected`: Accepted token kinds.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` naming `expected` and the actual
/// token, or whatever [`peek_token`] reports.
pub(in crate::interpreter::parser) fn eat<I>(tokens: &mut Peekable<I>,
                                             expected: &[TokenKind])
                                             -> ParseResult<(Token, usize)>
    where I: Iterator<Item = LexResult<(Token, usize)>>
{
    let (token, position) = peek_token(tokens)?;
    if !expected.contains(&token.kind()) {
        return Err(ParseError::UnexpectedToken { expected: expected.to_vec(),
                                                 found: token,
                                                 position });
    }
    tokens.next();
    trace!("eat {token} at {position}");
    Ok((token, position))
}

/// Fails once the parser has descended through more than
/// [`MAX_NESTING_DEPTH`] parentheses and signs.
pub(in crate::interpreter::parser) fn check_nesting(depth: usize,
                                                   position: usize)
                                                   -> ParseResult<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(())
}

/// Fails if a node of the given height would exceed [`MAX_TREE_DEPTH`].
pub(in crate::interpreter::parser) fn check_height(height: usize,
                                                  position: usize)
                                                  -> ParseResult<()> {
    if height > MAX_TREE_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }
    Ok(())
}
