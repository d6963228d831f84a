use crate::{error::LexError, interpreter::lexer::{Token, TokenKind}};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that is not allowed at this point of the grammar.
    UnexpectedToken {
        /// The token kinds that would have been accepted.
        expected: Vec<TokenKind>,
        /// The token encountered.
        found:    Token,
        /// The byte offset of the token encountered.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra token.
        found:    Token,
        /// The byte offset of the extra token.
        position: usize,
    },
    /// Parentheses, signs or operator chains nest deeper than the parser
    /// allows.
    NestingTooDeep {
        /// The byte offset where the limit was exceeded.
        position: usize,
    },
    /// The token stream ended without an end-of-input token.
    UnexpectedEndOfInput,
    /// The token stream reported a lexical error.
    Lexical(LexError),
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lexical(error)
    }
}

impl ParseError {
    /// Returns the byte offset the error refers to, if the stream provided
    /// one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position } => Some(*position),
            Self::UnexpectedEndOfInput => None,
            Self::Lexical(error) => Some(error.position()),
        }
    }
}

/// Formats a list of token kinds as `A`, `A or B`, or `A, B or C`.
fn describe_expected(expected: &[TokenKind]) -> String {
    match expected {
        [] => "nothing".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init = init.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            format!("{init} or {last}")
        },
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    position, } => write!(f,
                                                          "Error at position {position}: Expected {}, got {found}.",
                                                          describe_expected(expected)),
            Self::UnexpectedTrailingTokens { found, position } => write!(f,
                                                                         "Error at position {position}: Extra tokens after expression, starting with {found}."),
            Self::NestingTooDeep { position } => {
                write!(f, "Error at position {position}: Expression is nested too deeply.")
            },
            Self::UnexpectedEndOfInput => write!(f, "Error: Token stream ended before end of input."),
            Self::Lexical(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(error) => Some(error),
            _ => None,
        }
    }
}
