/// Lexing errors.
///
/// Defines the errors raised while splitting source text into tokens:
/// unrecognized characters and integer literals that do not fit.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree,
/// such as unexpected tokens, unbalanced parentheses or trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The error category of a failed [`crate::interpret`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unrecognized character or oversized literal.
    Lex,
    /// The tokens do not form a single expression.
    Parse,
    /// Division by zero.
    DivisionByZero,
    /// The result does not fit into an `i64`.
    Overflow,
    /// Broken parser/evaluator invariant.
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any error produced by the full lex, parse and evaluate pipeline.
pub enum Error {
    /// Failure while tokenizing.
    Lex(LexError),
    /// Failure while parsing.
    Parse(ParseError),
    /// Failure while evaluating.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the category of this error.
    ///
    /// ## Example
    /// ```
    /// use spi::{error::ErrorKind, interpret};
    ///
    /// assert_eq!(interpret("1 / 0").unwrap_err().kind(), ErrorKind::DivisionByZero);
    /// assert_eq!(interpret("1 $ 2").unwrap_err().kind(), ErrorKind::Lex);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Runtime(RuntimeError::DivisionByZero { .. }) => ErrorKind::DivisionByZero,
            Self::Runtime(RuntimeError::Overflow { .. }) => ErrorKind::Overflow,
            Self::Runtime(RuntimeError::Internal { .. }) => ErrorKind::Internal,
        }
    }

    /// Returns the byte offset in the source the error refers to.
    ///
    /// ## Example
    /// ```
    /// use spi::interpret;
    ///
    /// assert_eq!(interpret("1 + x").unwrap_err().position(), Some(4));
    /// assert_eq!(interpret("(1 + 2").unwrap_err().position(), Some(6));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(error) => Some(error.position()),
            Self::Parse(error) => error.position(),
            Self::Runtime(error) => Some(error.position()),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lexical(error) => Self::Lex(error),
            other => Self::Parse(other),
        }
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}
