use std::fmt;

use logos::Logos;

use crate::error::LexError;

/// Result type produced by the token stream.
pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// `Eof` is never matched by the scanner itself; [`TokenStream`] emits it once
/// the source is exhausted.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. Literals are unsigned; the
    /// evaluator checks the signed range once signs have been applied.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// End of input.
    Eof,
}

/// The classification of a [`Token`] without its payload.
///
/// Used by the parser to describe which tokens it expected at a decision
/// point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Integer literal.
    Integer,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// End of input.
    Eof,
}

/// Error categories raised by the scanner callbacks.
///
/// The scanner only knows *what* went wrong; [`TokenStream`] attaches the
/// offending lexeme and its position to build a [`LexError`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// The character does not start any token.
    #[default]
    UnexpectedCharacter,
    /// A digit run does not fit into a `u64`.
    LiteralTooLarge,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// ## Example
    /// ```
    /// use spi::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::Integer(7).kind(), TokenKind::Integer);
    /// assert_eq!(Token::Slash.kind(), TokenKind::Div);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Mul,
            Self::Slash => TokenKind::Div,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Eof => TokenKind::Eof,
        }
    }

    /// Returns the literal text of this token: the decimal value for
    /// integers, the matched character for operators and parentheses, and an
    /// empty string for `Eof`.
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Plus => "+".to_string(),
            Self::Minus => "-".to_string(),
            Self::Star => "*".to_string(),
            Self::Slash => "/".to_string(),
            Self::LParen => "(".to_string(),
            Self::RParen => ")".to_string(),
            Self::Eof => String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({}, {})", self.kind(), self.literal())
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Eof => "EOF",
        };
        write!(f, "{name}")
    }
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(u64)`: The parsed integer value.
/// - `Err(LexErrorKind::LiteralTooLarge)`: If the digit run overflows `u64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<u64, LexErrorKind> {
    lex.slice()
       .parse()
       .map_err(|_| LexErrorKind::LiteralTooLarge)
}

/// A lazy, never-ending stream of tokens over one source string.
///
/// Each item is the token together with the byte offset where its lexeme
/// starts. Once the source is exhausted the stream yields `Token::Eof`
/// forever, so consumers can always pull one more token. Once a lexical error
/// has been produced, the stream yields that same error forever and never
/// another token.
///
/// Obtain one with [`tokenize`].
pub struct TokenStream<'src> {
    lexer: logos::Lexer<'src, Token>,
    error: Option<LexError>,
}

impl Iterator for TokenStream<'_> {
    type Item = LexResult<(Token, usize)>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(error) = &self.error {
            return Some(Err(error.clone()));
        }

        let item = match self.lexer.next() {
            None => Ok((Token::Eof, self.lexer.source().len())),
            Some(Ok(token)) => Ok((token, self.lexer.span().start)),
            Some(Err(kind)) => {
                let error = self.error_at_cursor(&kind);
                self.error = Some(error.clone());
                Err(error)
            },
        };
        Some(item)
    }
}

impl TokenStream<'_> {
    fn error_at_cursor(&self, kind: &LexErrorKind) -> LexError {
        let position = self.lexer.span().start;
        let slice = self.lexer.slice();
        match kind {
            LexErrorKind::LiteralTooLarge => LexError::LiteralTooLarge { literal: slice.to_string(),
                                                                         position },
            LexErrorKind::UnexpectedCharacter => {
                let character = slice.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                LexError::UnexpectedCharacter { character, position }
            },
        }
    }
}

/// Lexically analyzes `source` into a lazy token stream.
///
/// The call itself never fails; errors surface only when the consumer pulls
/// past the offending lexeme.
///
/// # Example
/// ```
/// use spi::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("12 + 3").take(4).collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(12), 0), (Token::Plus, 3), (Token::Integer(3), 5), (Token::Eof, 6)]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> TokenStream<'_> {
    TokenStream { lexer: Token::lexer(source),
                  error: None, }
}
