#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that does not start any token.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The byte offset where the character starts.
        position:  usize,
    },
    /// An integer literal does not fit into the supported integer width.
    LiteralTooLarge {
        /// The digit run as written in the source.
        literal:  String,
        /// The byte offset where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { position, .. } | Self::LiteralTooLarge { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => write!(f,
                                                                        "Error at position {position}: Unexpected character '{character}'."),
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at position {position}: Literal {literal} is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
