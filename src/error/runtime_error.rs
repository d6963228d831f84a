#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The byte offset of the `/` operator.
        position: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The byte offset of the operator whose result overflowed.
        position: usize,
    },
    /// The tree violates an invariant the parser guarantees. Never caused by
    /// user input.
    Internal {
        /// Details about the broken invariant.
        details:  String,
        /// The byte offset of the offending node.
        position: usize,
    },
}

impl RuntimeError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position }
            | Self::Overflow { position }
            | Self::Internal { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::Overflow { position } => write!(f,
                                                  "Error at position {position}: Integer overflow while trying to compute result."),
            Self::Internal { details, position } => {
                write!(f, "Internal error at position {position}: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
