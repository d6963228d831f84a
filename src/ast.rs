use std::fmt;

use crate::interpreter::lexer::Token;

/// Represents an expression node in the AST.
///
/// Every node keeps the token that produced it and the byte offset of that
/// token in the source. Children are owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The `Token::Integer` that was parsed.
        token:    Token,
        /// Byte offset in the source code.
        position: usize,
    },
    /// Unary operation, such as `-x` or `+x`.
    UnaryOp {
        /// The operator token, `Token::Plus` or `Token::Minus`.
        op:       Token,
        /// The operand.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// Binary operation, such as `x + y`.
    BinaryOp {
        /// The left operand.
        left:     Box<Self>,
        /// The operator token, one of `+`, `-`, `*`, `/`.
        op:       Token,
        /// The right operand.
        right:    Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
}

impl Expr {
    /// Gets the source offset of the token that produced `self`.
    /// ## Example
    /// ```
    /// use spi::{ast::Expr, interpreter::lexer::Token};
    ///
    /// let expr = Expr::Literal { token:    Token::Integer(3),
    ///                            position: 4, };
    ///
    /// assert_eq!(expr.position(), 4);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }

    /// Returns the nesting depth of the tree. A single literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Literal { .. } => 1,
            Self::UnaryOp { expr, .. } => 1 + expr.depth(),
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// Renders the tree in fully parenthesized prefix form, e.g. `(+ 2 (* 3 4))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal { token, .. } => write!(f, "{}", token.literal()),
            Self::UnaryOp { op, expr, .. } => write!(f, "({} {expr})", op.literal()),
            Self::BinaryOp { left, op, right, .. } => {
                write!(f, "({} {left} {right})", op.literal())
            },
        }
    }
}
