use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while converting infix to postfix.
pub enum ParseError {
    /// A `)` had no matching `(`, or a `(` was never closed.
    #[error("Mismatched parenthesis.")]
    MismatchedParenthesis,
    /// An operator token carried a symbol outside `+ - * / ^`.
    #[error("Operator not found: '{symbol}'.")]
    OperatorNotFound {
        /// The unrecognized symbol.
        symbol: char,
    },
}

impl ParseError {
    /// Returns the language-neutral kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MismatchedParenthesis => ErrorKind::MismatchedParenthesis,
            Self::OperatorNotFound { .. } => ErrorKind::OperatorNotFound,
        }
    }
}
