use thiserror::Error;

/// Conversion errors.
///
/// Defines the errors raised while reordering an infix token sequence into
/// postfix order, such as unbalanced parentheses or unknown operator symbols.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all errors that can be raised while reducing a postfix sequence to
/// a value, such as division by zero or operators without enough operands.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by [`evaluate`](crate::evaluate).
///
/// Wraps the error of whichever pipeline stage failed first. Use
/// [`Error::kind`] to inspect the failure without depending on message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The infix-to-postfix conversion failed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The language-neutral identity of an error.
///
/// Callers that want to localize or reformat messages match on this instead of
/// on the `Display` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An operator was applied with fewer than two operands available.
    MissingOperand,
    /// The divisor of a division evaluated to zero.
    DivisionByZero,
    /// Unbalanced `(` or `)`.
    MismatchedParenthesis,
    /// A token claimed to be an operator but matches no known symbol.
    OperatorNotFound,
    /// Evaluation ended with zero or more than one value left over.
    MalformedExpression,
    /// A numeric literal cannot be represented as a finite number.
    LiteralTooLarge,
}

impl Error {
    /// Returns the kind of this error.
    ///
    /// # Example
    /// ```
    /// use rpncalc::{ErrorKind, evaluate};
    ///
    /// let err = evaluate("5/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}
