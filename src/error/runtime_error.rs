use thiserror::Error;

use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operator found fewer than two values on the operand stack.
    #[error("Missing or bad operand for '{symbol}'.")]
    MissingOperand {
        /// The operator that could not be applied.
        symbol: char,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// An operator token carried a symbol outside `+ - * / ^`.
    #[error("Operator not found: '{symbol}'.")]
    OperatorNotFound {
        /// The unrecognized symbol.
        symbol: char,
    },
    /// Evaluation did not end with exactly one value on the stack.
    #[error("Missing operator or parenthesis: {remaining} values left after evaluation.")]
    MalformedExpression {
        /// How many values remained on the operand stack.
        remaining: usize,
    },
    /// A numeric literal overflowed to infinity.
    #[error("Literal is too large: {literal}.")]
    LiteralTooLarge {
        /// The offending digit run.
        literal: String,
    },
    /// A number token held something other than decimal digits.
    #[error("Invalid literal: '{literal}'.")]
    InvalidLiteral {
        /// The offending token text.
        literal: String,
    },
    /// A parenthesis reached the evaluator, which only accepts postfix input.
    #[error("Unexpected parenthesis in postfix input.")]
    UnexpectedParenthesis,
}

impl RuntimeError {
    /// Returns the language-neutral kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingOperand { .. } => ErrorKind::MissingOperand,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
            Self::OperatorNotFound { .. } => ErrorKind::OperatorNotFound,
            Self::MalformedExpression { .. }
            | Self::InvalidLiteral { .. }
            | Self::UnexpectedParenthesis => {
                ErrorKind::MalformedExpression
            },
            Self::LiteralTooLarge { .. } => ErrorKind::LiteralTooLarge,
        }
    }
}
