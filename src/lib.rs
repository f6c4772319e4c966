//! # rpncalc
//!
//! rpncalc evaluates arithmetic expressions such as `(2 + 3) * 4 ^ 2`.
//! Non-negative integer operands, the binary operators `+ - * / ^` and
//! parentheses are supported; the result is an `f64`.
//!
//! Evaluation is a three stage pipeline: the expression is tokenized,
//! reordered into postfix order with the shunting-yard algorithm and finally
//! reduced on an operand stack. Every stage is a pure function and can be
//! used on its own.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for conversion and evaluation.
///
/// This module defines every error that can be raised while converting or
/// evaluating an expression, and the [`ErrorKind`] enumeration that identifies
/// a failure independently of its message text.
///
/// # Responsibilities
/// - Defines error enums for both failing stages.
/// - Maps every error to a language-neutral kind.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module contains the lexer, the operator table, the infix-to-postfix
/// converter and the postfix evaluator.
pub mod interpreter;

pub use crate::{
    error::{Error, ErrorKind, ParseError, RuntimeError},
    interpreter::{
        evaluator::eval_postfix,
        lexer::{Token, render, tokenize},
        operator::{Associativity, Operator},
        postfix::to_postfix,
    },
};

/// Tokenizes an expression and converts it to postfix order.
///
/// This runs the first two pipeline stages, so callers that want to show the
/// postfix form can feed the result straight into [`eval_postfix`] without
/// converting twice.
///
/// # Example
/// ```
/// use rpncalc::{compile, eval_postfix, render};
///
/// let postfix = compile("(2+3)*4").unwrap();
/// assert_eq!(render(&postfix), "2 3 + 4 *");
/// assert_eq!(eval_postfix(&postfix).unwrap(), 20.0);
/// ```
pub fn compile(expression: &str) -> Result<Vec<Token>, ParseError> {
    let postfix = to_postfix(&tokenize(expression))?;
    log::debug!("postfix form: {}", render(&postfix));
    Ok(postfix)
}

/// Evaluates an infix arithmetic expression.
///
/// The expression is tokenized, converted to postfix order and evaluated. The
/// first failure of any stage is returned; there are no partial results.
///
/// An empty string has nothing to evaluate and yields `NaN` rather than an
/// error.
///
/// # Errors
/// Returns an error if the parentheses are unbalanced, an unknown operator is
/// used, an operator lacks operands, a division by zero occurs, or the
/// expression does not reduce to exactly one value.
///
/// # Examples
/// ```
/// use rpncalc::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("2^3^2").unwrap(), 512.0);
/// assert!(evaluate("").unwrap().is_nan());
///
/// let err = evaluate("(2+3").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::MismatchedParenthesis);
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    if expression.is_empty() {
        return Ok(f64::NAN);
    }

    let postfix = compile(expression)?;
    let value = eval_postfix(&postfix)?;
    log::debug!("{expression:?} evaluated to {value}");
    Ok(value)
}
