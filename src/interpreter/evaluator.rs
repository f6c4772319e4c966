use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, operator::Operator},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a postfix token sequence to a single value.
///
/// Numbers are pushed onto an operand stack. An operator pops the most recent
/// value as its right-hand side and the one below it as its left-hand side,
/// so `10 3 -` evaluates to `7`.
///
/// # Parameters
/// - `tokens`: Tokens in postfix order, as produced by
///   [`to_postfix`](crate::to_postfix).
///
/// # Returns
/// The value of the expression.
///
/// # Errors
/// - `MissingOperand` if an operator finds fewer than two values.
/// - `DivisionByZero` if a divisor is zero.
/// - `OperatorNotFound` if an operator token is not one of `+ - * / ^`.
/// - `MalformedExpression` if anything other than exactly one value remains.
/// - `InvalidLiteral` if a number token is not a non-empty run of ASCII
///   digits.
/// - `LiteralTooLarge` if a number does not fit a finite `f64`.
/// - `UnexpectedParenthesis` if the input still contains parentheses.
///
/// # Example
/// ```
/// use rpncalc::{Token, eval_postfix};
///
/// let rpn = [Token::Number("10".to_string()),
///            Token::Number("3".to_string()),
///            Token::Operator('-')];
/// assert_eq!(eval_postfix(&rpn).unwrap(), 7.0);
/// ```
pub fn eval_postfix(tokens: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(digits) => stack.push(parse_number(digits)?),
            Token::Operator(symbol) => {
                let op = Operator::from_symbol(*symbol)
                    .ok_or(RuntimeError::OperatorNotFound { symbol: *symbol })?;
                let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                    return Err(RuntimeError::MissingOperand { symbol: *symbol });
                };
                let value = op.apply(lhs, rhs)?;
                log::trace!("{lhs} {symbol} {rhs} = {value}");
                stack.push(value);
            },
            Token::LeftParen | Token::RightParen => {
                return Err(RuntimeError::UnexpectedParenthesis);
            },
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(RuntimeError::MalformedExpression { remaining: rest.len() }),
    }
}

/// Converts a digit run to a finite number.
fn parse_number(digits: &str) -> EvalResult<f64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RuntimeError::InvalidLiteral { literal: digits.to_string() });
    }
    digits.parse::<f64>()
          .ok()
          .filter(|value| value.is_finite())
          .ok_or_else(|| RuntimeError::LiteralTooLarge { literal: digits.to_string() })
}
