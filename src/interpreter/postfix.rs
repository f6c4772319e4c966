use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        operator::{Associativity, Operator},
    },
};

/// Result type used by the infix-to-postfix converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders an infix token sequence into postfix (RPN) order.
///
/// This is the shunting-yard algorithm. Numbers go straight to the output,
/// operators wait on a stack until an operator of lower precedence (or equal
/// precedence, for left-associative operators) arrives, and parentheses
/// delimit groups on that stack without ever being emitted.
///
/// # Parameters
/// - `tokens`: Infix tokens as produced by [`tokenize`](crate::tokenize).
///
/// # Returns
/// The same numbers and operators in postfix order.
///
/// # Errors
/// - `MismatchedParenthesis` if a `)` has no matching `(` or a `(` is never
///   closed.
/// - `OperatorNotFound` if an operator token is not one of `+ - * / ^`.
///
/// # Example
/// ```
/// use rpncalc::{render, to_postfix, tokenize};
///
/// let postfix = to_postfix(&tokenize("(2+3)*4")).unwrap();
/// assert_eq!(render(&postfix), "2 3 + 4 *");
///
/// let postfix = to_postfix(&tokenize("2^3^2")).unwrap();
/// assert_eq!(render(&postfix), "2 3 2 ^ ^");
/// ```
pub fn to_postfix(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    let mut stack: Vec<Token> = Vec::new();
    let mut output = Vec::with_capacity(tokens.len());

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token.clone()),
            Token::LeftParen => stack.push(Token::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ParseError::MismatchedParenthesis),
                }
            },
            Token::Operator(symbol) => {
                let op = lookup(*symbol)?;
                while let Some(Token::Operator(top)) = stack.last()
                      && should_pop(lookup(*top)?, op)
                {
                    log::trace!("popping '{top}' before '{symbol}'");
                    output.extend(stack.pop());
                }
                stack.push(token.clone());
            },
        }
    }

    while let Some(top) = stack.pop() {
        if matches!(top, Token::LeftParen | Token::RightParen) {
            return Err(ParseError::MismatchedParenthesis);
        }
        output.push(top);
    }

    Ok(output)
}

/// Decides whether the operator on top of the stack binds tighter than the
/// incoming one and therefore has to be emitted first.
const fn should_pop(top: Operator, incoming: Operator) -> bool {
    top.precedence() > incoming.precedence()
    || (top.precedence() == incoming.precedence()
        && matches!(incoming.associativity(), Associativity::Left))
}

fn lookup(symbol: char) -> ParseResult<Operator> {
    Operator::from_symbol(symbol).ok_or(ParseError::OperatorNotFound { symbol })
}
