use std::fmt;

use logos::Logos;

/// Represents a lexical token of an arithmetic expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Digit runs become a single [`Token::Number`]; every other non-whitespace
/// character becomes its own token.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// A non-negative integer literal, kept as its digits, such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// A binary operator symbol. Characters outside the grammar also end up
    /// here so that they are reported as unknown operators later on.
    #[regex(r"[-+*/^]", |lex| lex.slice().chars().next())]
    Operator(char),
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(digits) => f.write_str(digits),
            Self::Operator(symbol) => write!(f, "{symbol}"),
            Self::LeftParen => f.write_str("("),
            Self::RightParen => f.write_str(")"),
        }
    }
}

/// Splits an expression into tokens.
///
/// This never fails: whitespace is skipped, maximal digit runs are collapsed
/// into one number and unrecognized characters are emitted verbatim as
/// operator tokens. Malformed input is reported by the later stages.
///
/// # Parameters
/// - `expression`: The infix source text.
///
/// # Returns
/// The tokens in order of appearance. Empty input yields an empty vector.
///
/// # Example
/// ```
/// use rpncalc::{Token, tokenize};
///
/// let tokens = tokenize("12 + 3");
/// assert_eq!(tokens,
///            vec![Token::Number("12".to_string()), Token::Operator('+'), Token::Number("3".to_string())]);
/// ```
#[must_use]
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => tokens.extend(lexer.slice().chars().map(Token::Operator)),
        }
    }

    log::debug!("tokenized {expression:?} into {}", render(&tokens));
    tokens
}

/// Renders a token sequence as space separated text, e.g. `2 3 4 * +`.
///
/// # Example
/// ```
/// use rpncalc::{render, to_postfix, tokenize};
///
/// let postfix = to_postfix(&tokenize("2+3*4")).unwrap();
/// assert_eq!(render(&postfix), "2 3 4 * +");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
