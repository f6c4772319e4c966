/// The lexer module tokenizes expressions for further processing.
///
/// The lexer reads the raw expression text and produces a sequence of tokens:
/// numbers, operators and parentheses. It never fails; characters it does not
/// recognize are passed on as operator tokens and rejected later.
pub mod lexer;
/// Operator metadata.
///
/// Precedence, associativity and the arithmetic of each binary operator.
pub mod operator;
/// Infix-to-postfix conversion.
///
/// Implements the shunting-yard algorithm, which reorders operators into
/// Reverse Polish order according to precedence, associativity and
/// parentheses.
///
/// # Responsibilities
/// - Emits operands in their original order.
/// - Detects unbalanced parentheses.
/// - Rejects unknown operator symbols.
pub mod postfix;
/// The evaluator reduces a postfix sequence to a number.
///
/// It walks the sequence once, keeping intermediate results on an operand
/// stack, and reports runtime errors such as division by zero.
pub mod evaluator;
