use std::fs;

use pretty_assertions::assert_eq;
use rpncalc::{ErrorKind, RuntimeError, Token, compile, eval_postfix, evaluate, render, to_postfix,
              tokenize};

fn num(digits: &str) -> Token {
    Token::Number(digits.to_string())
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert!(value.to_bits() == expected.to_bits(),
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), kind, "{src:?} failed with {e}"),
    }
}

fn postfix_of(src: &str) -> String {
    render(&to_postfix(&tokenize(src)).unwrap_or_else(|e| panic!("{src:?} failed: {e}")))
}

#[test]
fn multi_digit_numbers_are_one_token() {
    assert_eq!(tokenize("12+3"), vec![num("12"), Token::Operator('+'), num("3")]);
    assert_eq!(tokenize("007"), vec![num("007")]);
}

#[test]
fn whitespace_is_skipped() {
    assert_eq!(tokenize(" 1\t+\n2 "), vec![num("1"), Token::Operator('+'), num("2")]);
    assert_eq!(tokenize("1 2"), vec![num("1"), num("2")]);
    assert!(tokenize("").is_empty());
    assert!(tokenize("   ").is_empty());
    assert_eq!(tokenize("2\u{a0}+3"), vec![num("2"), Token::Operator('+'), num("3")]);
}

#[test]
fn parentheses_and_unknown_symbols_are_tokens() {
    assert_eq!(tokenize("(1)%x"),
               vec![Token::LeftParen,
                    num("1"),
                    Token::RightParen,
                    Token::Operator('%'),
                    Token::Operator('x')]);
    assert_eq!(tokenize("ab"), vec![Token::Operator('a'), Token::Operator('b')]);
    assert_eq!(tokenize("2€3"), vec![num("2"), Token::Operator('€'), num("3")]);
}

#[test]
fn postfix_respects_precedence_and_associativity() {
    assert_eq!(postfix_of("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix_of("2*3+4"), "2 3 * 4 +");
    assert_eq!(postfix_of("10-3-2"), "10 3 - 2 -");
    assert_eq!(postfix_of("2^3^2"), "2 3 2 ^ ^");
    assert_eq!(postfix_of("(2+3)*4"), "2 3 + 4 *");
    assert_eq!(postfix_of("((1))"), "1");
    assert_eq!(postfix_of("1+2*3^4-5"), "1 2 3 4 ^ * + 5 -");
}

#[test]
fn postfix_reports_mismatched_parentheses() {
    for src in ["(2+3", "2+3)", ")(", "((1)", "(", ")"] {
        let err = to_postfix(&tokenize(src)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MismatchedParenthesis, "{src:?}");
    }
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("10-3-2", 5.0);
    assert_value("100/10/2", 5.0);
    assert_value("8-2^2*3", -4.0);
}

#[test]
fn whitespace_does_not_change_the_result() {
    assert_eq!(evaluate("2 + 3").unwrap(), evaluate("2+3").unwrap());
    assert_value("  12 *\t( 3 + 4 ) ", 84.0);
}

#[test]
fn division_and_powers_use_floating_point() {
    assert_value("7/2", 3.5);
    assert_value("1/4", 0.25);
    assert_value("0^0", 1.0);
    assert_value("2^10", 1024.0);
    assert_value("2^(0-1)", 0.5);
}

#[test]
fn empty_input_is_nan() {
    assert!(evaluate("").unwrap().is_nan());
}

#[test]
fn repeated_evaluation_is_deterministic() {
    let first = evaluate("3^(1/3)*7/9").unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate("3^(1/3)*7/9").unwrap().to_bits(), first.to_bits());
    }
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("5/0", ErrorKind::DivisionByZero);
    assert_failure("5/(3-3)", ErrorKind::DivisionByZero);
    assert_failure("0/0", ErrorKind::DivisionByZero);
}

#[test]
fn unbalanced_parentheses_are_errors() {
    assert_failure("(2+3", ErrorKind::MismatchedParenthesis);
    assert_failure("2+3)", ErrorKind::MismatchedParenthesis);
}

#[test]
fn missing_operands_are_errors() {
    assert_failure("2+", ErrorKind::MissingOperand);
    assert_failure("*", ErrorKind::MissingOperand);
    assert_failure("(+3)", ErrorKind::MissingOperand);
}

#[test]
fn leftover_values_are_errors() {
    assert_failure("2 3", ErrorKind::MalformedExpression);
    assert_failure("()", ErrorKind::MalformedExpression);
    assert_failure("   ", ErrorKind::MalformedExpression);
    assert_failure("(1)(2)", ErrorKind::MalformedExpression);
}

#[test]
fn unknown_operators_are_errors() {
    assert_failure("2x3", ErrorKind::OperatorNotFound);
    assert_failure("2%3", ErrorKind::OperatorNotFound);
    assert_failure("a", ErrorKind::OperatorNotFound);
}

#[test]
fn oversized_literals_are_errors() {
    assert_failure(&"9".repeat(400), ErrorKind::LiteralTooLarge);
}

#[test]
fn evaluator_works_on_hand_built_postfix() {
    let rpn = [num("2"), num("3"), num("4"), Token::Operator('*'), Token::Operator('+')];
    assert_eq!(eval_postfix(&rpn).unwrap(), 14.0);

    let unknown = [num("1"), num("2"), Token::Operator('%')];
    assert_eq!(eval_postfix(&unknown).unwrap_err().kind(), ErrorKind::OperatorNotFound);

    let grouped = [Token::LeftParen, num("1"), Token::RightParen];
    assert_eq!(eval_postfix(&grouped).unwrap_err().kind(), ErrorKind::MalformedExpression);

    assert_eq!(eval_postfix(&[]).unwrap_err().kind(), ErrorKind::MalformedExpression);
}

#[test]
fn evaluator_rejects_non_digit_literals() {
    for literal in ["-5", "1.5", "abc", "", "1e3", "+7"] {
        let err = eval_postfix(&[num(literal)]).unwrap_err();
        assert_eq!(err, RuntimeError::InvalidLiteral { literal: literal.to_string() });
        assert_eq!(err.kind(), ErrorKind::MalformedExpression, "{literal:?}");
    }
    assert_eq!(eval_postfix(&[num("007")]).unwrap(), 7.0);
}

#[test]
fn unknown_non_ascii_symbols_are_errors() {
    assert_failure("2€3", ErrorKind::OperatorNotFound);
    assert_value("2\u{a0}+\u{a0}3", 5.0);
}

#[test]
fn compiled_postfix_evaluates_like_evaluate() {
    let postfix = compile("12*(3+4)-6/2").unwrap();
    assert_eq!(render(&postfix), "12 3 4 + * 6 2 / -");
    assert_eq!(eval_postfix(&postfix).unwrap(), evaluate("12*(3+4)-6/2").unwrap());

    assert_eq!(compile("(1+2").unwrap_err().kind(), ErrorKind::MismatchedParenthesis);
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(evaluate("5/0").unwrap_err().to_string(), "Division by zero.");
    assert_eq!(evaluate("(1").unwrap_err().to_string(), "Mismatched parenthesis.");
    assert_eq!(evaluate("1?2").unwrap_err().to_string(), "Operator not found: '?'.");
}

#[test]
fn expression_file_works() {
    let contents = fs::read_to_string("tests/expressions.txt").expect("missing file");
    let mut count = 0;

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (src, expected) = line.rsplit_once('=')
                                  .unwrap_or_else(|| panic!("bad line: {line}"));
        let expected: f64 = expected.trim()
                                    .parse()
                                    .unwrap_or_else(|e| panic!("bad expected value in {line}: {e}"));
        assert_value(src.trim(), expected);
        count += 1;
    }

    assert!(count > 0, "No expressions found in tests/expressions.txt");
}
