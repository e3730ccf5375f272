use infixcalc::{
    error::{EvalError, ParseError, RuntimeError},
    evaluate,
};

fn eval_ok(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert_eq!(value, expected,
                       "Expression '{src}' evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("Expression '{src}' failed: {e}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match evaluate(src) {
        Ok(value) => panic!("Expression '{src}' evaluated to {value} but was expected to fail"),
        Err(EvalError::Parse(e)) => e,
        Err(e) => panic!("Expression '{src}' failed with the wrong error: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    eval_ok("1 + 2", 3.0);
    eval_ok("8 - 5", 3.0);
    eval_ok("7 * 9", 63.0);
    eval_ok("10 / 2", 5.0);
}

#[test]
fn operator_precedence() {
    eval_ok("2 + 3 * 4", 14.0);
    eval_ok("(2 + 3) * 4", 20.0);
    eval_ok("2 - 6 / 3", 0.0);
    eval_ok("2 * 3 + 4 * 5", 26.0);
}

#[test]
fn left_to_right_associativity() {
    eval_ok("10 - 2 - 3", 5.0);
    eval_ok("24 / 4 / 2", 3.0);
    eval_ok("10 - 2 + 3", 11.0);
}

#[test]
fn unary_signs() {
    eval_ok("-5 + 3", -2.0);
    eval_ok("3 * -2", -6.0);
    eval_ok("+5", 5.0);
    eval_ok("(-5)", -5.0);
    eval_ok("-5 * -5", 25.0);
}

#[test]
fn consecutive_signs_fold_once() {
    // One sign directly before a number is folded by the tokenizer; a
    // second sign in a row is left for the evaluator to reject.
    eval_ok("1 + + 2", 3.0);
    eval_ok("2 - - 3", 5.0);
    assert!(matches!(parse_error("1 + - - 2"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn floating_point_operands() {
    eval_ok("1.5 + 2.25", 3.75);
    eval_ok("0.5 * 4", 2.0);
    eval_ok("10 / 4", 2.5);
    eval_ok("3.14", 3.14);
}

#[test]
fn parenthesis_nesting() {
    eval_ok("((1+2)*(3+4))", 21.0);
    eval_ok("(((7)))", 7.0);
    eval_ok("2 * (3 + (4 - 1))", 12.0);
}

#[test]
fn whitespace_is_ignored() {
    eval_ok("1+2", 3.0);
    eval_ok(" 1 + 2 ", 3.0);
    eval_ok("\t1\n+\t2\n", 3.0);
}

#[test]
fn evaluation_is_deterministic() {
    for _ in 0..3 {
        eval_ok("2 + 3 * 4", 14.0);
        assert!(matches!(parse_error("(1 + 2"), ParseError::UnmatchedParenthesis { .. }));
    }
}

#[test]
fn empty_expression() {
    assert!(matches!(parse_error(""), ParseError::EmptyExpression));
    assert!(matches!(parse_error("   "), ParseError::EmptyExpression));
    assert!(matches!(parse_error("\t\n"), ParseError::EmptyExpression));
}

#[test]
fn unmatched_parentheses() {
    assert!(matches!(parse_error("(1 + 2"), ParseError::UnmatchedParenthesis { .. }));
    assert!(matches!(parse_error("1 + 2)"), ParseError::UnmatchedParenthesis { .. }));
    assert!(matches!(parse_error("((1 + 2)"), ParseError::UnmatchedParenthesis { .. }));
}

#[test]
fn invalid_characters() {
    assert!(matches!(parse_error("1 ^ 2"),
                     ParseError::InvalidCharacter { character: '^', .. }));
    assert!(matches!(parse_error("2 % 3"),
                     ParseError::InvalidCharacter { character: '%', .. }));
    assert!(matches!(parse_error("a + 1"),
                     ParseError::InvalidCharacter { character: 'a', .. }));
}

#[test]
fn malformed_numbers() {
    assert!(matches!(parse_error("1.2.3"), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse_error("."), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse_error(".5"), ParseError::MalformedNumber { .. }));
    assert!(matches!(parse_error("1. + 2"), ParseError::MalformedNumber { .. }));
}

#[test]
fn unexpected_tokens() {
    assert!(matches!(parse_error("* 4"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("3 + +"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("1 +"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("1 2"), ParseError::UnexpectedToken { .. }));
    // A sign is only unary directly before a number, not before a group.
    assert!(matches!(parse_error("-(1 + 2)"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn division_by_zero() {
    for src in ["1 / 0", "1 / 0.0", "1 / (2 - 2)", "1 / -0"] {
        match evaluate(src) {
            Err(EvalError::Runtime(RuntimeError::DivisionByZero { .. })) => {},
            other => panic!("Expression '{src}' was expected to divide by zero, got {other:?}"),
        }
    }
}

#[test]
fn error_positions_point_at_the_input() {
    assert!(matches!(parse_error("12 & 3"),
                     ParseError::InvalidCharacter { position: 3, .. }));
    assert!(matches!(parse_error("1 + 1.2.3"),
                     ParseError::MalformedNumber { position: 4, .. }));
    match evaluate("8 / (3 - 3)") {
        Err(EvalError::Runtime(RuntimeError::DivisionByZero { position: 2 })) => {},
        other => panic!("Expected a division by zero at position 2, got {other:?}"),
    }
}
