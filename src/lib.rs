//! # infixcalc
//!
//! infixcalc is an infix expression calculator written in Rust.
//! It tokenizes and evaluates arithmetic expressions with support for
//! addition, subtraction, multiplication, division, unary signs,
//! parenthetical grouping, and both integer and floating-point operands.

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
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{EvalError, ParseError},
    evaluator::eval_expression,
    lexer::{Token, Tokenizer},
};

/// Provides unified error types for tokenization and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or computing an expression. It standardizes error reporting and carries
/// detailed information about failures, including error kinds, the offending
/// input slice, and byte positions for user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Attaches byte positions and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Consumes tokens and computes the numeric result.
///
/// This module folds a token sequence into a single `f64` by recursive
/// descent over precedence levels: multiplication and division bind tighter
/// than addition and subtraction, and operators of equal precedence
/// associate left-to-right. Parenthesized groups are evaluated recursively
/// as independent terms.
///
/// # Responsibilities
/// - Enforces operator precedence and left-to-right associativity.
/// - Evaluates parenthesis nesting and reports unbalanced groups.
/// - Rejects division by an operand equal to zero.
pub mod evaluator;
/// Scans an expression string into tokens.
///
/// This module declares the `Token` enum and the `Tokenizer`, a lazy
/// iterator over the tokens of one expression. Whitespace is skipped,
/// numeric literals are validated, and unary signs in operand position are
/// folded into the following number.
///
/// # Responsibilities
/// - Recognizes numbers, the four arithmetic operators, and parentheses.
/// - Rejects characters outside the alphabet and malformed literals.
/// - Attaches byte positions to every token for error reporting.
pub mod lexer;

/// Evaluates a mathematical infix expression and returns its value.
///
/// The expression is tokenized and folded into a single `f64` in one pass.
/// Evaluation is deterministic and stateless: nothing is retained across
/// calls, so any number of calls may run concurrently with no coordination.
///
/// # Errors
/// Returns an [`EvalError`] naming the first problem found: an invalid
/// character, a malformed numeric literal, unbalanced parentheses, a token
/// where the grammar forbids one, an empty expression, or a division whose
/// right-hand operand is zero.
///
/// # Examples
/// ```
/// use infixcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
/// assert_eq!(evaluate("3 * -2").unwrap(), -6.0);
///
/// // Division by zero is an error, never infinity.
/// assert!(evaluate("1 / 0").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    let mut tokens = Vec::new();
    for item in Tokenizer::new(expression) {
        tokens.push(item?);
    }

    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }

    let mut iter = tokens.iter().peekable();
    let value = eval_expression(&mut iter)?;

    if let Some((token, position)) = iter.next() {
        return Err(match token {
                       Token::RParen => {
                           ParseError::UnmatchedParenthesis { position: *position }
                       },
                       _ => {
                           ParseError::UnexpectedToken { token:    format!("{token:?}"),
                                                         position: *position, }
                       },
                   }.into());
    }

    Ok(value)
}
