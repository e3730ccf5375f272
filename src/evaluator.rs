use std::iter::Peekable;

use crate::{
    error::{EvalError, ParseError, RuntimeError},
    lexer::Token,
};

pub type EvalResult<T> = Result<T, EvalError>;

/// The binary operators of the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

/// Evaluates a full expression.
///
/// This is the entry point for expression evaluation.
/// It begins at the lowest-precedence level, addition and subtraction, and
/// recursively descends through the precedence hierarchy, folding each
/// operator into a value as soon as both operands are known.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
///
/// # Returns
/// The computed value of the expression.
pub fn eval_expression<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    eval_additive(tokens)
}

/// Evaluates addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
/// Folding the running value from the left enforces left-to-right
/// associativity, so `10 - 2 - 3` is `(10 - 2) - 3`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// The folded value of the additive chain.
fn eval_additive<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = eval_multiplicative(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            let right = eval_multiplicative(tokens)?;
            left = apply(op, left, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Evaluates multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, which bind tighter than
/// `+` and `-`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
///
/// # Returns
/// The folded value of the multiplicative chain.
fn eval_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = eval_primary(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let position = *position;
            tokens.next();
            let right = eval_primary(tokens)?;
            left = apply(op, left, right, position)?;
            continue;
        }
        break;
    }
    Ok(left)
}

/// Evaluates a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals (with any unary sign already folded in by the lexer)
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The value of the primary expression.
///
/// # Errors
/// - `UnmatchedParenthesis` if an opened group is never closed.
/// - `UnexpectedToken` if an operand is expected but an operator, a closing
///   parenthesis, or the end of input appears instead.
fn eval_primary<'a, I>(tokens: &mut Peekable<I>) -> EvalResult<f64>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(value), _)) => Ok(*value),

        Some((Token::LParen, position)) => {
            let value = eval_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(value),
                _ => Err(ParseError::UnmatchedParenthesis { position: *position }.into()),
            }
        },

        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token:    format!("{token:?}"),
                                              position: *position, }.into())
        },

        None => {
            Err(ParseError::UnexpectedToken { token:    "end of input".to_string(),
                                              position: 0, }.into())
        },
    }
}

/// Applies a binary operator to two already-computed operands.
///
/// Division follows IEEE 754 `f64` semantics (round-to-nearest-even), except
/// that a right operand comparing equal to zero is rejected before dividing;
/// the result is never infinity.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<f64>` containing the computed value.
fn apply(op: BinaryOperator, left: f64, right: f64, position: usize) -> EvalResult<f64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    Ok(match op {
           Add => left + right,
           Sub => left - right,
           Mul => left * right,
           Div => {
               if right == 0.0 {
                   return Err(RuntimeError::DivisionByZero { position }.into());
               }
               left / right
           },
       })
}

/// Maps a token to its corresponding binary operator.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use infixcalc::{
///     evaluator::{BinaryOperator, token_to_binary_operator},
///     lexer::Token,
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
