use std::iter::Peekable;

use logos::{Logos, SpannedIter};

use crate::error::ParseError;

/// Represents a lexical token in an expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    ///
    /// Integer-looking and floating literals both parse into a single `f64`
    /// representation. The second pattern greedily captures any run of digits
    /// and decimal points so that a malformed literal like `1.2.3` is
    /// rejected as a whole instead of splitting into two valid tokens.
    #[regex(r"[0-9]+", parse_number)]
    #[regex(r"[0-9]*\.[0-9.]*", parse_decimal)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Classifies why the lexer rejected a piece of input.
///
/// `InvalidCharacter` is the default produced by logos for anything outside
/// the token alphabet; `MalformedNumber` is raised by the numeric literal
/// callback for literals such as `1.2.3`, `1.` or `.5`.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character outside the supported alphabet.
    #[default]
    InvalidCharacter,
    /// A syntactically invalid numeric literal.
    MalformedNumber,
}

/// Parses an integer-looking literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
/// Parses a literal containing a decimal point from the current token slice.
///
/// The matched slice is any run of digits and decimal points with at least
/// one point in it, so validation happens here: exactly one point, with
/// digits on both sides.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed value if the literal is well formed.
/// - `Err(LexError::MalformedNumber)`: Otherwise.
fn parse_decimal(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    let slice = lex.slice();
    let Some((integral, fractional)) = slice.split_once('.') else {
        return Err(LexError::MalformedNumber);
    };
    if integral.is_empty() || fractional.is_empty() || fractional.contains('.') {
        return Err(LexError::MalformedNumber);
    }
    slice.parse().map_err(|_| LexError::MalformedNumber)
}

/// A lazy sequence of tokens over one expression string.
///
/// `Tokenizer` wraps the generated logos lexer and yields `(Token, position)`
/// pairs, where the position is the byte offset of the token in the input.
/// It adds one piece of context the raw lexer does not have: a `+` or `-`
/// that sits in operand position (at the start of the expression, after `(`,
/// or after another operator) and directly precedes a number is folded into
/// the sign of that `Number` token. A sign in operand position that is not
/// followed by a number passes through unchanged, for the evaluator to
/// reject.
///
/// Tokenization is purely functional over the input: constructing a new
/// `Tokenizer` over the same string yields the same sequence.
///
/// # Example
/// ```
/// use infixcalc::lexer::{Token, Tokenizer};
///
/// let tokens: Result<Vec<_>, _> = Tokenizer::new("3 * -2").collect();
/// assert_eq!(tokens.unwrap(),
///            vec![(Token::Number(3.0), 0),
///                 (Token::Star, 2),
///                 (Token::Number(-2.0), 4)]);
/// ```
pub struct Tokenizer<'src> {
    source: &'src str,
    tokens: Peekable<SpannedIter<'src, Token>>,
    expect_operand: bool,
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer over `source`, positioned at the start.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               tokens: Token::lexer(source).spanned().peekable(),
               expect_operand: true }
    }

    /// Converts a lexer-level rejection into a [`ParseError`] carrying the
    /// offending slice of the source.
    fn lex_error(&self, error: &LexError, span: logos::Span) -> ParseError {
        match error {
            LexError::InvalidCharacter => {
                let character = self.source[span.start..].chars().next().unwrap_or(' ');
                ParseError::InvalidCharacter { character,
                                               position: span.start }
            },
            LexError::MalformedNumber => {
                ParseError::MalformedNumber { literal:  self.source[span.clone()].to_string(),
                                              position: span.start, }
            },
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<(Token, usize), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (result, span) = self.tokens.next()?;
        let token = match result {
            Ok(token) => token,
            Err(error) => return Some(Err(self.lex_error(&error, span))),
        };

        // Unary sign folding. The peeked item is only consumed when it is a
        // well-formed number; a lexer error stays queued and surfaces on the
        // following call.
        if self.expect_operand
           && matches!(token, Token::Plus | Token::Minus)
           && let Some((Ok(Token::Number(value)), _)) = self.tokens.peek()
        {
            let value = if token == Token::Minus { -*value } else { *value };
            self.tokens.next();
            self.expect_operand = false;
            return Some(Ok((Token::Number(value), span.start)));
        }

        self.expect_operand = !matches!(token, Token::Number(_) | Token::RParen);
        Some(Ok((token, span.start)))
    }
}
