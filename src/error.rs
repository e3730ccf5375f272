/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of an
/// expression. Parse errors include invalid characters, malformed numeric
/// literals, unbalanced parentheses, unexpected tokens, and empty input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while computing a result.
/// For this calculator that is division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq)]
/// Represents any error raised while evaluating an expression.
///
/// This is the error type of the public [`evaluate`](crate::evaluate) entry
/// point. It unifies the two phases of the pipeline: everything detected while
/// reading tokens and checking the grammar is a [`ParseError`], and everything
/// detected while folding values is a [`RuntimeError`].
pub enum EvalError {
    /// The expression could not be lexed or parsed.
    Parse(ParseError),
    /// The expression parsed, but a value could not be computed.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
