#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while lexing or parsing an expression.
pub enum ParseError {
    /// The input contains a character outside the supported alphabet.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A numeric literal is syntactically invalid, such as `1.2.3` or `.`.
    MalformedNumber {
        /// The malformed literal as written.
        literal:  String,
        /// Byte offset of the literal in the input.
        position: usize,
    },
    /// Parenthesis nesting is unbalanced.
    UnmatchedParenthesis {
        /// Byte offset of the unmatched parenthesis, or of the end of input
        /// when an open group is never closed.
        position: usize,
    },
    /// Found a token where the grammar forbids it.
    UnexpectedToken {
        /// A description of the token encountered.
        token:    String,
        /// Byte offset of the token in the input.
        position: usize,
    },
    /// The input is empty or contains only whitespace.
    EmptyExpression,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character, position } => {
                write!(f, "Error at position {position}: Invalid character: '{character}'.")
            },

            Self::MalformedNumber { literal, position } => {
                write!(f, "Error at position {position}: Malformed number: '{literal}'.")
            },

            Self::UnmatchedParenthesis { position } => {
                write!(f, "Error at position {position}: Unmatched parenthesis.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::EmptyExpression => write!(f, "Error: Expression is empty."),
        }
    }
}

impl std::error::Error for ParseError {}
