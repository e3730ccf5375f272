#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while computing a result.
pub enum RuntimeError {
    /// A division operator's right-hand operand evaluated to exactly zero.
    DivisionByZero {
        /// Byte offset of the `/` operator in the input.
        position: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
