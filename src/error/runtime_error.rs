#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while interpreting a token stream.
pub enum RuntimeError {
    /// Tried to pop a value from an empty stack.
    StackUnderflow,
    /// The divisor operand was exactly zero.
    DivideByZero,
    /// Tried to interpret a token before the stack was set up.
    UninitializedStack,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "Attempt to pop from an empty stack."),
            Self::DivideByZero => write!(f, "Attempt to divide by zero."),
            Self::UninitializedStack => {
                write!(f, "Attempt to work on an uninitialized stack.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
