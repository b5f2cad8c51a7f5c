use dashu::integer::IBig;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum RuntimeError {
    /// An operator found fewer than two operands, or no value was left at the
    /// end of the scan.
    StackUnderflow,
    /// Operand text is neither a known variable nor a decimal literal.
    ///
    /// An unknown variable used as an operand ends up here because names that
    /// are not in the store fall through to literal parsing.
    NumericParseFailure {
        /// The text that failed to parse.
        text: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The exponent of `^` is negative or does not fit a signed 32-bit integer.
    InvalidExponent {
        /// The rejected exponent.
        value: IBig,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "Malformed expression: missing operand."),
            Self::NumericParseFailure { text } => {
                write!(f, "Cannot read '{text}' as a number or known variable.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::InvalidExponent { value } => write!(f,
                                                      "Invalid exponent {value}: must lie between 0 and {}.",
                                                      i32::MAX),
        }
    }
}

impl std::error::Error for RuntimeError {}
