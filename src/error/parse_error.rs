#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or conversion.
pub enum ParseError {
    /// The numbers of `(` and `)` in the line differ.
    ParenthesisMismatch {
        /// Number of opening parentheses.
        open:  usize,
        /// Number of closing parentheses.
        close: usize,
    },
    /// Text that could not be turned into a token.
    ///
    /// Raised for stray characters in strict mode, and for lines that contain
    /// no token at all.
    InvalidToken {
        /// The offending text.
        text: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParenthesisMismatch { open, close } => {
                write!(f, "Parenthesis mismatch: {open} opening but {close} closing.")
            },
            Self::InvalidToken { text } => write!(f, "Invalid token: '{text}'."),
        }
    }
}

impl std::error::Error for ParseError {}
