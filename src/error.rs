/// Parsing errors.
///
/// Defines the errors raised before evaluation starts: unbalanced
/// parentheses and input that does not tokenize.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while the postfix sequence is
/// evaluated, such as stack underflow, division by zero or literals that do not
/// parse.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure of a single `evaluate` call.
///
/// Every variant is local to the line being evaluated. The context stays usable
/// afterwards.
pub enum EvaluationError {
    /// The line was rejected before conversion to postfix.
    Parse(ParseError),
    /// The postfix sequence could not be evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvaluationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvaluationError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
