use logos::Logos;

use crate::error::ParseError;

/// Result type used by the lexer and the converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// The binary operators understood by the engine, `=` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `=`
    Assign,
}

impl Operator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
            Self::Assign => '=',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a lexical token of an expression line.
///
/// Numbers keep their source digits; they are only parsed into integers when an
/// operator consumes them.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Unsigned digit runs such as `42`. A leading `-` is only part of the
    /// number at the very start of a line, see [`tokenize`].
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Variable names such as `x` or `total_2`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// One of `^ * - + / =`.
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    #[token("^", |_| Operator::Pow)]
    #[token("=", |_| Operator::Assign)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) => write!(f, "{text}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}

/// Homogenizes the signs of an expression line.
///
/// Runs of `+` collapse into a single `+`, then every non-overlapping `--`,
/// scanned left to right, becomes `+`. Each rule is applied exactly once, so
/// `---` turns into `+-` and is not reduced any further.
///
/// # Example
/// ```
/// use bigcalc::interpreter::lexer::normalize;
///
/// assert_eq!(normalize("5+++3"), "5+3");
/// assert_eq!(normalize("5--3"), "5+3");
/// assert_eq!(normalize("5---3"), "5+-3");
/// ```
#[must_use]
pub fn normalize(expression: &str) -> String {
    let mut collapsed = String::with_capacity(expression.len());
    for c in expression.chars() {
        if c == '+' && collapsed.ends_with('+') {
            continue;
        }
        collapsed.push(c);
    }

    collapsed.replace("--", "+")
}

/// Splits a normalized line into tokens.
///
/// A `-` at byte 0 that is directly followed by a digit becomes part of the
/// first number. Characters that belong to no token are dropped, unless
/// `strict` is set, in which case the first of them is reported.
///
/// # Errors
/// - `ParseError::InvalidToken` for a stray character in strict mode.
/// - `ParseError::InvalidToken` carrying the whole line if no token remains.
///
/// # Example
/// ```
/// use bigcalc::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("-5+x", false).unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number("-5".to_string()),
///                 Token::Operator(Operator::Add),
///                 Token::Identifier("x".to_string())]);
/// ```
pub fn tokenize(expression: &str, strict: bool) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = expression;

    if let Some(unsigned) = expression.strip_prefix('-') {
        let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 {
            tokens.push(Token::Number(format!("-{}", &unsigned[..digits])));
            rest = &unsigned[digits..];
        }
    }

    let mut lexer = Token::lexer(rest);
    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) if strict => {
                return Err(ParseError::InvalidToken { text: lexer.slice().to_string() });
            },
            Err(()) => {},
        }
    }

    if tokens.is_empty() {
        return Err(ParseError::InvalidToken { text: expression.to_string() });
    }

    Ok(tokens)
}
