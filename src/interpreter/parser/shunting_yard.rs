use crate::interpreter::{
    lexer::{Operator, Token},
    precedence::{DEFAULT_PRECEDENCE, precedence_of},
    trace::{Detail, Tracer},
};

/// An expression in postfix order.
///
/// Produced by [`to_postfix`]. It never contains parenthesis tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Postfix(Vec<Token>);

impl Postfix {
    /// The tokens in evaluation order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Postfix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
        }
        for token in tokens {
            write!(f, " {token}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Entries of the converter's operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Operator(Operator),
    LParen,
}

impl Pending {
    const fn precedence(self) -> u8 {
        match self {
            Self::Operator(op) => precedence_of(op),
            Self::LParen => DEFAULT_PRECEDENCE,
        }
    }
}

impl std::fmt::Display for Pending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operator(op) => write!(f, "{op}"),
            Self::LParen => write!(f, "("),
        }
    }
}

fn render_stack(stack: &[Pending]) -> String {
    let entries: Vec<String> = stack.iter().map(ToString::to_string).collect();
    format!("[{}]", entries.join(", "))
}

/// Converts infix tokens to postfix order.
///
/// The parentheses are assumed to be balanced already. Operators of equal
/// precedence group to the left, `^` included, so `2^3^2` becomes `2 3 ^ 2 ^`.
///
/// # Example
/// ```
/// use bigcalc::interpreter::{lexer::tokenize, parser::shunting_yard::to_postfix};
///
/// let tokens = tokenize("(1+2)*3", false).unwrap();
/// assert_eq!(to_postfix(&tokens).to_string(), "1 2 + 3 *");
///
/// let tokens = tokenize("2^3^2", false).unwrap();
/// assert_eq!(to_postfix(&tokens).to_string(), "2 3 ^ 2 ^");
/// ```
#[must_use]
pub fn to_postfix(tokens: &[Token]) -> Postfix {
    convert(tokens, &mut Tracer::silent())
}

pub(crate) fn convert(tokens: &[Token], tracer: &mut Tracer<'_>) -> Postfix {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) => {
                tracer.emit(Detail::Step, || format!("operand {token} goes to the output"));
                output.push(token.clone());
            },
            Token::LParen => {
                tracer.emit(Detail::Step, || "( is pushed".to_string());
                stack.push(Pending::LParen);
            },
            Token::RParen => {
                tracer.emit(Detail::Step, || {
                          ") pops operators to the output until the matching (".to_string()
                      });
                while let Some(entry) = stack.pop() {
                    match entry {
                        Pending::LParen => break,
                        Pending::Operator(op) => output.push(Token::Operator(op)),
                    }
                }
            },
            Token::Operator(op) => push_operator(*op, &mut stack, &mut output, tracer),
        }

        tracer.emit(Detail::Step, || {
                  format!("stack: {}, output: {}",
                          render_stack(&stack),
                          Postfix(output.clone()))
              });
    }

    while let Some(entry) = stack.pop() {
        if let Pending::Operator(op) = entry {
            output.push(Token::Operator(op));
        }
    }

    Postfix(output)
}

fn push_operator(op: Operator,
                 stack: &mut Vec<Pending>,
                 output: &mut Vec<Token>,
                 tracer: &mut Tracer<'_>) {
    let top = match stack.last() {
        None | Some(Pending::LParen) => {
            tracer.emit(Detail::Step, || format!("{op} is pushed onto an empty stack or a ("));
            stack.push(Pending::Operator(op));
            return;
        },
        Some(top) => *top,
    };

    let top_precedence = top.precedence();
    if precedence_of(op) > top_precedence {
        tracer.emit(Detail::Step, || format!("{op} binds tighter than {top} and is pushed"));
        stack.push(Pending::Operator(op));
        return;
    }

    tracer.emit(Detail::Step, || {
              format!("{op} binds no tighter than {top}: popping operators to the output")
          });
    while let Some(entry) = stack.pop() {
        let Pending::Operator(popped) = entry else {
            break;
        };
        tracer.emit(Detail::Step, || format!("  {popped} goes to the output"));
        output.push(Token::Operator(popped));
        if precedence_of(popped) < top_precedence {
            break;
        }
    }
    stack.push(Pending::Operator(op));
}
