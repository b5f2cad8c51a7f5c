use crate::{error::ParseError, interpreter::lexer::ParseResult};

/// Checks that a line has as many `(` as `)`.
///
/// Only the counts are compared; the order of the parentheses is not checked
/// here.
///
/// # Errors
/// Returns `ParseError::ParenthesisMismatch` with both counts if they differ.
///
/// # Example
/// ```
/// use bigcalc::{error::ParseError, interpreter::parser::balance::check_parentheses};
///
/// assert!(check_parentheses("(1+2)*3").is_ok());
/// assert_eq!(check_parentheses("((1+2)"),
///            Err(ParseError::ParenthesisMismatch { open: 2, close: 1 }));
/// ```
pub fn check_parentheses(expression: &str) -> ParseResult<()> {
    let (open, close) = expression.chars().fold((0, 0), |(open, close), c| match c {
                                                  '(' => (open + 1, close),
                                                  ')' => (open, close + 1),
                                                  _ => (open, close),
                                              });

    if open == close {
        Ok(())
    } else {
        Err(ParseError::ParenthesisMismatch { open, close })
    }
}
