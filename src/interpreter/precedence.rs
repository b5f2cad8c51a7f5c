use crate::interpreter::lexer::Operator;

/// Binding strength of anything that is not listed in the table, `(` and `=`
/// included. It keeps `(` below every operator on the converter stack.
pub const DEFAULT_PRECEDENCE: u8 = 0;

/// Returns the precedence of an operator.
///
/// | operator | precedence |
/// |----------|------------|
/// | `+` `-`  | 2          |
/// | `*` `/`  | 3          |
/// | `^`      | 4          |
/// | `=`      | 0          |
///
/// # Example
/// ```
/// use bigcalc::interpreter::{lexer::Operator, precedence::precedence_of};
///
/// assert!(precedence_of(Operator::Pow) > precedence_of(Operator::Mul));
/// assert_eq!(precedence_of(Operator::Add), precedence_of(Operator::Sub));
/// ```
#[must_use]
pub const fn precedence_of(op: Operator) -> u8 {
    match op {
        Operator::Add | Operator::Sub => 2,
        Operator::Mul | Operator::Div => 3,
        Operator::Pow => 4,
        Operator::Assign => DEFAULT_PRECEDENCE,
    }
}
