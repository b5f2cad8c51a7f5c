use dashu::integer::IBig;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Operator},
    util::num::exponent_checked,
};

/// Applies an arithmetic operator to two resolved operands.
///
/// Division truncates toward zero. For `=` the result is the right operand,
/// which is the value being assigned; storing it is up to the caller.
///
/// # Errors
/// - `RuntimeError::DivisionByZero` if `/` gets a zero divisor.
/// - `RuntimeError::InvalidExponent` if `^` gets a negative exponent or one
///   outside the signed 32-bit range.
///
/// # Example
/// ```
/// use bigcalc::interpreter::{evaluator::binary::apply, lexer::Operator};
/// use dashu::integer::IBig;
///
/// let result = apply(Operator::Div, &IBig::from(-7), &IBig::from(2)).unwrap();
/// assert_eq!(result, IBig::from(-3));
///
/// let result = apply(Operator::Pow, &IBig::from(2), &IBig::from(10)).unwrap();
/// assert_eq!(result, IBig::from(1024));
/// ```
pub fn apply(op: Operator, lhs: &IBig, rhs: &IBig) -> EvalResult<IBig> {
    match op {
        Operator::Add => Ok(lhs + rhs),
        Operator::Sub => Ok(lhs - rhs),
        Operator::Mul => Ok(lhs * rhs),
        Operator::Div => {
            if *rhs == IBig::ZERO {
                return Err(RuntimeError::DivisionByZero);
            }
            Ok(lhs / rhs)
        },
        Operator::Pow => Ok(lhs.pow(exponent_checked(rhs)?)),
        Operator::Assign => Ok(rhs.clone()),
    }
}
