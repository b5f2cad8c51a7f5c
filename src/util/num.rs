use dashu::integer::IBig;

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Parses a decimal integer literal with an optional leading `-`.
///
/// Only ASCII digits are accepted; digit separators such as `_` are not.
///
/// ## Errors
/// Returns `RuntimeError::NumericParseFailure` carrying the input text if it is
/// not a decimal integer.
///
/// ## Example
/// ```
/// use bigcalc::{error::RuntimeError, util::num::parse_decimal};
/// use dashu::integer::IBig;
///
/// assert_eq!(parse_decimal("-42").unwrap(), IBig::from(-42));
///
/// let err = parse_decimal("x").unwrap_err();
/// assert_eq!(err, RuntimeError::NumericParseFailure { text: "x".to_string() });
/// assert!(parse_decimal("_0").is_err());
/// ```
pub fn parse_decimal(text: &str) -> EvalResult<IBig> {
    let failure = || RuntimeError::NumericParseFailure { text: text.to_string() };

    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(failure());
    }
    IBig::from_str_radix(text, 10).map_err(|_| failure())
}

/// Converts the exponent operand of `^` into a `usize` power.
///
/// The exponent has to fit a signed 32-bit integer and must not be negative.
///
/// ## Errors
/// Returns `RuntimeError::InvalidExponent` with the rejected value otherwise.
///
/// ## Example
/// ```
/// use bigcalc::{error::RuntimeError, util::num::exponent_checked};
/// use dashu::integer::IBig;
///
/// assert_eq!(exponent_checked(&IBig::from(10)).unwrap(), 10);
///
/// let err = exponent_checked(&IBig::from(-1)).unwrap_err();
/// assert_eq!(err, RuntimeError::InvalidExponent { value: IBig::from(-1) });
///
/// let too_big = IBig::from(i64::from(i32::MAX) + 1);
/// assert!(exponent_checked(&too_big).is_err());
/// ```
pub fn exponent_checked(value: &IBig) -> EvalResult<usize> {
    let invalid = || RuntimeError::InvalidExponent { value: value.clone() };

    let exponent = i32::try_from(value.clone()).map_err(|_| invalid())?;
    usize::try_from(exponent).map_err(|_| invalid())
}
