/// Numeric conversion helpers.
///
/// Parsing of decimal operand text into arbitrary-precision integers, and the
/// checked narrowing of an exponent into a machine-sized power. Both report
/// failures as `RuntimeError` values instead of panicking.
pub mod num;
