/// Arithmetic on resolved operands.
///
/// Implements `+ - * / ^` over arbitrary-precision integers, including the
/// division-by-zero and exponent range checks.
pub mod binary;

/// Core evaluation logic and context management.
///
/// Contains the session [`Context`](core::Context) that owns the variable
/// store and the trace configuration, and the `evaluate` entry point that
/// runs the whole pipeline for one line.
pub mod core;

/// Postfix evaluation.
///
/// Scans a postfix sequence left to right with a value stack, resolving
/// variables lazily and applying assignments.
pub mod postfix;
