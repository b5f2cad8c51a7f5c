/// Parenthesis validation.
///
/// Rejects lines whose `(` and `)` counts differ before any conversion work is
/// done.
pub mod balance;

/// Infix to postfix conversion.
///
/// Implements the precedence-driven shunting-yard algorithm over an explicit
/// operator stack and defines the [`Postfix`](shunting_yard::Postfix) sequence
/// handed to the evaluator.
pub mod shunting_yard;
