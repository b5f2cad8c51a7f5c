/// The evaluator module runs postfix sequences and owns the session state.
///
/// # Responsibilities
/// - Evaluates postfix sequences with an explicit value stack.
/// - Resolves variables and applies assignments to the variable store.
/// - Reports runtime errors such as division by zero or missing operands.
pub mod evaluator;
/// The lexer module normalizes and tokenizes expression lines.
///
/// # Responsibilities
/// - Collapses repeated signs before tokenizing.
/// - Splits a line into numbers, identifiers, operators and parentheses.
/// - Drops or reports characters that belong to no token.
pub mod lexer;
/// The parser module turns tokens into postfix order.
///
/// Validates parenthesis balance and applies the shunting-yard algorithm.
/// There is no syntax tree; the postfix sequence is the only intermediate
/// form.
pub mod parser;
/// Operator precedence table.
pub mod precedence;
/// The variable store shared by all lines of a session.
pub mod store;
/// Optional trace output describing each conversion and evaluation step.
pub mod trace;
