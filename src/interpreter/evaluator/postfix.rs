use std::collections::HashMap;

use dashu::integer::IBig;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{binary::apply, core::EvalResult},
        lexer::{Operator, Token},
        parser::shunting_yard::Postfix,
        store::{VariableStore, is_numeral},
        trace::{Detail, Tracer},
    },
    util::num::parse_decimal,
};

/// An entry of the value stack.
///
/// Names stay unresolved until an operator consumes them, so the left side of
/// `=` can still be read as a variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Operand {
    Literal(String),
    Name(String),
    Value(IBig),
}

impl Operand {
    /// Resolves the operand to a number.
    ///
    /// Every operand is first looked up by its text, since `=` may have stored
    /// a value under a literal such as `5`. Text that is not in the store is
    /// read as a literal, so an unknown name fails with `NumericParseFailure`.
    fn resolve(&self, store: &Staged<'_>) -> EvalResult<IBig> {
        match self {
            Self::Literal(text) | Self::Name(text) => match store.get(text) {
                Some(value) => Ok(value.clone()),
                None => parse_decimal(text),
            },
            Self::Value(value) if store.has_numeral_names() => {
                Ok(store.get(&value.to_string()).unwrap_or(value).clone())
            },
            Self::Value(value) => Ok(value.clone()),
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(text) | Self::Name(text) => write!(f, "{text}"),
            Self::Value(value) => write!(f, "{value}"),
        }
    }
}

/// The variable store as seen by one evaluation.
///
/// Assignments are kept aside and only written to the store once the whole
/// sequence evaluated successfully, so a failing line changes nothing.
struct Staged<'s> {
    store:    &'s VariableStore,
    writes:   HashMap<String, IBig>,
    numerals: bool,
}

impl Staged<'_> {
    fn get(&self, name: &str) -> Option<&IBig> {
        self.writes.get(name).or_else(|| self.store.get(name))
    }

    fn has_numeral_names(&self) -> bool {
        self.numerals || self.store.has_numeral_names()
    }

    fn set(&mut self, name: String, value: IBig) {
        self.numerals |= is_numeral(&name);
        self.writes.insert(name, value);
    }
}

/// Evaluates a postfix sequence against the store.
///
/// Returns `None` when any `=` ran during the scan, even if the assigned value
/// was used further on.
pub(crate) fn run(postfix: &Postfix,
                  variables: &mut VariableStore,
                  tracer: &mut Tracer<'_>)
                  -> EvalResult<Option<IBig>> {
    let mut store = Staged { store:    &*variables,
                             writes:   HashMap::new(),
                             numerals: false, };
    let result = scan(postfix, &mut store, tracer)?;

    let writes = store.writes;
    for (name, value) in writes {
        variables.set(name, value);
    }
    Ok(result)
}

fn scan(postfix: &Postfix, store: &mut Staged<'_>, tracer: &mut Tracer<'_>) -> EvalResult<Option<IBig>> {
    let mut stack: Vec<Operand> = Vec::with_capacity(postfix.len());
    let mut assigned = false;

    for token in postfix {
        match token {
            Token::Number(text) => {
                tracer.emit(Detail::Step, || format!("push number {text}"));
                stack.push(Operand::Literal(text.clone()));
            },
            Token::Identifier(name) => {
                tracer.emit(Detail::Step, || format!("push variable {name}"));
                stack.push(Operand::Name(name.clone()));
            },
            Token::Operator(op) => {
                let rhs = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                let lhs = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
                tracer.emit(Detail::Step, || format!("operator {op} takes {lhs} and {rhs}"));

                let result = if *op == Operator::Assign {
                    assigned = true;
                    assign(&lhs, &rhs, store)?
                } else {
                    apply(*op, &lhs.resolve(store)?, &rhs.resolve(store)?)?
                };

                tracer.emit(Detail::Step, || format!("push result {lhs} {op} {rhs} = {result}"));
                stack.push(Operand::Value(result));
            },
            // never emitted by the converter
            Token::LParen | Token::RParen => {},
        }
    }

    let last = stack.pop().ok_or(RuntimeError::StackUnderflow)?;
    if assigned {
        return Ok(None);
    }

    last.resolve(store).map(Some)
}

/// Stores the resolved right side under the left operand's text.
///
/// The left side is taken literally and never resolved: `5=3` stores `3`
/// under the name `5`.
fn assign(target: &Operand, value: &Operand, store: &mut Staged<'_>) -> EvalResult<IBig> {
    let value = value.resolve(store)?;
    store.set(target.to_string(), value.clone());
    Ok(value)
}
