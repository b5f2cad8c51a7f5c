use std::fs;

use bigcalc::{
    error::{EvaluationError, ParseError, RuntimeError},
    evaluate,
    interpreter::{evaluator::core::Context, lexer::Token},
};
use dashu::integer::IBig;
use walkdir::WalkDir;

#[test]
fn session_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "session"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let mut context = Context::new();
        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let (input, expected) =
                line.rsplit_once(" => ")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing ' => '", number + 1));
            count += 1;

            let outcome = context.evaluate(input);
            let matches = match (expected.trim(), &outcome) {
                ("none", Ok(None)) | ("error", Err(_)) => true,
                (value, Ok(Some(result))) => result.to_string() == value,
                _ => false,
            };
            assert!(matches,
                    "{path:?}:{}: '{input}' expected {expected}, got {outcome:?}",
                    number + 1);
        }
    }

    assert!(count > 0, "No session lines found in tests/sessions");
}

fn value_of(src: &str) -> IBig {
    match evaluate(src) {
        Ok(Some(value)) => value,
        other => panic!("'{src}' did not produce a value: {other:?}"),
    }
}

fn assert_value(src: &str, expected: i64) {
    assert_eq!(value_of(src), IBig::from(expected), "evaluating '{src}'");
}

fn runtime_error(context: &mut Context, src: &str) -> RuntimeError {
    match context.evaluate(src) {
        Err(EvaluationError::Runtime(e)) => e,
        other => panic!("'{src}' was expected to fail at runtime, got {other:?}"),
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_value("3+4*2", 11);
    assert_value("(1+2)*3", 9);
    assert_value("2*(3+4)", 14);
    assert_value("((2))", 2);
    assert_value("2 * 3 ^ 2", 18);
}

#[test]
fn equal_precedence_groups_left() {
    assert_value("2^3^2", 64);
    assert_value("8-3-2", 3);
    assert_value("100/10/5", 2);
    assert_value("2*6/4", 3);
}

#[test]
fn pop_loop_stops_below_the_starting_precedence() {
    let context = Context::new();
    assert_eq!(context.postfix("1-2*3^2+1").unwrap().to_string(),
               "1 2 3 2 ^ * 1 + -");
    assert_value("1-2*3^2+1", -18);

    assert_eq!(context.postfix("2-(3*4+5)*6").unwrap().to_string(),
               "2 3 4 * 5 + - 6 *");
    assert_value("2-(3*4+5)*6", -90);
}

#[test]
fn postfix_never_contains_parentheses() {
    let context = Context::new();
    let postfix = context.postfix("((1+2)*(3+4))-(5)").unwrap();
    assert_eq!(postfix.to_string(), "1 2 + 3 4 + * 5 -");
    assert!(postfix.tokens().iter().all(|t| !matches!(t, Token::LParen | Token::RParen)));
}

#[test]
fn assignment_is_silent_and_persists() {
    let mut context = Context::new();
    assert_eq!(context.evaluate("x=5").unwrap(), None);
    assert_eq!(context.evaluate("x+1").unwrap(), Some(IBig::from(6)));
    assert_eq!(context.evaluate("x = x * 2").unwrap(), None);
    assert_eq!(context.evaluate("x").unwrap(), Some(IBig::from(10)));
    assert_eq!(context.evaluate("x = 1").unwrap(), None);
    assert_eq!(context.variables().get("x"), Some(&IBig::from(1)));
    assert_eq!(context.variables().len(), 1);
}

#[test]
fn assignment_used_downstream_still_prints_nothing() {
    let mut context = Context::new();
    assert_eq!(context.evaluate("(a = 2) * 3").unwrap(), None);
    assert_eq!(context.evaluate("a").unwrap(), Some(IBig::from(2)));
}

#[test]
fn unbalanced_parentheses_are_rejected() {
    assert_eq!(evaluate("(1+2"),
               Err(EvaluationError::Parse(ParseError::ParenthesisMismatch { open: 1, close: 0 })));
    assert_eq!(evaluate("1+2))"),
               Err(EvaluationError::Parse(ParseError::ParenthesisMismatch { open: 0, close: 2 })));
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7/2", 3);
    assert_value("-7/2", -3);
    assert_value("0-7/2", -3);
    assert_value("0/5", 0);

    let mut context = Context::new();
    assert_eq!(runtime_error(&mut context, "5/0"), RuntimeError::DivisionByZero);
}

#[test]
fn sign_runs_are_normalized_once() {
    assert_value("5++3", 8);
    assert_value("5--3", 8);
    assert_value("5+++++3", 8);
    assert_value("-5--3", -2);

    // `---` only becomes `+-`, leaving an operator without operands.
    let mut context = Context::new();
    assert_eq!(runtime_error(&mut context, "5---3"), RuntimeError::StackUnderflow);
}

#[test]
fn leading_sign_only_at_the_very_start() {
    assert_value("-2^2", 4);
    assert_value("-10+3", -7);

    let mut context = Context::new();
    assert_eq!(runtime_error(&mut context, " -5"), RuntimeError::StackUnderflow);
}

#[test]
fn arbitrary_precision() {
    assert_eq!(value_of("2^100").to_string(), "1267650600228229401496703205376");
    assert_eq!(value_of("99999999999999999999*99999999999999999999").to_string(),
               "9999999999999999999800000000000000000001");
    assert_eq!(value_of("2^128 - 2^128 + 1"), IBig::from(1));
}

#[test]
fn pure_expressions_are_idempotent() {
    let mut context = Context::new();
    let first = context.evaluate("2^64 + 3*7").unwrap();
    let second = context.evaluate("2^64 + 3*7").unwrap();
    assert_eq!(first, second);
    assert!(context.variables().is_empty());
}

#[test]
fn unknown_variable_is_a_parse_failure() {
    let mut context = Context::new();
    assert_eq!(runtime_error(&mut context, "y + 1"),
               RuntimeError::NumericParseFailure { text: "y".to_string() });
    assert_eq!(runtime_error(&mut context, "foo"),
               RuntimeError::NumericParseFailure { text: "foo".to_string() });
}

#[test]
fn exponent_must_be_a_non_negative_i32() {
    let mut context = Context::new();
    context.evaluate("n = 0 - 1").unwrap();
    assert_eq!(runtime_error(&mut context, "2^n"),
               RuntimeError::InvalidExponent { value: IBig::from(-1) });
    assert_eq!(runtime_error(&mut context, "2^3000000000"),
               RuntimeError::InvalidExponent { value: IBig::from(3_000_000_000_i64) });
    assert_eq!(context.evaluate("5^0").unwrap(), Some(IBig::from(1)));
}

#[test]
fn missing_operands_underflow() {
    let mut context = Context::new();
    assert_eq!(runtime_error(&mut context, "1+"), RuntimeError::StackUnderflow);
    assert_eq!(runtime_error(&mut context, "*"), RuntimeError::StackUnderflow);
    assert_eq!(runtime_error(&mut context, "=5"), RuntimeError::StackUnderflow);
}

#[test]
fn assignment_target_is_taken_literally() {
    let mut context = Context::new();
    assert_eq!(context.evaluate("5=3").unwrap(), None);
    assert_eq!(context.variables().get("5"), Some(&IBig::from(3)));
    assert_eq!(context.evaluate("5+0").unwrap(), Some(IBig::from(3)));

    assert_eq!(context.evaluate("(1+2)=4").unwrap(), None);
    assert_eq!(context.variables().get("3"), Some(&IBig::from(4)));
    assert_eq!(context.evaluate("2+1").unwrap(), Some(IBig::from(4)));
}

#[test]
fn trailing_operand_becomes_the_assigned_value() {
    let mut context = Context::new();
    assert_eq!(context.postfix("a=5 7").unwrap().to_string(), "a 5 7 =");
    assert_eq!(context.evaluate("a=5 7").unwrap(), None);
    assert_eq!(context.variables().get("5"), Some(&IBig::from(7)));
    assert_eq!(context.variables().get("a"), None);
}

#[test]
fn underscores_are_never_digits() {
    let mut context = Context::new();
    assert_eq!(runtime_error(&mut context, "_"),
               RuntimeError::NumericParseFailure { text: "_".to_string() });
    assert_eq!(runtime_error(&mut context, "_0 + 1"),
               RuntimeError::NumericParseFailure { text: "_0".to_string() });
    // splits into `1` and `_000`, the latter ends up on top
    assert_eq!(runtime_error(&mut context, "1_000"),
               RuntimeError::NumericParseFailure { text: "_000".to_string() });

    context.evaluate("_0 = 7").unwrap();
    assert_eq!(context.evaluate("_0 + 1").unwrap(), Some(IBig::from(8)));
}

#[test]
fn reversed_parentheses_still_count_as_balanced() {
    assert_value(")1(", 1);
}

#[test]
fn failing_lines_leave_variables_untouched() {
    let mut context = Context::new();
    context.evaluate("x = 1").unwrap();

    assert!(context.evaluate("y = z").is_err());
    assert_eq!(context.variables().get("y"), None);

    assert_eq!(runtime_error(&mut context, "(x = 5) / 0"), RuntimeError::DivisionByZero);
    assert_eq!(context.evaluate("x").unwrap(), Some(IBig::from(1)));
}

#[test]
fn stray_characters_are_dropped_unless_strict() {
    assert_value("1 $ + 2", 3);
    assert_value("7 &", 7);

    let mut strict = Context::new().with_strict(true);
    assert_eq!(strict.evaluate("1 $ + 2"),
               Err(EvaluationError::Parse(ParseError::InvalidToken { text: "$".to_string() })));
    assert_eq!(strict.evaluate("1 + 2").unwrap(), Some(IBig::from(3)));
}

#[test]
fn lines_without_tokens_are_invalid() {
    assert_eq!(evaluate("   "),
               Err(EvaluationError::Parse(ParseError::InvalidToken { text: "   ".to_string() })));
    assert_eq!(evaluate("?!"),
               Err(EvaluationError::Parse(ParseError::InvalidToken { text: "?!".to_string() })));
}
