use dashu::integer::IBig;

use crate::{
    error::{EvaluationError, RuntimeError},
    interpreter::{
        evaluator::postfix,
        lexer::{ParseResult, normalize, tokenize},
        parser::{
            balance::check_parentheses,
            shunting_yard::{Postfix, convert},
        },
        store::VariableStore,
        trace::{Detail, TraceSink, Tracer},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the state of an evaluation session.
///
/// ## Usage
///
/// `Context` is created once and reused for every line of a session. The
/// variables assigned by one [`evaluate`](Self::evaluate) call are visible to
/// all later calls.
///
/// ```
/// use bigcalc::interpreter::evaluator::core::Context;
/// use dashu::integer::IBig;
///
/// let mut context = Context::new();
/// assert_eq!(context.evaluate("x = 5").unwrap(), None);
/// assert_eq!(context.evaluate("x + 1").unwrap(), Some(IBig::from(6)));
/// ```
pub struct Context {
    store:         VariableStore,
    sink:          Option<Box<dyn TraceSink>>,
    /// Trace verbosity: 0 is silent, 1 traces each phase, 2 every step.
    pub verbosity: u8,
    /// Reject characters that belong to no token instead of dropping them.
    pub strict:    bool,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with no variables, no trace sink and lenient
    /// tokenizing.
    #[must_use]
    pub fn new() -> Self {
        Self { store:     VariableStore::new(),
               sink:      None,
               verbosity: 0,
               strict:    false, }
    }

    /// Sets the trace verbosity.
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Enables or disables strict tokenizing.
    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Installs the sink that receives trace messages.
    #[must_use]
    pub fn with_sink(mut self, sink: impl TraceSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.store
    }

    /// Evaluates one expression line.
    ///
    /// The line is normalized, checked for balanced parentheses, tokenized,
    /// converted to postfix and evaluated. A line that assigns produces
    /// `Ok(None)`.
    ///
    /// # Errors
    /// Returns an `EvaluationError` describing the first failure. Variables
    /// assigned by earlier lines are not affected, and an assignment whose
    /// right side fails to resolve stores nothing.
    pub fn evaluate(&mut self, line: &str) -> Result<Option<IBig>, EvaluationError> {
        let mut tracer = Tracer::new(self.sink.as_mut().map(|sink| &mut **sink as &mut dyn TraceSink),
                                     self.verbosity);

        let expression = normalize(line);
        tracer.emit(Detail::Phase, || format!("normalized expression: {expression}"));

        check_parentheses(&expression)?;
        let tokens = tokenize(&expression, self.strict)?;
        let postfix = convert(&tokens, &mut tracer);
        tracer.emit(Detail::Phase, || format!("postfix: {postfix}"));

        let result = postfix::run(&postfix, &mut self.store, &mut tracer)?;
        tracer.emit(Detail::Phase, || match &result {
                  Some(value) => format!("result: {value}"),
                  None => "result: assignment, nothing to print".to_string(),
              });

        Ok(result)
    }

    /// Converts a line to postfix without evaluating it.
    ///
    /// # Errors
    /// Returns the `ParseError` that [`evaluate`](Self::evaluate) would report
    /// for the line.
    ///
    /// # Example
    /// ```
    /// use bigcalc::interpreter::evaluator::core::Context;
    ///
    /// let context = Context::new();
    /// assert_eq!(context.postfix("x = 3 + 4 * 2").unwrap().to_string(), "x 3 4 2 * + =");
    /// ```
    pub fn postfix(&self, line: &str) -> ParseResult<Postfix> {
        let expression = normalize(line);
        check_parentheses(&expression)?;
        let tokens = tokenize(&expression, self.strict)?;
        Ok(convert(&tokens, &mut Tracer::silent()))
    }
}
