use std::{cell::RefCell, rc::Rc};

/// Receives human-readable descriptions of what the engine is doing.
///
/// Install one with [`Context::with_sink`](crate::interpreter::evaluator::core::Context::with_sink).
/// Traces never influence results.
pub trait TraceSink {
    /// Handles one trace line.
    fn emit(&mut self, message: &str);
}

impl<F: FnMut(&str)> TraceSink for F {
    fn emit(&mut self, message: &str) {
        self(message);
    }
}

/// A cloneable in-memory sink.
///
/// Clones share the same buffer, so one clone can be handed to a
/// [`Context`](crate::interpreter::evaluator::core::Context) while another is
/// used to read the collected lines.
///
/// # Example
/// ```
/// use bigcalc::interpreter::{evaluator::core::Context, trace::TraceLog};
///
/// let log = TraceLog::default();
/// let mut context = Context::new().with_verbosity(1).with_sink(log.clone());
///
/// context.evaluate("1+2").unwrap();
/// assert!(log.lines().iter().any(|line| line.contains("1 2 +")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceLog(Rc<RefCell<Vec<String>>>);

impl TraceLog {
    /// Returns a copy of everything emitted so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl TraceSink for TraceLog {
    fn emit(&mut self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

/// How much detail a trace message carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Detail {
    /// One message per phase: normalized line, postfix sequence, result.
    Phase = 1,
    /// Every converter rule and every value-stack operation.
    Step = 2,
}

/// Verbosity-gated front end of an optional sink.
pub(crate) struct Tracer<'a> {
    sink:      Option<&'a mut dyn TraceSink>,
    verbosity: u8,
}

impl<'a> Tracer<'a> {
    pub(crate) fn new(sink: Option<&'a mut dyn TraceSink>, verbosity: u8) -> Self {
        Self { sink, verbosity }
    }

    /// A tracer that drops everything.
    pub(crate) fn silent() -> Self {
        Self { sink: None, verbosity: 0 }
    }

    /// Emits the message built by `message` if `detail` is enabled.
    pub(crate) fn emit(&mut self, detail: Detail, message: impl FnOnce() -> String) {
        if self.verbosity < detail as u8 {
            return;
        }
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.emit(&message());
        }
    }
}
