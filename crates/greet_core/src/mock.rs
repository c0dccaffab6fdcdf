use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use greet_base::tracing::trace;
use greet_base::{GreetError, GreetResult};

use crate::greeter::Greeter;

#[derive(Debug, Clone)]
enum Outcome {
    Greet(String),
    Fail(String),
}

/// Greeter with a scripted outcome, for tests.
///
/// Clones share the call counter.
///
/// # Examples
///
/// ```
/// use greet_core::{Greeter, MockGreeter};
///
/// let mock = MockGreeter::failing("greeting unavailable");
/// let err = mock.greet().unwrap_err();
/// assert_eq!(err.to_string(), "greeting unavailable");
/// assert_eq!(mock.call_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockGreeter {
    outcome: Outcome,
    calls: Arc<AtomicUsize>,
}

impl MockGreeter {
    /// Greeter that returns `greeting` on every call.
    pub fn succeeding(greeting: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Greet(greeting.into()))
    }

    /// Greeter that fails with a `Greeting` error carrying `description` on every call.
    pub fn failing(description: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Fail(description.into()))
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Greeter for MockGreeter {
    fn greet(&self) -> GreetResult<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        trace!(call, "mock greeter called");
        match &self.outcome {
            Outcome::Greet(greeting) => Ok(greeting.clone()),
            Outcome::Fail(description) => Err(Box::new(GreetError::greeting(description.clone()))),
        }
    }
}
