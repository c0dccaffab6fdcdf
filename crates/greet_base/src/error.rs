use std::error::Error as StdError;
use std::fmt;
use std::io;

use tracing_error::{SpanTrace, SpanTraceStatus};

/* 📖 # Why a custom error type and not anyhow/eyre/thiserror?

The entry point needs exactly one thing from an error: its description.
A small hand-written type keeps that description under our control and
still carries context, causes and span traces for diagnostics.
 */

/// Error variants that can occur while producing or printing a greeting.
#[derive(Debug)]
pub enum ErrorKind {
    /// The greeter could not produce a greeting
    Greeting { description: String },

    /// Writing the result to the output failed
    Output { source: io::Error },

    /// Catch-all for other errors with a message
    Message { message: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Greeting { description } => write!(f, "{}", description),
            ErrorKind::Output { source } => write!(f, "Output error: {}", source),
            ErrorKind::Message { message } => write!(f, "{}", message),
        }
    }
}

/// Error wrapping an [`ErrorKind`] with context, an optional cause and the
/// span trace active when it was created.
pub struct GreetError {
    kind: ErrorKind,
    context: Vec<String>,
    cause: Option<Box<GreetError>>,
    span_trace: SpanTrace,
}

impl GreetError {
    /// Creates a new error from an ErrorKind, capturing the current span trace.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
            cause: None,
            span_trace: SpanTrace::capture(),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Creates the error a greeter returns when it cannot greet.
    pub fn greeting(description: impl Into<String>) -> Self {
        Self::new(ErrorKind::Greeting {
            description: description.into(),
        })
    }

    pub fn output(source: io::Error) -> Self {
        Self::new(ErrorKind::Output { source })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Records the error that led to this one.
    pub fn caused_by(mut self, cause: GreetError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn get_context(&self) -> &[String] {
        &self.context
    }

    pub fn cause(&self) -> Option<&GreetError> {
        self.cause.as_deref()
    }

    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    /// Returns the innermost error in the source chain.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, indent: &str) -> fmt::Result {
        let entries = self.context.len() + usize::from(self.cause.is_some());
        for (i, context) in self.context.iter().enumerate() {
            let branch = if i + 1 == entries { "└─" } else { "├─" };
            writeln!(f, "{indent}{branch} {context}")?;
        }
        // The cause is always the last entry.
        if let Some(cause) = &self.cause {
            writeln!(f, "{indent}└─ cause: {}", cause.kind)?;
            cause.fmt_tree(f, &format!("{indent}   "))?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for GreetError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<io::Error> for Box<GreetError> {
    fn from(source: io::Error) -> Self {
        Box::new(GreetError::output(source))
    }
}

impl StdError for GreetError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::Output { source } => Some(source),
            _ => self
                .cause
                .as_deref()
                .map(|cause| cause as &(dyn StdError + 'static)),
        }
    }
}

impl fmt::Display for GreetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for context in &self.context {
            write!(f, "{}: ", context)?;
        }
        write!(f, "{}", self.kind)
    }
}

impl fmt::Debug for GreetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind)?;
        self.fmt_tree(f, "")?;
        if self.span_trace.status() == SpanTraceStatus::CAPTURED {
            writeln!(f, "Trace: {}", self.span_trace)?;
        }
        Ok(())
    }
}

/* 📖 # Why Box<GreetError> in the result type?

The span trace and context vector make GreetError several words wide.
Boxing keeps `GreetResult<String>` close to the size of the success value.
*/

/// Standard result type for greet operations.
pub type GreetResult<T> = std::result::Result<T, Box<GreetError>>;

/// Extension trait for attaching context to results during propagation.
pub trait ResultExt<T> {
    /// Attaches context to an error. Eager evaluation.
    fn context(self, context: impl Into<String>) -> GreetResult<T>;

    /// Attaches context, only evaluated if the result is an error.
    fn with_context<F>(self, f: F) -> GreetResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for GreetResult<T> {
    fn context(self, context: impl Into<String>) -> GreetResult<T> {
        self.map_err(|mut err| {
            err.context.push(context.into());
            err
        })
    }

    fn with_context<F>(self, f: F) -> GreetResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|mut err| {
            err.context.push(f());
            err
        })
    }
}
