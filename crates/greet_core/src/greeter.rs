use std::fmt::Debug;
use std::sync::Arc;

use greet_base::GreetResult;

/* 📖 # What is a Greeter?

`greet()` is an external collaborator: it takes nothing and either returns
text or fails with a description. The Greeter trait is that contract, so the
entry point can be driven by the real greeting or a scripted one.
*/

/// Produces the greeting printed by the entry point.
pub trait Greeter: Debug + Send + Sync + 'static {
    /// Returns the greeting, or an error whose `Display` is the description to print.
    fn greet(&self) -> GreetResult<String>;
}

/// Shared handle to a [`Greeter`] implementation.
///
/// Wraps `Arc<dyn Greeter>`; clones share the same greeter.
///
/// # Examples
///
/// ```
/// use greet_core::{DefaultGreeter, Greeter, GreeterHandle};
///
/// let greeter = GreeterHandle::new(DefaultGreeter);
/// assert_eq!(greeter.greet().unwrap(), "Hello, World!");
/// ```
#[derive(Debug, Clone)]
pub struct GreeterHandle(Arc<dyn Greeter>);

impl GreeterHandle {
    pub fn new(greeter: impl Greeter) -> Self {
        Self(Arc::new(greeter))
    }
}

impl std::ops::Deref for GreeterHandle {
    type Target = dyn Greeter;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub const DEFAULT_GREETING: &str = "Hello, World!";

/// The greeter the `greet` binary runs with. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGreeter;

impl Greeter for DefaultGreeter {
    fn greet(&self) -> GreetResult<String> {
        Ok(DEFAULT_GREETING.to_string())
    }
}

pub fn greet() -> GreetResult<String> {
    DefaultGreeter.greet()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockGreeter;

    #[test]
    fn test_greet_returns_hello_world() {
        assert_eq!(greet().unwrap(), "Hello, World!");
    }

    #[test]
    fn test_default_greeter_is_deterministic() {
        let greeter = DefaultGreeter;
        assert_eq!(greeter.greet().unwrap(), greeter.greet().unwrap());
    }

    #[test]
    fn test_handle_clone_shares_greeter() {
        let mock = MockGreeter::succeeding("hi");
        let handle = GreeterHandle::new(mock.clone());
        let handle_clone = handle.clone();

        handle.greet().unwrap();
        handle_clone.greet().unwrap();

        assert_eq!(mock.call_count(), 2);
    }
}
