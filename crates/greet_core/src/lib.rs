pub mod entry;
pub mod greeter;
pub mod mock;

pub use entry::{ExitStatus, run};
pub use greeter::{DEFAULT_GREETING, DefaultGreeter, Greeter, GreeterHandle, greet};
pub use mock::MockGreeter;
