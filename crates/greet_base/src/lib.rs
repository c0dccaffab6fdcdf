/* 📖 # What lives in greet_base?
greet_base holds the error type and the tracing setup shared by the greeter
library and the binary, so neither depends on the other for them.
*/

pub mod error;
pub mod tracing;

pub use error::{ErrorKind, GreetError, GreetResult, ResultExt};
