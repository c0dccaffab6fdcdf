/* 📖 # What does the greet binary do?

It takes no arguments and reads no configuration. It prints one line to
standard output and exits:
- 0: the greeting was printed
- 1: the greeter failed (its description was printed instead), or stdout could not be written

Set `GREET_LOG` (e.g. `GREET_LOG=debug`) to see diagnostics on standard error.
*/

use std::io;
use std::process::ExitCode;

use greet_base::tracing::init_tracing;
use greet_core::{DefaultGreeter, GreeterHandle, run};

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("Warning: {}", e);
    }

    let greeter = GreeterHandle::new(DefaultGreeter);
    let mut stdout = io::stdout().lock();
    run(&*greeter, &mut stdout).into()
}
