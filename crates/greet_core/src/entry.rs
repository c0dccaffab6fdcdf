use std::io::Write;
use std::process::ExitCode;

use greet_base::tracing::{debug, error, instrument};
use greet_base::{GreetError, GreetResult};

use crate::greeter::Greeter;

/// How a run ended. Maps onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The greeting was printed.
    Success,
    /// The greeter failed, or the output could not be written.
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/* 📖 # What does a run do?

Exactly one call to the greeter, then exactly one line on `out`:
- Ok(greeting): the greeting, exit status Success
- Err(error): the error's Display text, exit status Failure

Diagnostics go through tracing, never through `out`.
*/

/// Calls the greeter once, writes the resulting line to `out` and reports the exit status.
#[instrument(name = "run_entry", skip_all)]
pub fn run(greeter: &dyn Greeter, out: &mut dyn Write) -> ExitStatus {
    let (line, status) = match greeter.greet() {
        Ok(greeting) => {
            debug!("greeting produced");
            (greeting, ExitStatus::Success)
        }
        Err(err) => {
            debug!(error = %err, "greeting failed");
            (err.to_string(), ExitStatus::Failure)
        }
    };

    match write_line(out, &line) {
        Ok(()) => status,
        Err(err) => {
            error!("{}", err);
            ExitStatus::Failure
        }
    }
}

fn write_line(out: &mut dyn Write, line: &str) -> GreetResult<()> {
    writeln!(out, "{}", line)
        .and_then(|()| out.flush())
        .map_err(|source| GreetError::output(source).context("failed to write to standard output"))?;
    Ok(())
}
