use std::io;

use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{GreetError, GreetResult};
pub use tracing::instrument;
pub use tracing::{debug, error, info, trace, warn};

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "GREET_LOG";

/// Filter used when `GREET_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/* 📖 # Where do logs go?
Standard output carries exactly one line: the greeting or the error
description. Log output is therefore written to standard error only.
*/

/// Builds the log filter from `GREET_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber: stderr fmt layer, env filter and span trace capture.
pub fn init_tracing() -> GreetResult<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(log_filter())
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| GreetError::message(e.to_string()).context("failed to install tracing subscriber"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_reports_error() {
        // Whichever call comes second must fail, the first may race with other tests.
        let _ = init_tracing();
        let err = init_tracing().unwrap_err();
        assert!(
            err.to_string()
                .starts_with("failed to install tracing subscriber: ")
        );
    }
}
