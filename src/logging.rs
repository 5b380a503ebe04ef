//! Diagnostic logging.
//!
//! Logs go to stderr so they never mix with the list/current output that
//! shell scripts capture. The filter comes from `JDKENV_LOG`, then `RUST_LOG`,
//! then the verbose flag.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const LOG_ENV: &str = "JDKENV_LOG";

fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            if verbose {
                EnvFilter::new("jdkenv=debug")
            } else {
                EnvFilter::new("jdkenv=warn")
            }
        })
}

/// Initialize the tracing subscriber.
pub fn init(verbose: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // A second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt_layer)
        .try_init();
}
