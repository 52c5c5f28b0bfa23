//! Log output for the binary.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here also receives those records.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Filter directive to use: `RUST_LOG` if set, else `debug` when verbose,
/// else the configured filter.
pub fn filter_for(config: &LoggingConfig, verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let directive = if verbose { "debug" } else { config.filter.as_str() };
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Ignoring invalid log filter '{directive}': {e}");
        EnvFilter::new(crate::config::DEFAULT_LOG_FILTER)
    })
}

/// Install the global subscriber, writing to stderr.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_for(config, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("Logging already initialized: {e}");
    }
}
