//! Logging configuration using the tracing framework.
//!
//! Diagnostics go to stderr so that they never mix with report output.
//! The level is controlled via `RUST_LOG` (default: `mocboard=warn`).

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "mocboard=warn";

/// Initialize the global subscriber. Safe to call more than once.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true)
                .with_file(false),
        )
        .try_init()
        .ok();
}

/// Minimal logging for tests: errors only unless `RUST_LOG` says otherwise.
pub fn init_test() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer())
        .try_init()
        .ok();
}
