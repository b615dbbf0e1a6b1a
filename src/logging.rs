use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the diagnostic log filter, e.g. `debug`.
pub const LOG_ENV: &str = "RCONTAINERLOG_LOG";

/// Diagnostics go to stderr; stdout carries tables and messages only.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}
