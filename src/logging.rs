//! Structured logging with tracing.
//!
//! Logs go to stderr so command output on stdout stays pipeable.

use tracing_subscriber::{fmt, EnvFilter};

/// Map the number of `-v` flags to a default filter directive.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// `TEMPO_LOG` wins over `RUST_LOG`, which wins over the verbosity flag.
pub fn init(verbosity: u8) {
    let filter = std::env::var("TEMPO_LOG")
        .ok()
        .and_then(|v| EnvFilter::try_new(v).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(level_for_verbosity(verbosity)));

    // A second init (tests, embedding) is harmless.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
