//! Diagnostic tracing for the toybox binary.
//!
//! Events go to stderr, filtered by `RUST_LOG`. What the commands print on
//! stdout never depends on it; set `RUST_LOG=toybox=debug` to see config
//! loading and the discarded probe error.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Falls back to `warn` when `RUST_LOG` is
/// unset or unparsable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
