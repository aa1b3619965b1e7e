//! Diagnostic logging to stderr.
//!
//! Filter directives come from `CSVIEW_LOG`, then `RUST_LOG`, defaulting to
//! `warn`. For example `CSVIEW_LOG=csview_render=debug` shows column layout
//! and ingestion summaries without touching the table on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding tracing filter directives.
pub const LOG_ENV: &str = "CSVIEW_LOG";

/// Install the stderr subscriber. Safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::registry().with(stderr_layer).try_init();
}
