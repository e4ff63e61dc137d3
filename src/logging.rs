//! Diagnostic tracing.
//!
//! Game output goes to stdout; tracing goes to stderr so the two never share
//! a stream. Reads `RUST_LOG`, defaulting to `warn`:
//!
//! ```bash
//! RUST_LOG=connect_four=debug cargo run 2>moves.log
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Call once, before the game starts.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
