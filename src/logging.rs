//! Tracing subscriber setup for the binary.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs a stderr formatter filtered by `RUST_LOG`, defaulting to `info`.
///
/// Logs go to stderr so stdout stays clean for reports and CSV. Calling this
/// more than once is harmless; later calls leave the first subscriber in place.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
