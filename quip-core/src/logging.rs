//! Console logging setup using the `tracing` ecosystem.
//!
//! The client crates only emit `tracing` events; they never install a
//! subscriber themselves. Applications and tests that want to see the
//! request log call [`init_console_logging`].

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize a compact console logger at the given level.
///
/// `level` accepts anything `EnvFilter` understands ("debug",
/// "quip_api=trace", ...). Unparsable filters fall back to "info".
/// Subsequent calls are no-ops.
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("console logging initialized at level={level}");
    }
}
