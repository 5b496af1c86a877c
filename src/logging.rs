//! Subscriber setup for the command-line binary.

use tracing_subscriber::EnvFilter;

/// Install a formatted stderr subscriber.
///
/// `RUST_LOG` takes precedence over `level` when it is set.
pub fn init(level: &str) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))
}
