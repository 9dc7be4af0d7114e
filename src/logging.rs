use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Setup diagnostic logging on stderr.
///
/// User-facing status goes through the styled console helpers; this layer only
/// carries diagnostics. `RUST_LOG` takes precedence when set.
///
/// # Arguments
/// * `verbose` - If true, default to debug level; otherwise only warnings
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    tracing::debug!(verbose, "logging initialized");
    Ok(())
}
