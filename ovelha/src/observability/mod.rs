//! Logging setup
//!
//! The engine emits `tracing` events (`info` per run, `debug` per artifact,
//! `warn` for skips, fallbacks and model diagnostics). Binaries call [`init`]
//! once to route them to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{GenerateError, Result};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Build the environment filter, honouring `RUST_LOG`
#[must_use]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
///
/// Pretty output in debug builds, JSON in release builds, both on stderr so
/// generated-file listings on stdout stay clean.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
///
/// # Example
///
/// ```rust,no_run
/// use ovelha::observability;
///
/// # fn main() -> ovelha::Result<()> {
/// observability::init()?;
/// tracing::info!("Generator started");
/// # Ok(())
/// # }
/// ```
pub fn init() -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter());

    #[cfg(debug_assertions)]
    let result = registry
        .with(
            tracing_subscriber::fmt::layer()
                .pretty()
                .with_writer(std::io::stderr),
        )
        .try_init();

    #[cfg(not(debug_assertions))]
    let result = registry
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .try_init();

    result.map_err(|error| GenerateError::Observability(error.to_string()))
}
