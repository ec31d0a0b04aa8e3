//! Log subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, TourConfig};
use crate::error::TourError;

/// Installs the global `tracing` subscriber described by `config`.
///
/// Output goes to stderr.
///
/// # Errors
///
/// Returns `TourError::Filter` if the filter directive does not parse and
/// `TourError::Subscriber` if a global subscriber is already installed.
pub fn init(config: &TourConfig) -> Result<(), TourError> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()?,
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?,
    }

    Ok(())
}
