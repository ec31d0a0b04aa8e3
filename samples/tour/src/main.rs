//! Entry point of the optional-fp tour.
//!
//! ```bash
//! cargo run -p optional-tour
//! OPTIONAL_TOUR_LOG_FORMAT=json cargo run -p optional-tour
//! ```

use optional_tour::{TourConfig, TourError, logging};

fn main() -> Result<(), TourError> {
    let (config, config_error) = match TourConfig::from_env() {
        Ok(config) => (config, None),
        Err(error) => (TourConfig::default(), Some(error)),
    };

    logging::init(&config)?;

    if let Some(error) = config_error {
        tracing::warn!(%error, "invalid tour configuration, using defaults");
    }

    tracing::info!(filter = %config.filter, format = %config.format, "starting tour");
    optional_tour::run();

    Ok(())
}
