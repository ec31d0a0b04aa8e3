//! Error types for the tour binary.

use thiserror::Error;

/// Errors raised while reading the tour configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable holds a value the tour cannot use.
    #[error("invalid value {value:?} for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// The rejected value.
        value: String,
        /// Why the value was rejected.
        message: String,
    },

    /// An environment variable is set but is not valid Unicode.
    #[error("{key} is not valid Unicode")]
    NotUnicode {
        /// The name of the environment variable.
        key: String,
    },
}

/// Fatal errors of the tour binary.
#[derive(Debug, Error)]
pub enum TourError {
    /// The log filter directive could not be built.
    #[error("failed to build log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_invalid_value_display() {
        let error = ConfigError::InvalidValue {
            key: "OPTIONAL_TOUR_LOG_FORMAT".to_string(),
            value: "xml".to_string(),
            message: "expected one of pretty, compact, json".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "invalid value \"xml\" for OPTIONAL_TOUR_LOG_FORMAT: expected one of pretty, compact, json"
        );
    }

    #[rstest]
    fn test_not_unicode_display() {
        let error = ConfigError::NotUnicode {
            key: "RUST_LOG".to_string(),
        };

        assert_eq!(error.to_string(), "RUST_LOG is not valid Unicode");
    }
}
