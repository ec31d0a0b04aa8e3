//! Tour configuration, read from environment variables.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `OPTIONAL_TOUR_LOG` | `tracing` filter directive (falls back to `RUST_LOG`) | `info` |
//! | `OPTIONAL_TOUR_LOG_FORMAT` | `pretty`, `compact` or `json` | `pretty` |

use std::env::{self, VarError};
use std::fmt;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Filter directive variable.
pub const LOG_KEY: &str = "OPTIONAL_TOUR_LOG";
/// Filter directive variable consulted when [`LOG_KEY`] is unset.
pub const FALLBACK_LOG_KEY: &str = "RUST_LOG";
/// Output format variable.
pub const LOG_FORMAT_KEY: &str = "OPTIONAL_TOUR_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

// =============================================================================
// LogFormat
// =============================================================================

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line, human-oriented output.
    #[default]
    Pretty,
    /// Single-line output.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: LOG_FORMAT_KEY.to_string(),
                value: value.to_string(),
                message: "expected one of pretty, compact, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pretty => "pretty",
            Self::Compact => "compact",
            Self::Json => "json",
        };
        formatter.write_str(name)
    }
}

// =============================================================================
// TourConfig
// =============================================================================

/// Settings of the tour binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TourConfig {
    /// `tracing` filter directive, already checked to parse.
    pub filter: String,
    /// Output format.
    pub format: LogFormat,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TourConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`TourConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key))
    }

    /// Reads the configuration through `lookup`, which has the shape of
    /// [`std::env::var`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotUnicode` if a variable is not valid Unicode,
    /// and `ConfigError::InvalidValue` if the filter directive does not parse
    /// or the format is unknown.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let filter = match read(&lookup, LOG_KEY)? {
            Some(filter) => validate_filter(LOG_KEY, filter)?,
            None => match read(&lookup, FALLBACK_LOG_KEY)? {
                Some(filter) => validate_filter(FALLBACK_LOG_KEY, filter)?,
                None => DEFAULT_FILTER.to_string(),
            },
        };

        let format = read(&lookup, LOG_FORMAT_KEY)?
            .map(|value| value.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self { filter, format })
    }
}

fn read<F>(lookup: &F, key: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode {
            key: key.to_string(),
        }),
    }
}

fn validate_filter(key: &str, filter: String) -> Result<String, ConfigError> {
    match EnvFilter::try_new(&filter) {
        Ok(_) => Ok(filter),
        Err(error) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: filter,
            message: error.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup_from(
        pairs: &[(&'static str, &'static str)],
    ) -> impl Fn(&str) -> Result<String, VarError> {
        let values: HashMap<&'static str, &'static str> = pairs.iter().copied().collect();
        move |key: &str| {
            values
                .get(key)
                .map(ToString::to_string)
                .ok_or(VarError::NotPresent)
        }
    }

    #[rstest]
    fn test_defaults_when_nothing_is_set() {
        let config = TourConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config, TourConfig::default());
        assert_eq!(config.filter, "info");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[rstest]
    #[case("pretty", LogFormat::Pretty)]
    #[case("compact", LogFormat::Compact)]
    #[case("json", LogFormat::Json)]
    #[case(" JSON ", LogFormat::Json)]
    fn test_accepts_documented_formats(#[case] value: &'static str, #[case] expected: LogFormat) {
        let lookup = lookup_from(&[(LOG_FORMAT_KEY, value)]);

        let config = TourConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.format, expected);
    }

    #[rstest]
    fn test_rejects_unknown_format() {
        let lookup = lookup_from(&[(LOG_FORMAT_KEY, "xml")]);

        let error = TourConfig::from_lookup(lookup).unwrap_err();

        assert_eq!(
            error,
            ConfigError::InvalidValue {
                key: LOG_FORMAT_KEY.to_string(),
                value: "xml".to_string(),
                message: "expected one of pretty, compact, json".to_string(),
            }
        );
    }

    #[rstest]
    fn test_tour_filter_takes_precedence_over_rust_log() {
        let lookup = lookup_from(&[(LOG_KEY, "debug"), (FALLBACK_LOG_KEY, "warn")]);

        let config = TourConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.filter, "debug");
    }

    #[rstest]
    fn test_falls_back_to_rust_log() {
        let lookup = lookup_from(&[(FALLBACK_LOG_KEY, "warn")]);

        let config = TourConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.filter, "warn");
    }

    #[rstest]
    fn test_blank_value_counts_as_unset() {
        let lookup = lookup_from(&[(LOG_KEY, "  ")]);

        let config = TourConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.filter, "info");
    }

    #[rstest]
    fn test_keeps_multi_directive_filter_verbatim() {
        let lookup = lookup_from(&[(LOG_KEY, "warn,optional_tour=debug")]);

        let config = TourConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.filter, "warn,optional_tour=debug");
    }

    #[rstest]
    fn test_reports_non_unicode_variable() {
        let lookup = |key: &str| -> Result<String, VarError> {
            if key == LOG_KEY {
                Err(VarError::NotUnicode(OsString::from("bad")))
            } else {
                Err(VarError::NotPresent)
            }
        };

        let error = TourConfig::from_lookup(lookup).unwrap_err();

        assert_eq!(
            error,
            ConfigError::NotUnicode {
                key: LOG_KEY.to_string()
            }
        );
    }

    #[rstest]
    #[case(LogFormat::Pretty)]
    #[case(LogFormat::Compact)]
    #[case(LogFormat::Json)]
    fn test_format_display_parses_back(#[case] format: LogFormat) {
        assert_eq!(format.to_string().parse::<LogFormat>().unwrap(), format);
    }
}
