//! Query configuration.

use tracing::warn;

/// Environment variable overriding [`QueryConfig::min_availability_ratio`].
pub const MIN_AVAILABILITY_RATIO_VAR: &str = "MIN_AVAILABILITY_RATIO";

/// Tunable parameters for station queries.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    /// Availability ratio a station must strictly exceed to count as
    /// well stocked.
    pub min_availability_ratio: f64,
}

impl QueryConfig {
    /// Create a configuration with the given availability threshold.
    pub fn new(min_availability_ratio: f64) -> Self {
        Self {
            min_availability_ratio,
        }
    }

    /// Read the configuration from the environment.
    ///
    /// Falls back to the default for any variable that is unset or cannot be
    /// parsed.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(MIN_AVAILABILITY_RATIO_VAR) {
            match raw.trim().parse::<f64>() {
                Ok(ratio) if ratio.is_finite() => config.min_availability_ratio = ratio,
                _ => warn!(
                    variable = MIN_AVAILABILITY_RATIO_VAR,
                    value = %raw,
                    "Ignoring unparsable availability ratio"
                ),
            }
        }

        config
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            min_availability_ratio: 0.5,
        }
    }
}
