//! Logging configuration and subscriber setup.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Environment variable whose filter directives take precedence over the
/// configured level.
pub const LOG_ENV_VAR: &str = "ZDOC_LOG";

fn default_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive (e.g. `"warn"`, `"zdoc_core=debug"`).
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `level` is not a valid
    /// filter directive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|error| ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: error.to_string(),
            })
    }
}

/// Install a global `fmt` subscriber.
///
/// Directives in `ZDOC_LOG` win; otherwise `config.level` is used.
///
/// # Errors
///
/// Returns [`ConfigError::Logging`] if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ConfigError::Logging(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_is_warn() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn module_directives_are_accepted() {
        let config = LoggingConfig {
            level: "info,zdoc_core=trace".to_string(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn malformed_directive_is_rejected() {
        let config = LoggingConfig {
            level: "zdoc_core=verbose".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "logging.level"
        ));
    }
}
