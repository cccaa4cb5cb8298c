//! # zdoc-config
//!
//! Layered configuration loading for zdoc using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ZDOC_*` prefix, `__` as separator)
//! 2. Project-level `.zdoc/config.toml`
//! 3. User-level `~/.config/zdoc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ZDOC_REGISTRY__INITIAL_CAPACITY` -> `registry.initial_capacity`,
//! `ZDOC_LOGGING__LEVEL` -> `logging.level`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use zdoc_config::ZdocConfig;
//! use zdoc_core::DocRegistry;
//!
//! let config = ZdocConfig::load_with_dotenv().expect("config");
//! zdoc_config::init_tracing(&config.logging).expect("logging");
//!
//! let mut registry = DocRegistry::with_options(config.registry.options()).expect("registry");
//! registry
//!     .merge_insert("Param".to_string(), "x: int".to_string())
//!     .expect("merge");
//! ```

mod error;
mod logging;
mod registry;

pub use error::ConfigError;
pub use logging::{LOG_ENV_VAR, LoggingConfig, init_tracing};
pub use registry::RegistryConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZdocConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ZdocConfig {
    /// Load and validate configuration from all sources (TOML files +
    /// environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed, or
    /// [`ConfigError::InvalidValue`] if the merged values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        tracing::debug!(
            initial_capacity = config.registry.initial_capacity,
            arg_capacity = config.registry.arg_capacity,
            max_entries = ?config.registry.max_entries,
            max_args_per_entry = ?config.registry.max_args_per_entry,
            level = %config.logging.level,
            "loaded zdoc configuration"
        );
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.registry.validate()?;
        self.logging.validate()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            tracing::debug!(path = %global_path.display(), "merging user config");
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".zdoc/config.toml");
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ZDOC_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zdoc").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Silently does nothing
    /// if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ZdocConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.registry.initial_capacity, 8);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config =
                ZdocConfig::from_figment(&ZdocConfig::figment()).map_err(|e| e.to_string())?;
            assert_eq!(config.registry.arg_capacity, 1);
            assert!(config.registry.max_entries.is_none());
            Ok(())
        });
    }
}
