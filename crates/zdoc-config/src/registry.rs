//! Registry sizing configuration.

use serde::{Deserialize, Serialize};
use zdoc_core::RegistryOptions;

use crate::error::ConfigError;

/// Default number of entry slots reserved up front.
const fn default_initial_capacity() -> usize {
    8
}

/// Default number of argument slots for a newly created entry.
const fn default_arg_capacity() -> usize {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryConfig {
    /// Entry slots reserved when a registry is created.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Argument slots reserved for each entry created by merge-insert.
    #[serde(default = "default_arg_capacity")]
    pub arg_capacity: usize,

    /// Upper bound on distinct type labels per registry. Unbounded if unset.
    #[serde(default)]
    pub max_entries: Option<usize>,

    /// Upper bound on arguments per entry. Unbounded if unset.
    #[serde(default)]
    pub max_args_per_entry: Option<usize>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            arg_capacity: default_arg_capacity(),
            max_entries: None,
            max_args_per_entry: None,
        }
    }
}

impl RegistryConfig {
    /// Check that the ceilings leave room for at least one item and do not
    /// contradict the initial capacities.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entries == Some(0) {
            return Err(invalid("registry.max_entries", "must be at least 1"));
        }
        if self.max_args_per_entry == Some(0) {
            return Err(invalid("registry.max_args_per_entry", "must be at least 1"));
        }
        if let Some(max) = self.max_entries
            && self.initial_capacity > max
        {
            return Err(invalid(
                "registry.initial_capacity",
                &format!("{} exceeds max_entries ({max})", self.initial_capacity),
            ));
        }
        if let Some(max) = self.max_args_per_entry
            && self.arg_capacity > max
        {
            return Err(invalid(
                "registry.arg_capacity",
                &format!("{} exceeds max_args_per_entry ({max})", self.arg_capacity),
            ));
        }
        Ok(())
    }

    /// Options for constructing a [`zdoc_core::DocRegistry`].
    #[must_use]
    pub const fn options(&self) -> RegistryOptions {
        RegistryOptions {
            initial_capacity: self.initial_capacity,
            arg_capacity: self.arg_capacity,
            max_entries: self.max_entries,
            max_args_per_entry: self.max_args_per_entry,
        }
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
