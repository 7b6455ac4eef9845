//! Configuration management for the todos application.
//!
//! Loads configuration from environment variables with defaults. Values
//! that are present but cannot be parsed are reported instead of silently
//! replaced by the default.

use crate::types::{Filter, UnknownFilter};
use serde::{Deserialize, Serialize};
use statekit_runtime::{StoreConfig, DEFAULT_BROADCAST_CAPACITY};
use std::env;

/// Tracing filter used when neither `RUST_LOG` nor `TODOS_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "todos=info,statekit_runtime=info";

/// Errors raised while reading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `TODOS_BROADCAST_CAPACITY` is not a positive integer
    #[error("TODOS_BROADCAST_CAPACITY must be a positive integer, got \"{0}\"")]
    BroadcastCapacity(String),

    /// `TODOS_INITIAL_FILTER` names no filter
    #[error("TODOS_INITIAL_FILTER: {0}")]
    InitialFilter(#[from] UnknownFilter),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tracing filter directive (`TODOS_LOG`; `RUST_LOG` takes precedence
    /// when the subscriber is installed)
    pub log_filter: String,
    /// Notifications buffered per subscriber (`TODOS_BROADCAST_CAPACITY`)
    pub broadcast_capacity: usize,
    /// Filter the list starts with (`TODOS_INITIAL_FILTER`)
    pub initial_filter: Filter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            broadcast_capacity: DEFAULT_BROADCAST_CAPACITY,
            initial_filter: Filter::ShowAll,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value
    /// if it is set
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a variable is set to an unparseable value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_filter = lookup("TODOS_LOG").unwrap_or(defaults.log_filter);

        let broadcast_capacity = match lookup("TODOS_BROADCAST_CAPACITY") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => capacity,
                _ => return Err(ConfigError::BroadcastCapacity(raw)),
            },
            None => defaults.broadcast_capacity,
        };

        let initial_filter = match lookup("TODOS_INITIAL_FILTER") {
            Some(raw) => raw.trim().parse::<Filter>()?,
            None => defaults.initial_filter,
        };

        Ok(Self {
            log_filter,
            broadcast_capacity,
            initial_filter,
        })
    }

    /// Store settings derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.broadcast_capacity)
    }
}
