//! Application configuration
//!
//! JSON record with upper-case keys, e.g.
//!
//! ```json
//! { "TD_FUNC": true, "MD_FUNC": true, "INTERFACE": "paper", "XMIN": [1, 5] }
//! ```
//!
//! Keys other than the typed ones are kept in `extra`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

use crate::capability::Capability;

/// Environment variable overriding `TD_FUNC`
pub const ENV_TD_FUNC: &str = "HIVE_TD_FUNC";
/// Environment variable overriding `MD_FUNC`
pub const ENV_MD_FUNC: &str = "HIVE_MD_FUNC";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("Invalid {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Per-application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Trading functions (send/cancel/query); missing means off
    #[serde(rename = "TD_FUNC", default)]
    pub td_func: bool,
    /// Market data functions (subscribe); missing means off
    #[serde(rename = "MD_FUNC", default)]
    pub md_func: bool,
    /// Name of the trading interface in use
    #[serde(rename = "INTERFACE", default = "default_interface")]
    pub interface: String,
    /// Capacity of the event channel feeding extensions
    #[serde(rename = "EVENT_CAPACITY", default = "default_event_capacity")]
    pub event_capacity: usize,
    /// Any other option, untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn default_interface() -> String {
    "paper".to_string()
}

fn default_event_capacity() -> usize {
    10_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            td_func: false,
            md_func: false,
            interface: default_interface(),
            event_capacity: default_event_capacity(),
            extra: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Config with both trading and market functions switched on
    pub fn enabled() -> Self {
        Self {
            td_func: true,
            md_func: true,
            ..Default::default()
        }
    }

    /// Whether a capability flag is on
    pub fn is_enabled(&self, capability: Capability) -> bool {
        match capability {
            Capability::Trading => self.td_func,
            Capability::Market => self.md_func,
        }
    }

    /// Reject values the runtime cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.event_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "EVENT_CAPACITY",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Look up an untyped option
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.extra.get(key)
    }

    /// Apply `HIVE_TD_FUNC` / `HIVE_MD_FUNC` from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (environment, CLI, tests)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_TD_FUNC) {
            self.td_func = parse_flag(ENV_TD_FUNC, &value)?;
        }
        if let Some(value) = lookup(ENV_MD_FUNC) {
            self.md_func = parse_flag(ENV_MD_FUNC, &value)?;
        }
        Ok(self)
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv {
            key,
            value: value.to_string(),
        }),
    }
}

/// Load application configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}
