//! Configuration loading for messaging clients
//!
//! Loads broker and client settings from a TOML file and validates them
//! eagerly: a missing or empty broker URI or queue name fails at load time,
//! before any connection attempt is made.

use crate::options::{BrokerOptions, InvocationOptions, DEFAULT_RETRIES, DEFAULT_TIMEOUT_MS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Top-level messaging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagingConfig {
    pub broker: BrokerSection,
    #[serde(default)]
    pub client: ClientSection,
}

/// Broker connection section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BrokerSection {
    /// Broker connection URI
    pub uri: String,
    /// Queue name
    pub queue: String,
    /// Whether to persist messages (default: true)
    #[serde(default = "default_persistent")]
    pub persistent: bool,
    /// Whether to auto-acknowledge messages (default: false)
    #[serde(default)]
    pub no_ack: bool,
}

fn default_persistent() -> bool {
    true
}

/// Client defaults section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientSection {
    /// Default per-attempt timeout in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,
    /// Default number of retries (default: 2)
    #[serde(default = "default_retries")]
    pub default_retries: u32,
    /// Service name for logging and identification
    pub service_name: Option<String>,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_retries() -> u32 {
    DEFAULT_RETRIES
}

impl Default for ClientSection {
    fn default() -> Self {
        Self {
            default_timeout_ms: DEFAULT_TIMEOUT_MS,
            default_retries: DEFAULT_RETRIES,
            service_name: None,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MessagingConfig {
    /// Load configuration from a TOML file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: MessagingConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.broker.uri.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "broker.uri must not be empty".to_string(),
            ));
        }
        if self.broker.queue.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "broker.queue must not be empty".to_string(),
            ));
        }
        if self.client.default_timeout_ms == 0 {
            return Err(ConfigError::InvalidConfig(
                "client.default_timeout_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Broker connection options derived from this configuration
    pub fn broker_options(&self) -> Result<BrokerOptions, ConfigError> {
        Ok(
            BrokerOptions::for_queue(&self.broker.uri, &self.broker.queue)?
                .persistent(self.broker.persistent)
                .no_ack(self.broker.no_ack),
        )
    }

    /// Client default invocation options derived from this configuration
    pub fn invocation_options(&self) -> InvocationOptions {
        InvocationOptions::default()
            .with_timeout_ms(self.client.default_timeout_ms)
            .with_retries(self.client.default_retries)
    }
}
