//! Error types for messaging operations
//!
//! Classifies terminal failures of a request/response call: a timeout is a
//! distinct, identifiable error separate from any other transport failure,
//! and both carry the pattern of the logical call that failed so operators
//! can diagnose which call broke.

use crate::config::ConfigError;
use crate::naming::Pattern;
use thiserror::Error;

/// Main error type for messaging client operations
#[derive(Debug, Error)]
pub enum MessagingError {
    #[error("Timeout after {timeout_ms}ms for pattern: {pattern}")]
    Timeout { pattern: Pattern, timeout_ms: u64 },

    #[error("Error sending message to pattern {pattern}: {message}")]
    Transport { pattern: Pattern, message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MessagingError {
    /// Create a timeout error for a failed attempt
    pub fn timeout(pattern: &Pattern, timeout_ms: u64) -> Self {
        Self::Timeout {
            pattern: pattern.clone(),
            timeout_ms,
        }
    }

    /// Create a transport error for a failed attempt
    pub fn transport<S: Into<String>>(pattern: &Pattern, message: S) -> Self {
        Self::Transport {
            pattern: pattern.clone(),
            message: message.into(),
        }
    }

    /// Whether this failure was a per-attempt deadline expiry
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Result type for messaging operations
pub type MessagingResult<T> = Result<T, MessagingError>;
