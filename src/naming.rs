//! Naming conventions for services, queues, and message patterns
//!
//! Pure, deterministic helpers that keep service names, queue names, and
//! message patterns consistent across services. No I/O, no error paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical name identifying what operation a message represents.
///
/// Opaque to the messaging client; compared by value and serializable so it
/// can appear in log fields and payload envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pattern(String);

impl Pattern {
    pub fn new<S: Into<String>>(value: S) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Standardized service name: uppercase base with a `_SERVICE` suffix
pub fn service_name(base: &str) -> String {
    service_name_with_suffix(base, "SERVICE")
}

pub fn service_name_with_suffix(base: &str, suffix: &str) -> String {
    format!("{}_{}", base.to_uppercase(), suffix)
}

/// Standardized queue name: lowercase base with a `_queue` suffix
pub fn queue_name(base: &str) -> String {
    queue_name_with_suffix(base, "queue")
}

pub fn queue_name_with_suffix(base: &str, suffix: &str) -> String {
    format!("{}_{}", base.to_lowercase(), suffix)
}

/// Standardized message pattern: lowercase dot-joined `domain.action`
pub fn pattern(domain: &str, action: &str) -> Pattern {
    Pattern(format!(
        "{}.{}",
        domain.to_lowercase(),
        action.to_lowercase()
    ))
}
