//! Invocation options and broker connection options
//!
//! `InvocationOptions` carries the per-call timeout/retry settings; it is
//! immutable for the duration of a call and shares no state across calls.
//! `BrokerOptions` builds the transport-specific connection configuration
//! for a queue, validated eagerly so misconfiguration fails at startup
//! rather than on the first call.

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Default per-attempt deadline in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Default number of additional attempts after the first failure
pub const DEFAULT_RETRIES: u32 = 2;

/// Timeout and retry settings for a single request/response call.
///
/// `retries` bounds only automatic re-attempts of the same call; each attempt
/// independently gets the full `timeout_ms`, so worst-case wall time is
/// `(retries + 1) * timeout_ms` plus transport overhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationOptions {
    /// Per-attempt deadline in milliseconds
    pub timeout_ms: u64,
    /// Number of additional attempts after the first failure
    pub retries: u32,
}

impl Default for InvocationOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retries: DEFAULT_RETRIES,
        }
    }
}

impl InvocationOptions {
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }
}

/// Durability settings for the queue itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueOptions {
    pub durable: bool,
}

/// Socket-level keepalive and reconnect settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketOptions {
    pub heartbeat_interval_secs: u64,
    pub reconnect_time_secs: u64,
}

impl Default for SocketOptions {
    fn default() -> Self {
        Self {
            heartbeat_interval_secs: 60,
            reconnect_time_secs: 5,
        }
    }
}

/// Broker connection options for a single queue.
///
/// The core does not interpret these beyond validating that URI and queue are
/// non-empty; the concrete transport consumes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokerOptions {
    pub urls: Vec<String>,
    pub queue: String,
    pub queue_options: QueueOptions,
    pub socket_options: SocketOptions,
    pub prefetch_count: u16,
    pub global_prefetch: bool,
    pub no_assert: bool,
    /// Whether published messages survive a broker restart
    pub persistent: bool,
    /// Whether messages are auto-acknowledged on delivery
    pub no_ack: bool,
}

impl BrokerOptions {
    /// Build connection options for `queue` at `uri` with standard defaults:
    /// durable queue, prefetch of 1, persistent delivery, explicit acks.
    ///
    /// Empty URI or queue name is a configuration error, raised here rather
    /// than at call time.
    pub fn for_queue(uri: &str, queue: &str) -> Result<Self, ConfigError> {
        if uri.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "broker URI is required".to_string(),
            ));
        }
        if queue.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "queue name is required".to_string(),
            ));
        }

        Ok(Self {
            urls: vec![uri.to_string()],
            queue: queue.to_string(),
            queue_options: QueueOptions { durable: true },
            socket_options: SocketOptions::default(),
            prefetch_count: 1,
            global_prefetch: false,
            no_assert: false,
            persistent: true,
            no_ack: false,
        })
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub fn no_ack(mut self, no_ack: bool) -> Self {
        self.no_ack = no_ack;
        self
    }
}
