//! Transport abstraction for messaging clients
//!
//! This trait provides an abstraction over concrete broker clients (AMQP,
//! Redis, Kafka, TCP) to enable dependency injection and testing. The core
//! library places no constraint on the wire format; it only wraps `send` in
//! timeout/retry logic and classifies failures.

use crate::naming::Pattern;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure reported by a transport implementation.
///
/// Deliberately opaque: connection errors, remote errors, and serialization
/// errors at the transport layer all surface here as a message. Classification
/// into the library's error taxonomy happens in the client.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Messaging endpoint capable of request/response and fire-and-forget dispatch.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Dispatch a request for `pattern` and wait for the response.
    async fn send(&self, pattern: &Pattern, payload: &Value) -> Result<Value, TransportError>;

    /// Dispatch an event for `pattern` without waiting for a response.
    async fn emit(&self, pattern: &Pattern, payload: &Value) -> Result<(), TransportError>;

    /// Attempt a single connection to the broker.
    async fn connect(&self) -> Result<(), TransportError>;
}
