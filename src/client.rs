//! Request/response messaging client with timeout and retry
//!
//! `MessagingClient` performs one logical request/response exchange over an
//! abstract [`Transport`], enforcing a per-attempt deadline and a bounded
//! number of immediate retries, and classifying terminal failures. It also
//! carries the fire-and-forget emit path and a single-shot health probe.
//!
//! Each call is stateless and independent; the client holds no connection
//! state and requires no locking. Concurrency safety is delegated entirely to
//! the transport implementation.

use crate::error::{MessagingError, MessagingResult};
use crate::naming::Pattern;
use crate::options::InvocationOptions;
use crate::transport::Transport;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Messaging client wrapping a transport with timeout, retry, and logging.
pub struct MessagingClient<T: Transport> {
    transport: Arc<T>,
    defaults: InvocationOptions,
}

impl<T: Transport> MessagingClient<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            defaults: InvocationOptions::default(),
        }
    }

    /// Create a client with its own default timeout/retry settings,
    /// typically derived from configuration.
    pub fn with_defaults(transport: Arc<T>, defaults: InvocationOptions) -> Self {
        Self {
            transport,
            defaults,
        }
    }

    /// Send a request and wait for the response, using the client defaults.
    pub async fn send(&self, pattern: &Pattern, payload: Value) -> MessagingResult<Value> {
        self.send_with_options(pattern, payload, self.defaults)
            .await
    }

    /// Send a request and wait for the response.
    ///
    /// The call is dispatched up to `options.retries + 1` times. Every attempt
    /// independently gets the full `options.timeout_ms`; a retry starts only
    /// after the prior attempt has definitively failed or timed out, with no
    /// backoff in between. The successful response is returned unmodified.
    ///
    /// A deadline expiry is classified as [`MessagingError::Timeout`],
    /// distinct from any other transport failure. The terminal error is
    /// logged with the pattern before being returned.
    pub async fn send_with_options(
        &self,
        pattern: &Pattern,
        payload: Value,
        options: InvocationOptions,
    ) -> MessagingResult<Value> {
        let request_id = Uuid::new_v4();
        let deadline = Duration::from_millis(options.timeout_ms);
        let mut last_error: Option<MessagingError> = None;

        for attempt in 0..=options.retries {
            debug!(
                %pattern,
                %request_id,
                attempt = attempt + 1,
                max_attempts = options.retries + 1,
                "Sending message"
            );

            match tokio::time::timeout(deadline, self.transport.send(pattern, &payload)).await {
                Ok(Ok(response)) => {
                    debug!(
                        %pattern,
                        %request_id,
                        attempt = attempt + 1,
                        "Received response"
                    );
                    return Ok(response);
                }
                Ok(Err(e)) => {
                    last_error = Some(MessagingError::transport(pattern, e.to_string()));
                }
                Err(_) => {
                    last_error = Some(MessagingError::timeout(pattern, options.timeout_ms));
                }
            }
        }

        let terminal = last_error
            .unwrap_or_else(|| MessagingError::transport(pattern, "no attempts were made"));
        error!(
            %pattern,
            %request_id,
            attempts = options.retries + 1,
            error = %terminal,
            "Request failed"
        );
        Err(terminal)
    }

    /// Emit an event without waiting for a response.
    ///
    /// Best effort: no timeout, no retry, and delivery failure is logged
    /// rather than surfaced to the caller.
    pub async fn emit(&self, pattern: &Pattern, payload: Value) {
        debug!(%pattern, "Emitting event");
        if let Err(e) = self.transport.emit(pattern, &payload).await {
            warn!(%pattern, error = %e, "Event delivery failed");
        }
    }

    /// Probe the transport connection once.
    ///
    /// Returns true if `connect()` succeeds, false on any failure. The
    /// failure is logged, never propagated; this is a point-in-time probe,
    /// not a standing health monitor.
    pub async fn health_check(&self) -> bool {
        match self.transport.connect().await {
            Ok(()) => {
                debug!("Transport connection is healthy");
                true
            }
            Err(e) => {
                error!(error = %e, "Transport connection health check failed");
                false
            }
        }
    }
}
