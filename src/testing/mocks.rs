//! Mock implementations for testing
//!
//! Provides a scriptable mock Transport so clients can be tested without a
//! running broker: per-attempt behaviors (reply, fail, hang), recorded
//! dispatches, and programmable connect/emit failures.

use crate::naming::Pattern;
use crate::transport::{Transport, TransportError};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// One scripted attempt outcome for [`MockTransport::send`]
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return this response
    Reply(Value),
    /// Fail with this message
    Fail(String),
    /// Sleep past the caller's deadline, then fail
    Hang(Duration),
}

/// Mock transport for testing.
///
/// `send` consumes one scripted behavior per attempt; once the script is
/// empty it replies with a generic success payload. Every dispatch is
/// recorded so tests can assert attempt counts and payloads.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub script: Arc<Mutex<VecDeque<MockBehavior>>>,
    pub sent: Arc<Mutex<Vec<(Pattern, Value)>>>,
    pub emitted: Arc<Mutex<Vec<(Pattern, Value)>>>,
    pub connect_should_fail: bool,
    pub emit_should_fail: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport that follows `behaviors` one attempt at a time
    pub fn with_script(behaviors: Vec<MockBehavior>) -> Self {
        Self {
            script: Arc::new(Mutex::new(behaviors.into())),
            ..Default::default()
        }
    }

    /// Transport whose every `send` attempt fails with `message`
    pub fn always_failing(message: &str) -> Self {
        let failure = message.to_string();
        Self {
            script: Arc::new(Mutex::new(
                std::iter::repeat_with(|| MockBehavior::Fail(failure.clone()))
                    .take(64)
                    .collect(),
            )),
            ..Default::default()
        }
    }

    pub fn with_connect_failure(mut self) -> Self {
        self.connect_should_fail = true;
        self
    }

    pub fn with_emit_failure(mut self) -> Self {
        self.emit_should_fail = true;
        self
    }

    /// Number of `send` dispatches observed so far
    pub async fn attempts(&self) -> usize {
        self.sent.lock().await.len()
    }

    pub async fn get_sent(&self) -> Vec<(Pattern, Value)> {
        self.sent.lock().await.clone()
    }

    pub async fn get_emitted(&self) -> Vec<(Pattern, Value)> {
        self.emitted.lock().await.clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, pattern: &Pattern, payload: &Value) -> Result<Value, TransportError> {
        self.sent.lock().await.push((pattern.clone(), payload.clone()));

        let behavior = self.script.lock().await.pop_front();
        match behavior {
            None => Ok(json!({"status": "SUCCESS"})),
            Some(MockBehavior::Reply(response)) => Ok(response),
            Some(MockBehavior::Fail(message)) => Err(TransportError::new(message)),
            Some(MockBehavior::Hang(duration)) => {
                tokio::time::sleep(duration).await;
                Err(TransportError::new("response arrived after deadline"))
            }
        }
    }

    async fn emit(&self, pattern: &Pattern, payload: &Value) -> Result<(), TransportError> {
        if self.emit_should_fail {
            return Err(TransportError::new("mock emit failure"));
        }
        self.emitted
            .lock()
            .await
            .push((pattern.clone(), payload.clone()));
        Ok(())
    }

    async fn connect(&self) -> Result<(), TransportError> {
        if self.connect_should_fail {
            Err(TransportError::new("mock connection failure"))
        } else {
            Ok(())
        }
    }
}
