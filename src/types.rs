//! Shared message types and status enumerations

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message status for consistent status handling across services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    Success,
    Error,
    Pending,
    Timeout,
    Retry,
}

/// Handler status for message processing results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HandlerStatus {
    Success,
    Error,
    Pending,
}

/// Transport kinds supported by the messaging library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportKind {
    #[serde(rename = "RABBITMQ")]
    RabbitMq,
    #[serde(rename = "REDIS")]
    Redis,
    #[serde(rename = "KAFKA")]
    Kafka,
    #[serde(rename = "TCP")]
    Tcp,
}

/// Standard response envelope for messaging operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseResponse {
    pub status: MessageStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl BaseResponse {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            status: MessageStatus::Success,
            message: message.into(),
            data: None,
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            status: MessageStatus::Error,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}
