//! Core messaging client library
//!
//! Shared building blocks for service-to-service messaging over an abstract
//! broker transport:
//! - Request/response calls with a per-attempt timeout, a bounded retry
//!   count, and uniform error classification and logging
//! - Fire-and-forget event emission and a single-shot connection health probe
//! - Broker connection option builders and naming-convention helpers
//!
//! The library owns no connection state. Broker connectivity lives behind the
//! [`Transport`] trait, which concrete broker clients implement; the core only
//! wraps `send` in timeout/retry and classifies what comes back.
//!
//! # Quick Start
//!
//! ```rust
//! use messaging_core::naming;
//! use messaging_core::{BrokerOptions, InvocationOptions};
//!
//! // Naming conventions shared across services
//! let pattern = naming::pattern("order", "create");
//! assert_eq!(pattern.as_str(), "order.create");
//! assert_eq!(naming::service_name("order"), "ORDER_SERVICE");
//! assert_eq!(naming::queue_name("order"), "order_queue");
//!
//! // Per-call timeout/retry settings
//! let options = InvocationOptions::default()
//!     .with_timeout_ms(2_000)
//!     .with_retries(1);
//! assert_eq!(options.retries, 1);
//!
//! // Broker connection options for a queue (validated eagerly)
//! let broker = BrokerOptions::for_queue("amqp://localhost:5672", "order_queue").unwrap();
//! assert!(broker.queue_options.durable);
//! assert!(BrokerOptions::for_queue("", "order_queue").is_err());
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod naming;
pub mod options;
pub mod testing;
pub mod transport;
pub mod types;

pub use client::MessagingClient;
pub use config::{ConfigError, MessagingConfig};
pub use error::{MessagingError, MessagingResult};
pub use naming::Pattern;
pub use options::{BrokerOptions, InvocationOptions};
pub use transport::{Transport, TransportError};
pub use types::{BaseResponse, HandlerStatus, MessageStatus, TransportKind};
