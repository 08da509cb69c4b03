//! End-to-end tests for the messaging client against a scripted transport

use messaging_core::naming;
use messaging_core::testing::{MockBehavior, MockTransport};
use messaging_core::{InvocationOptions, MessagingClient, MessagingError};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[tokio::test]
async fn failing_transport_is_dispatched_exactly_retries_plus_one_times() {
    for retries in [0u32, 1, 2, 5] {
        let transport = Arc::new(MockTransport::always_failing("broker unavailable"));
        let client = MessagingClient::new(transport.clone());

        let pattern = naming::pattern("order", "create");
        let options = InvocationOptions::default()
            .with_timeout_ms(100)
            .with_retries(retries);
        let result = client.send_with_options(&pattern, json!({}), options).await;

        assert!(result.is_err());
        assert_eq!(
            transport.attempts().await,
            (retries + 1) as usize,
            "retries={retries}"
        );
    }
}

#[tokio::test]
async fn success_on_later_attempt_stops_the_loop() {
    let transport = Arc::new(MockTransport::with_script(vec![
        MockBehavior::Fail("first attempt".to_string()),
        MockBehavior::Fail("second attempt".to_string()),
        MockBehavior::Reply(json!({"status": "SUCCESS", "attempt": 3})),
    ]));
    let client = MessagingClient::new(transport.clone());

    let pattern = naming::pattern("order", "create");
    let options = InvocationOptions::default()
        .with_timeout_ms(100)
        .with_retries(5);
    let response = client
        .send_with_options(&pattern, json!({}), options)
        .await
        .unwrap();

    assert_eq!(response["attempt"], 3);
    assert_eq!(transport.attempts().await, 3);
}

#[tokio::test]
async fn first_attempt_times_out_second_succeeds_within_budget() {
    // Scenario from the design doc: timeout_ms=100, retries=1, first call
    // hangs past the deadline, second returns SUCCESS.
    let transport = Arc::new(MockTransport::with_script(vec![
        MockBehavior::Hang(Duration::from_millis(300)),
        MockBehavior::Reply(json!({"status": "SUCCESS"})),
    ]));
    let client = MessagingClient::new(transport.clone());

    let pattern = naming::pattern("order", "create");
    let options = InvocationOptions::default()
        .with_timeout_ms(100)
        .with_retries(1);
    let response = client
        .send_with_options(&pattern, json!({"id": 1}), options)
        .await
        .unwrap();

    assert_eq!(response, json!({"status": "SUCCESS"}));
    assert_eq!(transport.attempts().await, 2);
}

#[tokio::test]
async fn slow_transport_with_zero_retries_times_out_after_one_attempt() {
    let transport = Arc::new(MockTransport::with_script(vec![MockBehavior::Hang(
        Duration::from_millis(300),
    )]));
    let client = MessagingClient::new(transport.clone());

    let pattern = naming::pattern("order", "create");
    let options = InvocationOptions::default()
        .with_timeout_ms(50)
        .with_retries(0);
    let error = client
        .send_with_options(&pattern, json!({"id": 1}), options)
        .await
        .unwrap_err();

    assert!(matches!(error, MessagingError::Timeout { timeout_ms: 50, .. }));
    assert_eq!(transport.attempts().await, 1);
}

#[tokio::test]
async fn each_attempt_gets_the_full_timeout_budget() {
    // Two hanging attempts with a 50ms deadline each: the second attempt must
    // also run for ~50ms, so total elapsed time is at least two deadlines.
    let transport = Arc::new(MockTransport::with_script(vec![
        MockBehavior::Hang(Duration::from_millis(300)),
        MockBehavior::Hang(Duration::from_millis(300)),
    ]));
    let client = MessagingClient::new(transport.clone());

    let pattern = naming::pattern("order", "create");
    let options = InvocationOptions::default()
        .with_timeout_ms(50)
        .with_retries(1);

    let start = Instant::now();
    let error = client
        .send_with_options(&pattern, json!({}), options)
        .await
        .unwrap_err();
    let elapsed = start.elapsed();

    assert!(error.is_timeout());
    assert_eq!(transport.attempts().await, 2);
    assert!(
        elapsed >= Duration::from_millis(100),
        "expected at least two full deadlines, got {elapsed:?}"
    );
}

#[tokio::test]
async fn terminal_error_reflects_the_last_attempt() {
    // Timeout then transport failure: the surfaced error is the transport one.
    let transport = Arc::new(MockTransport::with_script(vec![
        MockBehavior::Hang(Duration::from_millis(300)),
        MockBehavior::Fail("channel closed".to_string()),
    ]));
    let client = MessagingClient::new(transport.clone());

    let pattern = naming::pattern("order", "create");
    let options = InvocationOptions::default()
        .with_timeout_ms(50)
        .with_retries(1);
    let error = client
        .send_with_options(&pattern, json!({}), options)
        .await
        .unwrap_err();

    match error {
        MessagingError::Transport { message, .. } => {
            assert!(message.contains("channel closed"));
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn emit_does_not_block_on_a_response() {
    // The mock's send path would hang; emit must not go anywhere near it.
    let transport = Arc::new(MockTransport::with_script(vec![MockBehavior::Hang(
        Duration::from_secs(10),
    )]));
    let client = MessagingClient::new(transport.clone());

    let pattern = naming::pattern("order", "created");
    let start = Instant::now();
    client.emit(&pattern, json!({"id": 1})).await;

    assert!(start.elapsed() < Duration::from_secs(1));
    assert_eq!(transport.get_emitted().await.len(), 1);
    assert_eq!(transport.attempts().await, 0);
}

#[tokio::test]
async fn emit_swallows_delivery_failure() {
    let transport = Arc::new(MockTransport::new().with_emit_failure());
    let client = MessagingClient::new(transport);

    let pattern = naming::pattern("order", "created");
    // Must return without panicking or surfacing an error.
    client.emit(&pattern, json!({"id": 1})).await;
}

#[tokio::test]
async fn health_check_reduces_connect_outcome_to_bool() {
    let healthy = MessagingClient::new(Arc::new(MockTransport::new()));
    assert!(healthy.health_check().await);

    let unhealthy = MessagingClient::new(Arc::new(MockTransport::new().with_connect_failure()));
    assert!(!unhealthy.health_check().await);
}

#[tokio::test]
async fn concurrent_sends_are_independent() {
    let transport = Arc::new(MockTransport::new());
    let client = Arc::new(MessagingClient::new(transport.clone()));

    let mut handles = Vec::new();
    for i in 0..8 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            let pattern = naming::pattern("order", "create");
            client.send(&pattern, json!({"id": i})).await
        }));
    }

    for result in futures::future::join_all(handles).await {
        assert!(result.unwrap().is_ok());
    }
    assert_eq!(transport.attempts().await, 8);
}
