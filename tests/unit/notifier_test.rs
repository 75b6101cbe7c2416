//! Tests for webhook delivery and rate-limit handling

use crate::common::mocks::{RecordingSleeper, ScriptedWebhook};
use noticewatch::core::ports::NotifyError;
use noticewatch::core::services::Notifier;
use std::time::Duration;

#[test]
fn test_success_posts_once() {
    let webhook = ScriptedWebhook::new().respond(204, "");
    let sleeper = RecordingSleeper::new();

    Notifier::new(&webhook, &sleeper).send("hello").unwrap();

    assert_eq!(webhook.posts(), vec!["hello"]);
    assert!(sleeper.naps().is_empty());
}

#[test]
fn test_any_2xx_is_success() {
    let webhook = ScriptedWebhook::new().respond(200, r#"{"id": "1"}"#);
    let sleeper = RecordingSleeper::new();
    assert!(Notifier::new(&webhook, &sleeper).send("hello").is_ok());
}

#[test]
fn test_rate_limit_retries_once_after_retry_after() {
    let webhook = ScriptedWebhook::new()
        .respond(429, r#"{"message": "You are being rate limited.", "retry_after": 1.5, "global": false}"#)
        .respond(204, "");
    let sleeper = RecordingSleeper::new();

    Notifier::new(&webhook, &sleeper).send("hello").unwrap();

    assert_eq!(webhook.posts(), vec!["hello", "hello"]);
    assert_eq!(sleeper.naps(), vec![Duration::from_millis(1500)]);
}

#[test]
fn test_rate_limit_without_retry_after_uses_fallback() {
    let webhook = ScriptedWebhook::new().respond(429, "slow down").respond(204, "");
    let sleeper = RecordingSleeper::new();

    Notifier::new(&webhook, &sleeper).send("hello").unwrap();

    assert_eq!(sleeper.naps(), vec![Duration::from_secs(2)]);
}

#[test]
fn test_custom_fallback() {
    let webhook = ScriptedWebhook::new().respond(429, "{}").respond(204, "");
    let sleeper = RecordingSleeper::new();

    Notifier::new(&webhook, &sleeper)
        .with_fallback_retry(Duration::from_millis(250))
        .send("hello")
        .unwrap();

    assert_eq!(sleeper.naps(), vec![Duration::from_millis(250)]);
}

#[test]
fn test_second_rate_limit_fails() {
    let webhook = ScriptedWebhook::new()
        .respond(429, r#"{"retry_after": 1}"#)
        .respond(429, r#"{"retry_after": 4}"#);
    let sleeper = RecordingSleeper::new();

    let err = Notifier::new(&webhook, &sleeper).send("hello").unwrap_err();

    assert!(matches!(err, NotifyError::RateLimited { .. }));
    assert_eq!(webhook.posts().len(), 2);
    assert_eq!(sleeper.naps(), vec![Duration::from_secs(1)]);
}

#[test]
fn test_retry_then_server_error_fails() {
    let webhook = ScriptedWebhook::new()
        .respond(429, r#"{"retry_after": 0.5}"#)
        .respond(500, "oops");
    let sleeper = RecordingSleeper::new();

    let err = Notifier::new(&webhook, &sleeper).send("hello").unwrap_err();
    assert!(matches!(err, NotifyError::Status { status: 500, .. }));
}

#[test]
fn test_other_status_is_not_retried() {
    let webhook = ScriptedWebhook::new().respond(400, r#"{"message": "Cannot send an empty message"}"#);
    let sleeper = RecordingSleeper::new();

    let err = Notifier::new(&webhook, &sleeper).send("hello").unwrap_err();

    assert!(matches!(err, NotifyError::Status { status: 400, .. }));
    assert_eq!(webhook.posts().len(), 1);
    assert!(sleeper.naps().is_empty());
}

#[test]
fn test_transport_error() {
    let webhook = ScriptedWebhook::new().fail("connection reset");
    let sleeper = RecordingSleeper::new();

    let err = Notifier::new(&webhook, &sleeper).send("hello").unwrap_err();
    assert!(err.to_string().contains("connection reset"));
}
