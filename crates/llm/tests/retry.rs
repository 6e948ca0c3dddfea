use std::time::Duration;

use assert_matches::assert_matches;
use async_trait::async_trait;

use tandem_llm::{CompletionRequest, LlmClient, LlmError, RetryConfig, RetryingClient, ScriptedLlm};

fn fast_config(max_attempts: u32) -> RetryConfig {
    RetryConfig {
        max_attempts,
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(4),
        multiplier: 2.0,
        attempt_timeout: Duration::from_secs(5),
    }
}

fn unavailable() -> LlmError {
    LlmError::Api {
        status: 503,
        body: "overloaded".to_string(),
    }
}

#[tokio::test]
async fn retries_retryable_errors_until_success() {
    let inner = ScriptedLlm::new();
    inner.push_error(unavailable());
    inner.push_error(LlmError::Timeout(Duration::from_secs(1)));
    inner.push_reply("{\"ok\": true}");

    let client = RetryingClient::new(inner, fast_config(3));
    let reply = client.complete(&CompletionRequest::new("hi")).await.unwrap();

    assert_eq!(reply, "{\"ok\": true}");
    assert_eq!(client.into_inner().call_count(), 3);
}

#[tokio::test]
async fn gives_up_after_max_attempts() {
    let inner = ScriptedLlm::new();
    for _ in 0..5 {
        inner.push_error(unavailable());
    }

    let client = RetryingClient::new(inner, fast_config(3));
    let err = client.complete(&CompletionRequest::new("hi")).await.unwrap_err();

    assert_matches!(err, LlmError::Api { status: 503, .. });
    let inner = client.into_inner();
    assert_eq!(inner.call_count(), 3);
    assert_eq!(inner.remaining(), 2);
}

#[tokio::test]
async fn does_not_retry_client_errors() {
    let inner = ScriptedLlm::new();
    inner.push_error(LlmError::Api {
        status: 401,
        body: "bad key".to_string(),
    });
    inner.push_reply("never reached");

    let client = RetryingClient::new(inner, fast_config(3));
    let err = client.complete(&CompletionRequest::new("hi")).await.unwrap_err();

    assert_matches!(err, LlmError::Api { status: 401, .. });
    assert_eq!(client.into_inner().call_count(), 1);
}

#[tokio::test]
async fn zero_attempts_still_tries_once() {
    let client = RetryingClient::new(ScriptedLlm::with_replies(["x"]), fast_config(0));
    assert_eq!(client.complete(&CompletionRequest::new("hi")).await.unwrap(), "x");
}

/// Never answers; exercises the per-attempt deadline.
struct Stalled;

#[async_trait]
impl LlmClient for Stalled {
    fn name(&self) -> &str {
        "stalled"
    }

    async fn complete(&self, _request: &CompletionRequest) -> Result<String, LlmError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok(String::new())
    }
}

#[tokio::test]
async fn slow_attempts_time_out_and_are_retried() {
    let config = RetryConfig {
        attempt_timeout: Duration::from_millis(20),
        ..fast_config(2)
    };
    let client = RetryingClient::new(Stalled, config);

    let err = client.complete(&CompletionRequest::new("hi")).await.unwrap_err();
    assert_matches!(err, LlmError::Timeout(d) if d == Duration::from_millis(20));
}
