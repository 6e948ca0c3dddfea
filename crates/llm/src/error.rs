use std::time::Duration;

/// Failure talking to a completion provider.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("LLM provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("LLM request timed out after {0:?}")]
    Timeout(Duration),

    #[error("LLM provider returned no content")]
    EmptyResponse,

    #[error("No API key configured for {provider}")]
    MissingApiKey { provider: &'static str },
}

impl LlmError {
    /// Whether another attempt could plausibly succeed: timeouts, transport
    /// failures, rate limiting and provider-side errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(e) => !(e.is_builder() || e.is_decode() || e.is_status()),
            Self::Api { status, .. } => *status == 429 || *status >= 500,
            Self::Timeout(_) => true,
            Self::EmptyResponse | Self::MissingApiKey { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> LlmError {
        LlmError::Api {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn rate_limit_and_server_errors_are_retryable() {
        assert!(api(429).is_retryable());
        assert!(api(500).is_retryable());
        assert!(api(503).is_retryable());
        assert!(LlmError::Timeout(Duration::from_secs(1)).is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        assert!(!api(400).is_retryable());
        assert!(!api(401).is_retryable());
        assert!(!LlmError::EmptyResponse.is_retryable());
        assert!(!LlmError::MissingApiKey { provider: "openai" }.is_retryable());
    }
}
