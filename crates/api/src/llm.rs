//! Construction of the production LLM clients from configuration.

use std::sync::Arc;

use tandem_llm::{GeminiClient, LlmClient, OpenAiClient, RetryConfig, RetryingClient};

use crate::config::{LlmConfig, LlmProvider};

/// Provider clients handed to the services.
#[derive(Clone)]
pub struct LlmClients {
    /// Exercises and cultural notes.
    pub primary: Arc<dyn LlmClient>,
    /// Idioms and fun facts.
    pub idioms: Arc<dyn LlmClient>,
}

impl LlmClients {
    /// One client for every kind of content.
    pub fn single(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            idioms: llm.clone(),
            primary: llm,
        }
    }
}

/// Build the configured clients. When idioms use the main provider the
/// same client is shared.
pub fn build_clients(config: &LlmConfig) -> LlmClients {
    let primary = build_client(config, config.provider);
    if config.idiom_provider() == config.provider {
        return LlmClients::single(primary);
    }
    LlmClients {
        idioms: build_client(config, config.idiom_provider()),
        primary,
    }
}

/// Build one provider client, wrapped with timeout and retry.
///
/// A missing API key is not fatal: the server still starts and generation
/// endpoints answer 503 until a key is configured.
pub fn build_client(config: &LlmConfig, provider: LlmProvider) -> Arc<dyn LlmClient> {
    let retry = RetryConfig {
        max_attempts: config.max_attempts,
        attempt_timeout: config.timeout,
        ..RetryConfig::default()
    };

    match provider {
        LlmProvider::OpenAi => {
            if config.openai_api_key.is_empty() {
                tracing::warn!("OPENAI_API_KEY is not set; content generation will be unavailable");
            }
            let mut client =
                OpenAiClient::new(config.openai_api_key.clone()).with_model(config.openai_model.clone());
            if let Some(url) = &config.openai_base_url {
                client = client.with_base_url(url.clone());
            }
            tracing::info!(provider = "openai", model = %config.openai_model, "LLM client configured");
            Arc::new(RetryingClient::new(client, retry))
        }
        LlmProvider::Gemini => {
            if config.gemini_api_key.is_empty() {
                tracing::warn!("GEMINI_API_KEY is not set; content generation will be unavailable");
            }
            let client =
                GeminiClient::new(config.gemini_api_key.clone()).with_model(config.gemini_model.clone());
            tracing::info!(provider = "gemini", model = %config.gemini_model, "LLM client configured");
            Arc::new(RetryingClient::new(client, retry))
        }
    }
}
