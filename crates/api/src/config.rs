use std::time::Duration;

use axum::http::HeaderValue;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}

fn env_lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`). Generation calls
    /// several LLM requests in a row, so this is longer than usual.
    pub request_timeout_secs: u64,
    /// Directory holding the JSON collection files (default: `data`).
    pub data_dir: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub json_logs: bool,
    /// Language model provider settings.
    pub llm: LlmConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                      |
    /// | `DATA_DIR`             | `data`                     |
    /// | `LOG_FORMAT`           | `text` (`json` to switch)  |
    ///
    /// See [`LlmConfig::from_env`] for the provider settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Same as [`ServerConfig::from_env`] but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", "u16", 8000u16)?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            if origin.parse::<HeaderValue>().is_err() {
                return Err(ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    expected: "comma-separated list of origins",
                    value: origin.clone(),
                });
            }
        }

        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64", 120u64)?;
        let data_dir = lookup("DATA_DIR").unwrap_or_else(|| "data".into());
        let json_logs = lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));
        let llm = LlmConfig::from_lookup(&lookup)?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            data_dir,
            json_logs,
            llm,
        })
    }
}

// ---------------------------------------------------------------------------
// LLM provider
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi,
    Gemini,
}

impl LlmProvider {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "openai",
            Self::Gemini => "gemini",
        }
    }
}

impl std::str::FromStr for LlmProvider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    /// Provider for idiom and fun fact prompts; `None` means `provider`.
    pub idiom_provider: Option<LlmProvider>,
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    pub gemini_api_key: String,
    pub gemini_model: String,
    /// Deadline for a single provider call.
    pub timeout: Duration,
    /// Attempts per completion, including the first.
    pub max_attempts: u32,
}

impl LlmConfig {
    /// | Env Var              | Default                |
    /// |----------------------|------------------------|
    /// | `LLM_PROVIDER`       | `openai`               |
    /// | `LLM_IDIOM_PROVIDER` | same as `LLM_PROVIDER` |
    /// | `OPENAI_API_KEY`     | (empty)                |
    /// | `OPENAI_MODEL`       | `gpt-4o-mini`          |
    /// | `OPENAI_BASE_URL`    | OpenAI public API      |
    /// | `GEMINI_API_KEY`     | (empty)                |
    /// | `GEMINI_MODEL`       | `gemini-2.0-flash`     |
    /// | `LLM_TIMEOUT_SECS`   | `60`                   |
    /// | `LLM_MAX_ATTEMPTS`   | `3`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let provider = parse_var(lookup, "LLM_PROVIDER", "provider (openai | gemini)", LlmProvider::OpenAi)?;
        let idiom_provider = match lookup("LLM_IDIOM_PROVIDER") {
            None => None,
            Some(_) => Some(parse_var(
                lookup,
                "LLM_IDIOM_PROVIDER",
                "provider (openai | gemini)",
                provider,
            )?),
        };
        let timeout_secs = parse_var(lookup, "LLM_TIMEOUT_SECS", "u64", 60u64)?;
        let max_attempts = parse_var(lookup, "LLM_MAX_ATTEMPTS", "u32", 3u32)?;

        Ok(Self {
            provider,
            idiom_provider,
            openai_api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| tandem_llm::openai::DEFAULT_MODEL.into()),
            openai_base_url: lookup("OPENAI_BASE_URL"),
            gemini_api_key: lookup("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: lookup("GEMINI_MODEL").unwrap_or_else(|| tandem_llm::gemini::DEFAULT_MODEL.into()),
            timeout: Duration::from_secs(timeout_secs),
            max_attempts,
        })
    }

    /// Provider answering idiom and fun fact prompts.
    pub fn idiom_provider(&self) -> LlmProvider {
        self.idiom_provider.unwrap_or(self.provider)
    }
}
