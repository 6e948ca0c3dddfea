//! Text-completion clients for exercise and cultural content generation.
//!
//! [`LlmClient`] is the seam the generation services depend on. Production
//! builds use [`OpenAiClient`] or [`GeminiClient`] wrapped in a
//! [`RetryingClient`]; tests use [`ScriptedLlm`].

pub mod client;
pub mod error;
pub mod gemini;
pub mod openai;
pub mod retry;
pub mod scripted;

pub use client::{ChatMessage, CompletionRequest, LlmClient, Role};
pub use error::LlmError;
pub use gemini::GeminiClient;
pub use openai::OpenAiClient;
pub use retry::{RetryConfig, RetryingClient};
pub use scripted::ScriptedLlm;
