use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::LlmError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// A chat-style completion request: optional system instruction followed by
/// the conversation so far. The last message is normally the user prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub messages: Vec<ChatMessage>,
}

impl CompletionRequest {
    /// Single-turn request with just a user prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            messages: vec![ChatMessage::user(prompt)],
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Text of the last user message, if any.
    pub fn prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

/// A text-completion provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Short provider name for logs.
    fn name(&self) -> &str;

    /// Run one completion and return the reply text.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

#[async_trait]
impl<T: LlmClient + ?Sized> LlmClient for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        (**self).complete(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_is_last_user_message() {
        let mut request = CompletionRequest::new("first").with_system("be brief");
        request.messages.push(ChatMessage::assistant("ok"));
        request.messages.push(ChatMessage::user("second"));

        assert_eq!(request.prompt(), Some("second"));
        assert_eq!(request.system.as_deref(), Some("be brief"));
    }
}
