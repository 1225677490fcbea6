//! Conversation engine for Docent.
//!
//! Provides:
//! - the [`Turn`] / [`Role`] conversation data model
//! - an OpenAI chat-completions client behind the [`CompletionClient`] seam
//! - the [`CompletionGateway`], which adds timeout/retry policy and document
//!   summarization on top of a client
//! - the [`Conversation`] manager, which owns history and the loaded document

pub mod gateway;
pub mod openai;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use async_trait::async_trait;

pub use gateway::{render_failure, CompletionGateway, RequestPolicy};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{Conversation, DocumentInjection, DocumentLoaded, Reply};

/// A remote chat-completion service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the full ordered turn list and return the first candidate reply.
    async fn send(&self, turns: &[Turn]) -> Result<CompletionResponse, AiError>;
}

/// One role-tagged message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

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

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API key not set (expected in ${0})")]
    MissingApiKey(String),
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl AiError {
    /// Whether a fresh attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AiError::RateLimited | AiError::NetworkError(_) | AiError::Timeout(_)
        )
    }
}
