//! Conversation configuration types.

use docent_common::defaults::{DEFAULT_SUMMARIZER_PROMPT, DEFAULT_SYSTEM_PROMPT};
use serde::{Deserialize, Serialize};

/// When loaded document text is sent along with user messages.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentInjectionMode {
    /// Re-send the document with every user message.
    #[default]
    EveryTurn,
    /// Send the document with the first message after each upload only.
    Once,
}

/// Conversation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationConfig {
    pub system_prompt: String,
    pub summarizer_prompt: String,
    pub document_injection: DocumentInjectionMode,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            system_prompt: DEFAULT_SYSTEM_PROMPT.into(),
            summarizer_prompt: DEFAULT_SUMMARIZER_PROMPT.into(),
            document_injection: DocumentInjectionMode::EveryTurn,
        }
    }
}
