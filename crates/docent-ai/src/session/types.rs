//! Session types: injection policy, load outcome, and replies.

use std::path::PathBuf;

use crate::gateway::render_failure;
use crate::AiError;

pub use docent_common::defaults::DEFAULT_SYSTEM_PROMPT;

/// Prefix of the user turn that carries document text.
pub const DOCUMENT_LABEL: &str = "Document content: ";

/// When loaded document text is sent along with a user message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentInjection {
    /// Append the document after every user message.
    #[default]
    EveryTurn,
    /// Append the document only after the first user message following
    /// each successful load.
    Once,
}

/// A successfully loaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLoaded {
    pub path: PathBuf,
    /// Length of the extracted text in characters.
    pub chars: usize,
}

/// The outcome of one completion, as recorded in history.
#[derive(Debug)]
pub enum Reply {
    Answer(String),
    /// The completion failed; `text` is what was recorded as the
    /// assistant turn.
    Failed { error: AiError, text: String },
}

impl Reply {
    pub(crate) fn from_result(result: Result<String, AiError>) -> Self {
        match result {
            Ok(text) => Reply::Answer(text),
            Err(error) => Reply::Failed {
                text: render_failure(&error),
                error,
            },
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Reply::Answer(text) | Reply::Failed { text, .. } => text,
        }
    }
}
