//! Conversation struct, document context, and history access.

use std::path::Path;

use docent_docs::{DocumentLoader, LoadError};
use tracing::{info, warn};

use crate::{Role, Turn};

use super::types::{DocumentInjection, DocumentLoaded, DEFAULT_SYSTEM_PROMPT, DOCUMENT_LABEL};

/// Turn history plus the currently loaded document.
///
/// The first turn is always the system turn; history only ever grows.
pub struct Conversation {
    /// Ordered, append-only turn history.
    pub(super) history: Vec<Turn>,
    /// Text of the most recently loaded document.
    pub(super) document: Option<String>,
    /// Whether the current document has been sent at least once.
    pub(super) document_sent: bool,
    pub(super) injection: DocumentInjection,
    loader: DocumentLoader,
}

impl Conversation {
    /// Start a conversation seeded with a single system turn and no document.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            history: vec![Turn::system(system_prompt)],
            document: None,
            document_sent: false,
            injection: DocumentInjection::default(),
            loader: DocumentLoader::default(),
        }
    }

    pub fn with_injection(mut self, injection: DocumentInjection) -> Self {
        self.injection = injection;
        self
    }

    pub fn with_loader(mut self, loader: DocumentLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Load a document as the conversation's document context.
    ///
    /// On success the new text replaces any previous document. On any
    /// failure the document context is cleared. History is never touched.
    pub fn handle_document_command(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<DocumentLoaded, LoadError> {
        let path = path.as_ref();
        let result = if path.exists() {
            self.loader.load(path)
        } else {
            Err(LoadError::NotFound(path.to_path_buf()))
        };

        self.document_sent = false;
        match result {
            Ok(text) => {
                let loaded = DocumentLoaded {
                    path: path.to_path_buf(),
                    chars: text.chars().count(),
                };
                info!(path = %path.display(), chars = loaded.chars, "document context replaced");
                self.document = Some(text);
                Ok(loaded)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "document load failed");
                self.document = None;
                Err(e)
            }
        }
    }

    /// The user turn carrying the document, if one should accompany the
    /// next message.
    pub(super) fn pending_document_turn(&self) -> Option<Turn> {
        let text = self.document.as_deref().filter(|t| !t.is_empty())?;
        if self.injection == DocumentInjection::Once && self.document_sent {
            return None;
        }
        Some(Turn::user(format!("{DOCUMENT_LABEL}{text}")))
    }

    /// Get the full conversation history, system turn first.
    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    pub fn system_prompt(&self) -> &str {
        debug_assert_eq!(self.history[0].role, Role::System);
        &self.history[0].content
    }

    /// Text of the loaded document, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Number of turns in history, including the system turn.
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_PROMPT)
    }
}
