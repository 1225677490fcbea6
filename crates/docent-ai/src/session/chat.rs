//! Async chat methods for Conversation.

use tracing::debug;

use crate::gateway::CompletionGateway;
use crate::Turn;

use super::manager::Conversation;
use super::types::Reply;

impl Conversation {
    /// Add a user message (and the document, per the injection policy),
    /// ask the gateway for a reply, and record it as an assistant turn.
    ///
    /// A failed completion is recorded too, as its rendered error text, so
    /// every message is paired with exactly one assistant turn. History is
    /// only extended once the reply is known.
    pub async fn handle_user_message(
        &mut self,
        gateway: &CompletionGateway,
        text: impl Into<String>,
    ) -> Reply {
        let mut pending = vec![Turn::user(text)];
        if let Some(document_turn) = self.pending_document_turn() {
            pending.push(document_turn);
        }
        let injected = pending.len() == 2;

        let request: Vec<Turn> = self.history.iter().chain(&pending).cloned().collect();
        debug!(turns = request.len(), injected, "sending conversation");

        let reply = Reply::from_result(gateway.complete(&request).await);

        self.history.extend(pending);
        self.history.push(Turn::assistant(reply.text()));
        if injected {
            self.document_sent = true;
        }
        reply
    }

    /// Summarize the loaded document in a standalone request. History is
    /// not touched. Returns `None` when no document is loaded.
    pub async fn summarize_document(&self, gateway: &CompletionGateway) -> Option<Reply> {
        let document = self.document()?;
        Some(Reply::from_result(gateway.summarize(document).await))
    }
}
