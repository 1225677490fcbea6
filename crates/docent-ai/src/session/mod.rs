//! Conversation session management.
//!
//! A [`Conversation`] holds the turn history (seeded with one system turn)
//! and at most one loaded document, and decides what is sent to the
//! completion gateway on each user message.

mod chat;
mod manager;
mod types;


pub use manager::Conversation;
pub use types::{DocumentInjection, DocumentLoaded, Reply, DEFAULT_SYSTEM_PROMPT, DOCUMENT_LABEL};
