//! OpenAI chat-completions client.
//!
//! Implements the `CompletionClient` trait against
//! `POST {base_url}/chat/completions` with bearer-token authentication.
//! Any server speaking the same wire format can be targeted through
//! `base_url`.

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
