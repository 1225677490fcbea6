//! Built-in defaults shared by the config schema and the runtime types.
//!
//! A missing config section and a hand-built client resolve to the same
//! values through these constants.

pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Sampling temperature sent with every request.
pub const DEFAULT_TEMPERATURE: f64 = 0.4;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the API key.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful assistant.";

pub const DEFAULT_SUMMARIZER_PROMPT: &str =
    "You are a helpful assistant that summarizes documents.";
