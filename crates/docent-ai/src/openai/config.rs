//! OpenAI client configuration.

use std::fmt;

use docent_common::defaults::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

/// OpenAI client configuration.
///
/// The API key is optional here: a missing key is only reported when a
/// request is actually made.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<String>,
    /// Environment variable the key was (or should have been) read from.
    pub api_key_env: String,
    pub model: String,
    pub temperature: f64,
    pub base_url: String,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("api_key_env", &self.api_key_env)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Read the key from the named environment variable. An unset or empty
    /// variable leaves the key absent.
    pub fn from_env_var(name: &str) -> Self {
        let api_key = std::env::var(name).ok().filter(|k| !k.trim().is_empty());
        Self {
            api_key_env: name.to_string(),
            ..Self::new(api_key)
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}
