//! Completion model configuration types.

use docent_common::defaults::{
    DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use serde::{Deserialize, Serialize};

/// Remote model settings. These are fixed for the lifetime of a run and
/// never exposed to the conversation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
    pub base_url: String,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.into(),
            temperature: DEFAULT_TEMPERATURE,
            base_url: DEFAULT_BASE_URL.into(),
            api_key_env: DEFAULT_API_KEY_ENV.into(),
        }
    }
}
