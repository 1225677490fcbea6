//! Completion gateway: the single path from a turn list to a reply string.
//!
//! Wraps a [`CompletionClient`] with an optional per-attempt timeout and a
//! bounded retry count for transient failures. Both default to off, which
//! means one unbounded attempt per request.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::{AiError, CompletionClient, CompletionResponse, Turn};

/// Prefix of the text shown in place of a reply when a completion fails.
pub const FAILURE_PREFIX: &str = "Error querying OpenAI";

pub use docent_common::defaults::DEFAULT_SUMMARIZER_PROMPT;

const SUMMARY_REQUEST_PREFIX: &str = "Summarize this document: ";

/// Render a completion failure the way it is shown to the user and
/// recorded in history.
pub fn render_failure(err: &AiError) -> String {
    format!("{FAILURE_PREFIX}: {err}")
}

/// Timeout and retry policy for completion requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestPolicy {
    /// Upper bound for a single attempt. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Extra attempts after a transient failure.
    pub retries: u32,
}

impl RequestPolicy {
    /// Build from config-style values, where a zero timeout means none.
    pub fn from_secs(timeout_secs: u32, retries: u32) -> Self {
        Self {
            timeout: (timeout_secs > 0).then(|| Duration::from_secs(u64::from(timeout_secs))),
            retries,
        }
    }
}

/// Sends conversations to the completion service.
pub struct CompletionGateway {
    client: Arc<dyn CompletionClient>,
    policy: RequestPolicy,
    summarizer_prompt: String,
}

impl CompletionGateway {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self {
            client,
            policy: RequestPolicy::default(),
            summarizer_prompt: DEFAULT_SUMMARIZER_PROMPT.to_string(),
        }
    }

    pub fn with_policy(mut self, policy: RequestPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_summarizer_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.summarizer_prompt = prompt.into();
        self
    }

    /// Send `turns` and return the first candidate's text.
    pub async fn complete(&self, turns: &[Turn]) -> Result<String, AiError> {
        let max_attempts = self.policy.retries.saturating_add(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.send_once(turns).await {
                Ok(response) => {
                    debug!(
                        attempt,
                        input_tokens = response.usage.input_tokens,
                        output_tokens = response.usage.output_tokens,
                        "completion received"
                    );
                    return Ok(response.content);
                }
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    warn!(attempt, max_attempts, error = %e, "completion attempt failed, retrying");
                }
                Err(e) => {
                    warn!(attempt, error = %e, "completion failed");
                    return Err(e);
                }
            }
        }
    }

    /// The two-turn request used by [`summarize`](Self::summarize).
    pub fn summary_request(&self, document_text: &str) -> Vec<Turn> {
        vec![
            Turn::system(self.summarizer_prompt.clone()),
            Turn::user(format!("{SUMMARY_REQUEST_PREFIX}{document_text}")),
        ]
    }

    /// Summarize a document in a standalone request, separate from any
    /// conversation history.
    pub async fn summarize(&self, document_text: &str) -> Result<String, AiError> {
        self.complete(&self.summary_request(document_text)).await
    }

    async fn send_once(&self, turns: &[Turn]) -> Result<CompletionResponse, AiError> {
        match self.policy.timeout {
            Some(limit) => tokio::time::timeout(limit, self.client.send(turns))
                .await
                .map_err(|_| AiError::Timeout(limit))?,
            None => self.client.send(turns).await,
        }
    }
}
