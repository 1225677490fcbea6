//! In-memory completion clients for tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::{AiError, CompletionClient, CompletionResponse, TokenUsage, Turn};

/// Replays scripted results in order and records every request.
/// Once the script runs out it answers `"ok"`.
pub(crate) struct ScriptedClient {
    script: Mutex<VecDeque<Result<String, AiError>>>,
    requests: Mutex<Vec<Vec<Turn>>>,
}

impl ScriptedClient {
    pub(crate) fn new(script: Vec<Result<String, AiError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Vec<Turn>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn send(&self, turns: &[Turn]) -> Result<CompletionResponse, AiError> {
        self.requests.lock().unwrap().push(turns.to_vec());
        let next = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("ok".into()));
        next.map(|content| CompletionResponse {
            content,
            usage: TokenUsage::default(),
        })
    }
}

/// Never answers before `delay` has passed.
pub(crate) struct SlowClient {
    delay: Duration,
    calls: AtomicUsize,
}

impl SlowClient {
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for SlowClient {
    async fn send(&self, _turns: &[Turn]) -> Result<CompletionResponse, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(CompletionResponse {
            content: "too late".into(),
            usage: TokenUsage::default(),
        })
    }
}
