//! CompletionClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, CompletionClient, CompletionResponse, Turn};

use super::client::{http_error_message, OpenAiClient};

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn send(&self, turns: &[Turn]) -> Result<CompletionResponse, AiError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| AiError::MissingApiKey(self.config.api_key_env.clone()))?;

        let body = self.build_request_body(turns);

        debug!(model = %self.config.model, turns = turns.len(), "OpenAI API request");

        let response = self
            .http
            .post(self.chat_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::NetworkError(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AiError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AiError::ApiError(http_error_message(status, &text)));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpenAiConfig;

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let client = OpenAiClient::new(
            OpenAiConfig::new(None).with_base_url("http://127.0.0.1:1/v1"),
        );
        let err = client.send(&[Turn::user("Hi")]).await.unwrap_err();
        assert!(matches!(err, AiError::MissingApiKey(ref var) if var == "OPENAI_API_KEY"));
    }

    #[tokio::test]
    async fn refused_connection_is_a_network_error() {
        let client = OpenAiClient::new(
            OpenAiConfig::new(Some("sk-test".into())).with_base_url("http://127.0.0.1:1/v1"),
        );
        let err = client.send(&[Turn::user("Hi")]).await.unwrap_err();
        assert!(matches!(err, AiError::NetworkError(_)));
    }
}
