//! OpenAI client struct, request building, and response parsing.

use tracing::warn;

use crate::{AiError, CompletionResponse, TokenUsage, Turn};

use super::config::OpenAiConfig;

/// OpenAI chat-completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub(crate) fn chat_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// Build the JSON request body: every turn in order, plus the fixed
    /// model and temperature.
    pub(crate) fn build_request_body(&self, turns: &[Turn]) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "messages": turns,
        })
    }

    /// Extract the first candidate's text and the token usage.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<CompletionResponse, AiError> {
        if let Some(message) = json["error"]["message"].as_str() {
            return Err(AiError::ApiError(message.to_string()));
        }

        let choice = json["choices"]
            .as_array()
            .and_then(|choices| choices.first())
            .ok_or_else(|| AiError::ParseError("response contained no choices".into()))?;

        let content = match choice["message"]["content"].as_str() {
            Some(text) => text.to_string(),
            None => {
                warn!("first choice has no text content");
                String::new()
            }
        };

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(CompletionResponse { content, usage })
    }
}

/// Turn a non-success HTTP response body into a readable message,
/// preferring the service's own `error.message`.
pub(crate) fn http_error_message(status: reqwest::StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(String::from))
        .unwrap_or_else(|| body.chars().take(200).collect());
    format!("HTTP {status}: {detail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> OpenAiClient {
        OpenAiClient::new(OpenAiConfig::new(Some("sk-test".into())))
    }

    #[test]
    fn request_body_carries_turns_in_order() {
        let turns = vec![
            Turn::system("You are a helpful assistant."),
            Turn::user("Hi"),
            Turn::assistant("Hello!"),
            Turn::user("Bye"),
        ];
        let body = client().build_request_body(&turns);

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["temperature"], 0.4);
        assert_eq!(
            body["messages"],
            json!([
                {"role": "system", "content": "You are a helpful assistant."},
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello!"},
                {"role": "user", "content": "Bye"},
            ])
        );
    }

    #[test]
    fn chat_url_tolerates_trailing_slash() {
        let client = OpenAiClient::new(
            OpenAiConfig::new(None).with_base_url("http://localhost:8080/v1/"),
        );
        assert_eq!(client.chat_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn parse_takes_first_choice_only() {
        let response = client()
            .parse_response(json!({
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "first"}},
                    {"index": 1, "message": {"role": "assistant", "content": "second"}},
                ],
                "usage": {"prompt_tokens": 12, "completion_tokens": 3, "total_tokens": 15},
            }))
            .unwrap();

        assert_eq!(response.content, "first");
        assert_eq!(response.usage.input_tokens, 12);
        assert_eq!(response.usage.output_tokens, 3);
    }

    #[test]
    fn parse_empty_choices_is_an_error() {
        let err = client().parse_response(json!({"choices": []})).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));

        let err = client().parse_response(json!({"id": "x"})).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn parse_null_content_is_empty_reply() {
        let response = client()
            .parse_response(json!({
                "choices": [{"message": {"role": "assistant", "content": null}}],
            }))
            .unwrap();
        assert_eq!(response.content, "");
        assert_eq!(response.usage.total_tokens(), 0);
    }

    #[test]
    fn parse_service_error_object() {
        let err = client()
            .parse_response(json!({"error": {"message": "model overloaded"}}))
            .unwrap_err();
        assert_eq!(err.to_string(), "API error: model overloaded");
    }

    #[test]
    fn http_error_prefers_service_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            http_error_message(reqwest::StatusCode::UNAUTHORIZED, body),
            "HTTP 401 Unauthorized: Incorrect API key provided"
        );

        assert_eq!(
            http_error_message(reqwest::StatusCode::BAD_GATEWAY, "upstream down"),
            "HTTP 502 Bad Gateway: upstream down"
        );
    }
}
