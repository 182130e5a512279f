//! Chat-completion client for the OpenAI-compatible model API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, instrument};

use crate::Result;
use crate::config::ModelConfig;
use crate::error::TripWiseError;

/// Per-call sampling knobs
#[derive(Debug, Clone, Copy)]
pub struct CompletionParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Client for one OpenAI-compatible chat-completions endpoint
pub struct ModelClient {
    client: Client,
    config: ModelConfig,
}

impl ModelClient {
    #[must_use]
    pub fn new(config: ModelConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// One chat-completion round trip: system and user message in, parsed
    /// JSON object out. The model is asked for a JSON response format, so
    /// content that comes back as anything else is a malformed reply. Single
    /// attempt per request.
    #[instrument(skip(self, system, user), fields(model = %self.config.model))]
    pub async fn complete_json(
        &self,
        system: &str,
        user: &str,
        params: CompletionParams,
    ) -> Result<Value> {
        let url = chat_completions_url(&self.config.base_url);
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        debug!("Calling chat completions at {}", url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TripWiseError::model(format!("Request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| TripWiseError::model(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            error!("Chat completion failed with HTTP {}", status);
            return Err(TripWiseError::model(format!(
                "HTTP {status}: {}",
                upstream_message(&text)
            )));
        }

        let reply: ChatCompletionResponse = serde_json::from_str(&text)
            .map_err(|e| TripWiseError::model(format!("Unexpected response body: {e}")))?;

        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| TripWiseError::model("Reply contained no message content"))?;

        serde_json::from_str(&content).map_err(|e| {
            TripWiseError::malformed_reply(format!("Reply content is not valid JSON: {e}"))
        })
    }
}

/// Accepts base URLs with or without a trailing slash, or with the full
/// chat-completions path already appended.
fn chat_completions_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/chat/completions")
    }
}

/// Pulls `error.message` out of an upstream failure body when present
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_completions_url() {
        assert_eq!(
            chat_completions_url("https://api.openai.com/v1"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("https://api.openai.com/v1/"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("https://api.openai.com/v1/chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_upstream_message_extraction() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        assert_eq!(upstream_message(body), "Incorrect API key provided");

        assert_eq!(upstream_message("service unavailable"), "service unavailable");
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatCompletionRequest {
            model: "gpt-4o-mini",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature: 0.7,
            max_tokens: 2000,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["response_format"]["type"], "json_object");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 2000);
    }
}
