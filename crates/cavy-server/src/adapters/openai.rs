//! OpenAI Completion Adapter
//!
//! Implements the completion-provider port against the OpenAI
//! chat-completions API using reqwest. One call per request, no retries;
//! any transport or API error maps to `DomainError::Completion`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use cavy::{
    ChatMessage, CompletionOptions, CompletionProvider, CompletionResponse, DomainError,
    TokenUsage,
};

use crate::config::ServerConfig;

const COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Completion provider backed by the OpenAI API
pub struct OpenAiCompletion {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct CompletionReply {
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

impl OpenAiCompletion {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: config.openai_api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Map the wire reply to the port's response type.
    fn into_response(reply: CompletionReply, fallback_model: &str) -> Result<CompletionResponse, DomainError> {
        let model = reply.model.unwrap_or_else(|| fallback_model.to_string());
        let usage = reply
            .usage
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            })
            .unwrap_or_default();
        let content = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| DomainError::Completion("no completion returned".to_string()))?;

        Ok(CompletionResponse {
            content,
            model,
            usage,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompletion {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        let request = CompletionRequest {
            model: &self.model,
            messages,
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Completion(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(DomainError::Completion(format!(
                "OpenAI API error ({status}): {error_text}"
            )));
        }

        let reply: CompletionReply = response
            .json()
            .await
            .map_err(|e| DomainError::Completion(format!("malformed response: {e}")))?;

        Self::into_response(reply, &self.model)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let messages = vec![
            ChatMessage::system("be a guinea pig"),
            ChatMessage::user("hello"),
        ];
        let request = CompletionRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
            max_tokens: Some(300),
            temperature: Some(0.7),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["max_tokens"], 300);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hello");
    }

    #[test]
    fn test_reply_maps_first_choice() {
        let reply: CompletionReply = serde_json::from_value(serde_json::json!({
            "model": "gpt-3.5-turbo-0125",
            "choices": [
                { "message": { "role": "assistant", "content": "[Nimbus] Wheek!" } }
            ],
            "usage": { "prompt_tokens": 50, "completion_tokens": 8, "total_tokens": 58 }
        }))
        .unwrap();
        let response = OpenAiCompletion::into_response(reply, "gpt-3.5-turbo").unwrap();
        assert_eq!(response.content, "[Nimbus] Wheek!");
        assert_eq!(response.model, "gpt-3.5-turbo-0125");
        assert_eq!(response.usage.total_tokens, 58);
    }

    #[test]
    fn test_empty_choices_is_a_completion_error() {
        let reply: CompletionReply =
            serde_json::from_value(serde_json::json!({ "choices": [] })).unwrap();
        let result = OpenAiCompletion::into_response(reply, "gpt-3.5-turbo");
        assert!(matches!(result, Err(DomainError::Completion(_))));
    }
}
