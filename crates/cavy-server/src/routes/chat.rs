//! Chat Route - Responder Routing

use axum::{extract::State, routing::post, Json, Router};

use crate::adapters::ThreadRandom;
use crate::models::{ChatRequest, ChatResponse, ErrorResponse};
use crate::routes::ApiError;
use crate::AppState;

/// Answer the latest user turn with attributed guinea-pig reply lines
#[utoipa::path(
    post,
    path = "/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Group reply", body = ChatResponse),
        (status = 400, description = "Malformed request", body = ErrorResponse),
        (status = 502, description = "Completion service failure", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let mut rng = ThreadRandom;
    let reply = state
        .router
        .respond(&payload.messages, payload.happiness, &mut rng)
        .await?;

    tracing::info!(
        happiness = payload.happiness,
        speakers = ?reply.speakers(),
        "chat turn answered"
    );

    Ok(Json(reply.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::StatusCode;

    use cavy::{
        ChatMessage, CompletionOptions, CompletionProvider, CompletionResponse, DomainError,
        ResponderRouter, TokenUsage, Turn,
    };

    use super::*;

    struct CannedProvider(&'static str);

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _options: &CompletionOptions,
        ) -> Result<CompletionResponse, DomainError> {
            Ok(CompletionResponse {
                content: self.0.to_string(),
                model: "canned".to_string(),
                usage: TokenUsage::default(),
            })
        }

        fn provider_name(&self) -> &str {
            "canned"
        }

        fn model_id(&self) -> &str {
            "canned"
        }
    }

    fn state_with(reply: &'static str) -> AppState {
        AppState {
            router: Arc::new(ResponderRouter::new(
                Arc::new(CannedProvider(reply)),
                CompletionOptions::default(),
            )),
        }
    }

    #[tokio::test]
    async fn test_chat_returns_attributed_reply() {
        let state = state_with("[Nimbus] Wheek!\n[o\u{35e}ki] Sugoi!");
        let request = ChatRequest {
            messages: vec![Turn::user("hello pigs")],
            happiness: 90,
        };
        let Json(response) = chat(State(state), Json(request)).await.unwrap();
        assert_eq!(response.role, "assistant");
        assert_eq!(response.speakers, vec!["Nimbus", "o\u{35e}ki"]);
        assert_eq!(
            response.content,
            "[Nimbus] Wheek!\n[o\u{35e}ki] Sugoi!"
        );
    }

    #[tokio::test]
    async fn test_empty_messages_is_bad_request() {
        let state = state_with("unused");
        let request = ChatRequest {
            messages: vec![],
            happiness: 50,
        };
        let error = chat(State(state), Json(request)).await.unwrap_err();
        assert_eq!(error.status, StatusCode::BAD_REQUEST);
    }
}
