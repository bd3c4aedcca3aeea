//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use cavy::{Character, Turn, TurnRole};

use crate::models::{ChatRequest, ChatResponse, ErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::chat::chat),
    components(schemas(
        ChatRequest,
        ChatResponse,
        ErrorResponse,
        Turn,
        TurnRole,
        Character
    )),
    tags(
        (name = "Chat", description = "Guinea pig group-chat routing")
    )
)]
pub struct ApiDoc;
