//! Chat DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use cavy::{GroupReply, Turn};

/// Inbound chat request from the UI layer
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// Full conversation so far; the last entry is the triggering user turn
    pub messages: Vec<Turn>,
    /// Herd happiness meter, 0-100
    pub happiness: u8,
}

/// Outbound group reply
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatResponse {
    pub role: String,
    /// Newline-joined `[Character] text` lines
    pub content: String,
    /// Character names parallel to the reply lines, in emission order
    pub speakers: Vec<String>,
}

impl From<GroupReply> for ChatResponse {
    fn from(reply: GroupReply) -> Self {
        Self {
            role: "assistant".to_string(),
            content: reply.content(),
            speakers: reply.speakers(),
        }
    }
}

/// Uniform failure body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
