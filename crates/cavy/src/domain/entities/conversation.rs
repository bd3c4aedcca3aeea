//! Conversation Turns
//!
//! The conversation is an append-only sequence of turns owned by the
//! caller (the UI layer). Turns are immutable once created.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Character;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// A single conversation turn.
///
/// `speaker` is present on assistant turns produced by the router, and on
/// the synthetic feeding turn the client sends when veggies are served.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Turn {
    pub role: TurnRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<Character>,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
            speaker: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
            speaker: None,
        }
    }
}
