//! Cavy API Client

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use cavy::Turn;

/// API Client for the Cavy server
pub struct CavyClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Request/Response Types
// ============================================

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: &'a [Turn],
    happiness: u8,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub role: String,
    pub content: String,
    pub speakers: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    status: String,
}

impl CavyClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Check that the server is up
    pub async fn health(&self) -> Result<bool> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .context("Failed to reach Cavy server")?;

        if !response.status().is_success() {
            return Ok(false);
        }

        let health: HealthResponse = response.json().await?;
        Ok(health.status == "ok")
    }

    /// Send the conversation and happiness meter, get the group reply
    pub async fn chat(&self, messages: &[Turn], happiness: u8) -> Result<ChatResponse> {
        let request = ChatRequest {
            messages,
            happiness,
        };

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to reach Cavy server")?;

        if !response.status().is_success() {
            bail!("Chat request failed with status {}", response.status());
        }

        response
            .json::<ChatResponse>()
            .await
            .context("Failed to parse chat response")
    }
}
