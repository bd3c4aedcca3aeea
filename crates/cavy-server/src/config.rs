//! Server Configuration
//!
//! All environment lookup happens here, once, at startup. The resulting
//! struct is passed explicitly into the adapters.

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8787";
const DEFAULT_MAX_TOKENS: u32 = 300;
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// API key for the completion service
    pub openai_api_key: String,
    /// Completion model ID
    pub model: String,
    /// Bounded output length per completion
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Address the HTTP server binds to
    pub bind_addr: String,
}

impl ServerConfig {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let openai_api_key =
            std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;

        Ok(Self {
            openai_api_key,
            model: env_or("CAVY_MODEL", DEFAULT_MODEL),
            max_tokens: env_parsed("CAVY_MAX_TOKENS", DEFAULT_MAX_TOKENS),
            temperature: env_parsed("CAVY_TEMPERATURE", DEFAULT_TEMPERATURE),
            bind_addr: env_or("CAVY_BIND_ADDR", DEFAULT_BIND_ADDR),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
