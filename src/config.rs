//! Runtime configuration assembled from the process environment.

use std::env;

use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_PORT: u16 = 3001;

/// Top-level service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the web server binds to
    pub port: u16,
    /// Model API credentials and selection
    pub model: ModelConfig,
}

/// Credentials and model selection for the chat-completion API
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Bearer credential for the model API
    pub api_key: String,
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// Model identifier sent with every completion request
    pub model: String,
}

impl ModelConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("Missing OPENAI_API_KEY env var")?;
        let base_url =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("Invalid PORT value: {raw}"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            model: ModelConfig::from_env()?,
        })
    }
}
