//! Environment-sourced configuration.
//!
//! All credentials and endpoints are read once at startup and handed to the
//! client constructors; nothing looks at the environment afterwards, which
//! keeps the clients injectable in tests.

use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub memory_api: MemoryApiConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Connection settings for the hosted memory API.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryApiConfig {
    pub base_url: String,
    pub api_key: String,
}

/// Completion provider settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub openai_api_key: String,
    pub openai_api_base: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
            },
            memory_api: MemoryApiConfig {
                base_url: env::var("MEMORY_API_URL")?,
                api_key: env::var("MEMORY_API_KEY")?,
            },
            llm: LlmConfig {
                openai_api_key: env::var("OPENAI_API_KEY")?,
                openai_api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                model: env::var("COMPLETION_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            },
        })
    }
}
