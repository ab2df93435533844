//! Configuration module for the EduDash client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the hosted backend (documents, auth, storage)
    pub api_base_url: String,
    /// API key sent with every request (required in production)
    pub api_key: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("EDUDASH_API_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());

        let api_key = env::var("EDUDASH_API_KEY").ok();

        Self {
            api_base_url,
            api_key,
        }
    }
}
