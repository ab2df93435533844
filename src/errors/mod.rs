//! Error handling module for the EduDash client.
//!
//! Remote-store failures are surfaced to the caller unmodified, with no
//! retries and no translation, carrying a free-text message suitable for
//! toast-style UI feedback.

use serde::{Deserialize, Serialize};

/// Error codes as constants to avoid stringly-typed errors.
#[allow(dead_code)]
pub mod codes {
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
    pub const DECODE_ERROR: &str = "DECODE_ERROR";
    pub const REMOTE_ERROR: &str = "REMOTE_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
}

/// Client-side error type.
#[derive(Debug)]
pub enum ApiError {
    /// Credentials rejected or API key missing/invalid
    Unauthorized(String),
    /// Document or account not found where one was required
    NotFound(String),
    /// Transport-level failure (connect, timeout, TLS)
    Network(String),
    /// Response body could not be decoded
    Decode(String),
    /// The remote store rejected the operation
    Remote { status: u16, message: String },
    /// Blob storage failure
    Storage(String),
}

impl ApiError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Unauthorized(_) => codes::UNAUTHORIZED,
            ApiError::NotFound(_) => codes::NOT_FOUND,
            ApiError::Network(_) => codes::NETWORK_ERROR,
            ApiError::Decode(_) => codes::DECODE_ERROR,
            ApiError::Remote { .. } => codes::REMOTE_ERROR,
            ApiError::Storage(_) => codes::STORAGE_ERROR,
        }
    }

    /// Get the user-facing error message.
    pub fn message(&self) -> String {
        match self {
            ApiError::Unauthorized(msg) => msg.clone(),
            ApiError::NotFound(msg) => msg.clone(),
            ApiError::Network(msg) => msg.clone(),
            ApiError::Decode(msg) => msg.clone(),
            ApiError::Remote { message, .. } => message.clone(),
            ApiError::Storage(msg) => msg.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        tracing::error!("Network error: {:?}", err);
        if err.is_decode() {
            ApiError::Decode(format!("Response decode error: {}", err))
        } else {
            ApiError::Network(format!("Network error: {}", err))
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        ApiError::Decode(format!("JSON error: {}", err))
    }
}

/// Error body returned by the hosted backend on failure.
#[derive(Debug, Serialize, Deserialize)]
pub struct RemoteErrorBody {
    pub code: String,
    pub message: String,
}

impl RemoteErrorBody {
    /// Map a non-success HTTP response body into an [`ApiError`].
    pub fn into_error(self, status: u16) -> ApiError {
        match self.code.as_str() {
            codes::UNAUTHORIZED => ApiError::Unauthorized(self.message),
            codes::NOT_FOUND => ApiError::NotFound(self.message),
            _ => ApiError::Remote {
                status,
                message: self.message,
            },
        }
    }
}
