//! Error types for the Supperplan domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant.

use thiserror::Error;

/// The top-level error type for all Supperplan operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Provider errors ---
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    // --- Response decoding ---
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    // --- Request errors ---
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Whether this error means no upstream credential is available.
    pub fn is_not_configured(&self) -> bool {
        matches!(self, Error::Provider(ProviderError::NotConfigured(_)))
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    #[error("Rate limited by provider")]
    RateLimited,

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("{0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider returned no text content")]
    EmptyResponse,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("No JSON found in response")]
    NoJsonFound,

    #[error("Malformed JSON in response: {0}")]
    Malformed(#[from] serde_json::Error),
}
