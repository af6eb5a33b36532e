//! Error types for the Freshsales client

use thiserror::Error;

/// Main error type for all Freshsales operations
#[derive(Error, Debug)]
pub enum FreshsalesError {
    #[error("Invalid request: {0}")]
    Precondition(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unexpected response shape: {0}")]
    Deserialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl FreshsalesError {
    /// Status code of a non-2xx response, if this error carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            FreshsalesError::Http { status, .. } => Some(*status),
            FreshsalesError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for Freshsales operations
pub type Result<T> = std::result::Result<T, FreshsalesError>;
