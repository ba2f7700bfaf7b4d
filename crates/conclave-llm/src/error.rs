//! Error types for conclave-llm

use thiserror::Error;

/// Inference provider error type
#[derive(Debug, Error)]
pub enum Error {
    /// Network error
    #[error("network error: {0}")]
    Network(String),

    /// Timeout
    #[error("timeout after {0}ms")]
    Timeout(u64),

    /// API error reported by the backend
    #[error("api error: {0}")]
    Api(String),

    /// Response body could not be interpreted
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Provider exists in configuration but has no generation implementation
    #[error("{0} provider not yet implemented")]
    NotImplemented(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
