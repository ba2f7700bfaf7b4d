//! Error types for conclave-core

use thiserror::Error;

/// Core error type
///
/// None of these variants escape a manager's public operations: every agent
/// failure is folded into an `AgentResponse` with `success == false`.
#[derive(Debug, Error)]
pub enum Error {
    /// Required input (code, selection) was not supplied
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Agent id is not present in the registry
    #[error("agent '{0}' not found")]
    AgentNotFound(String),

    /// Inference provider call failed
    #[error("AI call failed: {0}")]
    Generation(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
