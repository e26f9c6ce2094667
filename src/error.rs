//! Error types for laqs-backlog

use thiserror::Error;

/// Result alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the gate and submission flow
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication could not be established
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The az CLI could not be spawned
    #[error("failed to invoke az: {0}")]
    AzSpawn(#[from] std::io::Error),

    /// az exited with a non-zero status; carries its stderr text
    #[error("az boards command failed: {0}")]
    Boards(String),

    /// az produced output that did not parse as the expected JSON
    #[error("unexpected az output: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
