//! Error types for the repository boundary.

use thiserror::Error;

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Errors raised by a content repository implementation.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The repository cannot be reached at all.
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// The processing queue failed while driving a publish context.
    #[error("queue processing failed: {0}")]
    Queue(String),

    /// A bulk publish strategy could not be started.
    #[error("strategy invocation failed: {0}")]
    Strategy(String),

    /// Completion metadata could not be read.
    #[error("completion metadata error: {0}")]
    Metadata(String),
}
