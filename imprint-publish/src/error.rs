//! Error types for the orchestration layer.

use imprint_repo::RepoError;
use thiserror::Error;

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Errors surfaced to callers of the publish service.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The requested mode is not in the strategy registry. Raised before
    /// any store access.
    #[error("invalid publishing mode: {0}")]
    UnknownMode(String),

    /// A named store does not exist in the repository catalog.
    #[error("store not found: {0}")]
    StoreNotFound(String),

    /// A named locale does not exist in the repository catalog.
    #[error("locale not found: {0}")]
    LocaleNotFound(String),

    /// The repository itself failed; passed through unchanged, no retry.
    #[error(transparent)]
    Repo(#[from] RepoError),
}
