//! Core type definitions for the Imprint publishing engine.
//!
//! This crate defines the fundamental, transport-agnostic types used
//! throughout the publishing core:
//! - Content item and job identifiers (UUID-backed)
//! - Resolved store/locale handles and the items they contain
//! - Publish modes and publish requests
//! - Propagation options, candidates, and queue contexts
//!
//! Anything that talks to an actual content repository (catalogs, queues,
//! strategy runners) belongs in `imprint-repo`, not here.

mod ids;
mod mode;
mod propagation;
mod request;
mod store;

pub use ids::{ContentItemId, JobHandle};
pub use mode::PublishMode;
pub use propagation::{PropagationOptions, PublishContext, PublishingCandidate, ALL_FIELDS};
pub use request::{CompletionQuery, ItemPublishRequest, ModePublishRequest};
pub use store::{ContentItem, ContentStore, Locale};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("unknown publish mode: {0}")]
    UnknownMode(String),
}
