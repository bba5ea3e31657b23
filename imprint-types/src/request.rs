//! Publish request types accepted by the orchestrator.
//!
//! Requests carry raw names, not resolved handles: resolution against the
//! repository catalog happens inside the orchestrator so that a bad name
//! fails there with an error identifying it.

use crate::ContentItemId;
use serde::{Deserialize, Serialize};

/// A request to publish an explicit set of items to one or more target
/// stores, in one or more locales.
///
/// An empty `items` list makes the whole request a no-op: no catalog
/// lookups, no queue submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPublishRequest {
    /// The items to publish. Ids that do not resolve in the source store
    /// are skipped silently.
    pub items: Vec<ContentItemId>,
    /// Target store names, published in order.
    pub target_stores: Vec<String>,
    /// Locale codes, published in order within each store.
    pub target_locales: Vec<String>,
}

/// A request to run one of the built-in bulk publish strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModePublishRequest {
    /// Strategy name, matched case-insensitively against the registry.
    pub mode: String,
    /// Source store name.
    pub source: String,
    /// Target store names.
    pub targets: Vec<String>,
    /// Locale codes.
    pub locales: Vec<String>,
}

/// Identifies one (source, target, locale) triple whose last completed
/// publish timestamp is being asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionQuery {
    /// Source store name.
    pub source: String,
    /// Target store name.
    pub target: String,
    /// Locale code.
    pub locale: String,
}
