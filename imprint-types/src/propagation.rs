//! Propagation options, candidates, and queue contexts.
//!
//! These are the request-scoped values handed to the repository's
//! processing queue: constructed per store/locale combination, submitted,
//! and discarded.

use crate::{ContentItemId, ContentStore, Locale, PublishMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Field selector meaning "all fields of the item".
pub const ALL_FIELDS: &str = "*";

/// Options for one propagation of content from a source store to a target
/// store in one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationOptions {
    /// The authoritative source store.
    pub source: ContentStore,
    /// The store content is copied into.
    pub target: ContentStore,
    /// Publish mode driving the repository pipeline.
    pub mode: PublishMode,
    /// The locale being propagated.
    pub locale: Locale,
    /// When the propagation was requested.
    pub timestamp: DateTime<Utc>,
    /// Whether the repository may skip items whose revision is unchanged.
    /// `false` forces unconditional propagation.
    pub compare_revisions: bool,
    /// Whether descendants of each item are propagated too.
    pub deep: bool,
}

impl PropagationOptions {
    /// Options for the explicit-item flow: publish exactly the listed
    /// items, unconditionally, without descendants.
    #[must_use]
    pub fn for_items(
        source: ContentStore,
        target: ContentStore,
        locale: Locale,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            source,
            target,
            mode: PublishMode::Full,
            locale,
            timestamp,
            compare_revisions: false,
            deep: false,
        }
    }
}

/// A single content item marked for propagation under a fixed set of
/// options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishingCandidate {
    /// The item being propagated.
    pub item_id: ContentItemId,
    /// Which fields of the item to propagate; always [`ALL_FIELDS`] in the
    /// explicit-item flow.
    pub field_selector: String,
    /// The options the candidate was built under.
    pub options: PropagationOptions,
}

impl PublishingCandidate {
    /// Creates a candidate propagating all fields of `item_id`.
    #[must_use]
    pub fn all_fields(item_id: ContentItemId, options: PropagationOptions) -> Self {
        Self {
            item_id,
            field_selector: ALL_FIELDS.to_string(),
            options,
        }
    }
}

/// One unit of work for the repository's processing queue: the candidates
/// for one target store, plus the locales the overall request covers.
///
/// `locales` always restates the full requested locale set, even though
/// each context is driven for a single locale via its candidates' options.
/// The repository uses it to size per-locale bookkeeping up front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishContext {
    /// The candidates to process, in request order.
    pub candidates: Vec<PublishingCandidate>,
    /// Every locale named by the originating request.
    pub locales: Vec<Locale>,
}

impl PublishContext {
    /// Creates a context from candidates and the full requested locale set.
    #[must_use]
    pub fn new(candidates: Vec<PublishingCandidate>, locales: Vec<Locale>) -> Self {
        Self {
            candidates,
            locales,
        }
    }
}
