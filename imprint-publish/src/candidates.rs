//! Candidate set construction for the explicit-item flow.

use imprint_repo::{ItemIndex, RepoResult};
use imprint_types::{ContentItemId, ContentStore, PropagationOptions, PublishingCandidate};
use tracing::debug;

/// Builds the propagation candidates for an explicit item list.
///
/// Each id is looked up in the source store; ids that resolve become
/// all-fields candidates carrying `options`, ids that don't are skipped
/// silently. Output order follows input order.
pub async fn build_candidates(
    items: &[ContentItemId],
    source: &ContentStore,
    index: &dyn ItemIndex,
    options: &PropagationOptions,
) -> RepoResult<Vec<PublishingCandidate>> {
    let mut candidates = Vec::with_capacity(items.len());
    for &id in items {
        match index.get_item(source, id).await? {
            Some(_) => candidates.push(PublishingCandidate::all_fields(id, options.clone())),
            None => debug!(%id, store = %source, "item not in source store, skipping"),
        }
    }
    Ok(candidates)
}
