//! Catalog and item lookup traits.

use crate::RepoResult;
use async_trait::async_trait;
use imprint_types::{ContentItem, ContentItemId, ContentStore, Locale};

/// Resolves store names and locale codes against the repository catalog.
///
/// `Ok(None)` means the name is simply not in the catalog; `Err` is
/// reserved for the repository itself failing.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Resolves a store name to a store handle.
    async fn resolve_store(&self, name: &str) -> RepoResult<Option<ContentStore>>;

    /// Resolves a locale code to a locale handle.
    async fn resolve_locale(&self, code: &str) -> RepoResult<Option<Locale>>;
}

/// Looks up content items within a store.
#[async_trait]
pub trait ItemIndex: Send + Sync {
    /// Fetches an item by id from the given store, or `None` if the store
    /// holds no such item.
    async fn get_item(
        &self,
        store: &ContentStore,
        id: ContentItemId,
    ) -> RepoResult<Option<ContentItem>>;
}
