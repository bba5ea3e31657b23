//! Completion metadata: when did a publish last finish?

use crate::RepoResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use imprint_types::{ContentStore, Locale};

/// Sentinel timestamp meaning "this triple has never been published".
pub const NEVER_PUBLISHED: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Per-(target, locale) completion timestamps, owned and written by the
/// repository engine and stored against the source store. This core only
/// reads them.
#[async_trait]
pub trait CompletionLog: Send + Sync {
    /// Returns the last successful publish timestamp recorded on `source`
    /// for `(target, locale)`, or [`NEVER_PUBLISHED`] if none exists.
    async fn last_publish(
        &self,
        source: &ContentStore,
        target: &ContentStore,
        locale: &Locale,
    ) -> RepoResult<DateTime<Utc>>;
}
