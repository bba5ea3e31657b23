//! Processing queue and bulk strategy traits.

use crate::RepoResult;
use async_trait::async_trait;
use imprint_types::{ContentStore, JobHandle, Locale, PublishContext};

/// The repository's synchronous processing queue.
#[async_trait]
pub trait PublishQueue: Send + Sync {
    /// Submits one publish context and drives it to completion.
    ///
    /// The future resolves only once the repository has finished processing
    /// every candidate in the context. The orchestrator imposes no timeout;
    /// a hung repository hangs the caller.
    async fn submit(&self, context: PublishContext) -> RepoResult<()>;
}

/// The built-in bulk publish strategies, owned by the repository engine.
///
/// Each method returns as soon as the repository has accepted the job; the
/// returned [`JobHandle`] identifies the detached job and is not awaited by
/// this core. Completion is observed through the completion log.
#[async_trait]
pub trait StrategyRunner: Send + Sync {
    /// Republishes everything from `source` to every target, every locale.
    async fn republish(
        &self,
        source: &ContentStore,
        targets: &[ContentStore],
        locales: &[Locale],
    ) -> RepoResult<JobHandle>;

    /// Differential publish: only items the repository detects as changed.
    async fn publish_smart(
        &self,
        source: &ContentStore,
        targets: &[ContentStore],
        locales: &[Locale],
    ) -> RepoResult<JobHandle>;

    /// Publishes items queued since the last completed run.
    async fn publish_incremental(
        &self,
        source: &ContentStore,
        targets: &[ContentStore],
        locales: &[Locale],
    ) -> RepoResult<JobHandle>;
}
