//! Strategy registry — mode names to bulk publish strategies.
//!
//! The set of strategies is fixed at construction and never mutated, so a
//! registry can be shared freely across concurrent publish calls.

use crate::{PublishError, PublishResult};
use imprint_repo::{RepoResult, StrategyRunner};
use imprint_types::{ContentStore, JobHandle, Locale, PublishMode};
use std::sync::Arc;

/// Resolves mode names and dispatches to the repository's bulk publish
/// strategies.
#[derive(Clone)]
pub struct StrategyRegistry {
    runner: Arc<dyn StrategyRunner>,
}

impl StrategyRegistry {
    /// Creates a registry bound to the given strategy runner.
    pub fn new(runner: Arc<dyn StrategyRunner>) -> Self {
        Self { runner }
    }

    /// Resolves a mode name, case-insensitively, to a [`PublishMode`].
    ///
    /// Fails with [`PublishError::UnknownMode`] naming the (lowercased)
    /// offending mode; callers rely on this happening before any
    /// repository access.
    pub fn resolve(&self, mode: &str) -> PublishResult<PublishMode> {
        mode.parse()
            .map_err(|_| PublishError::UnknownMode(mode.to_lowercase()))
    }

    /// Runs the strategy bound to `mode` exactly once with the full
    /// target/locale sets, returning the repository's job handle.
    pub async fn run(
        &self,
        mode: PublishMode,
        source: &ContentStore,
        targets: &[ContentStore],
        locales: &[Locale],
    ) -> RepoResult<JobHandle> {
        match mode {
            PublishMode::Full => self.runner.republish(source, targets, locales).await,
            PublishMode::Smart => self.runner.publish_smart(source, targets, locales).await,
            PublishMode::Incremental => {
                self.runner.publish_incremental(source, targets, locales).await
            }
        }
    }
}
