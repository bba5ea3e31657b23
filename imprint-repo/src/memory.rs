//! In-memory repository for testing.
//!
//! Implements every boundary trait over plain maps and records each
//! interaction so tests can assert on what the orchestrator actually did:
//! catalog lookup counts, submitted contexts, strategy invocations, and the
//! ambient security-check state.

use crate::{
    Catalog, CompletionLog, ItemIndex, PublishQueue, RepoError, RepoResult, SecurityContext,
    SecurityToken, StrategyRunner, NEVER_PUBLISHED,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use imprint_types::{
    ContentItem, ContentItemId, ContentStore, JobHandle, Locale, PublishContext, PublishMode,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::debug;

/// One recorded invocation of a bulk publish strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyCall {
    /// Which strategy ran.
    pub mode: PublishMode,
    /// The resolved source store.
    pub source: ContentStore,
    /// The resolved targets, in request order.
    pub targets: Vec<ContentStore>,
    /// The resolved locales, in request order.
    pub locales: Vec<Locale>,
    /// Whether security checks were suspended when the call arrived.
    pub checks_suspended: bool,
}

/// In-memory content repository.
///
/// Stores, locales, and items are registered up front; everything else is
/// recorded as the engine drives the traits. Submitting a context also
/// writes completion metadata for its (source, target, locale), the way a
/// real repository stamps a finished publish.
#[derive(Default)]
pub struct MemoryRepository {
    stores: Mutex<HashSet<String>>,
    locales: Mutex<HashSet<String>>,
    items: Mutex<HashMap<String, HashMap<ContentItemId, ContentItem>>>,
    completions: Mutex<HashMap<(String, String, String), DateTime<Utc>>>,

    catalog_lookups: AtomicUsize,
    submissions: Mutex<Vec<PublishContext>>,
    suspended_at_submit: Mutex<Vec<bool>>,
    strategy_calls: Mutex<Vec<StrategyCall>>,
    checks_enabled: Mutex<bool>,
    fail_next_submit: Mutex<Option<String>>,
}

impl MemoryRepository {
    /// Creates an empty repository with security checks enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks_enabled: Mutex::new(true),
            ..Self::default()
        }
    }

    /// Registers a store name in the catalog.
    pub fn add_store(&self, name: &str) {
        self.stores.lock().unwrap().insert(name.to_string());
    }

    /// Registers a locale code in the catalog.
    pub fn add_locale(&self, code: &str) {
        self.locales.lock().unwrap().insert(code.to_string());
    }

    /// Places an item into a store.
    pub fn add_item(&self, store: &str, item: ContentItem) {
        self.items
            .lock()
            .unwrap()
            .entry(store.to_string())
            .or_default()
            .insert(item.id, item);
    }

    /// Pre-seeds completion metadata for a (source, target, locale) triple.
    pub fn set_last_publish(
        &self,
        source: &str,
        target: &str,
        locale: &str,
        when: DateTime<Utc>,
    ) {
        self.completions.lock().unwrap().insert(
            (source.to_string(), target.to_string(), locale.to_string()),
            when,
        );
    }

    /// Makes the next queue submission fail with the given message.
    pub fn fail_next_submit(&self, message: &str) {
        *self.fail_next_submit.lock().unwrap() = Some(message.to_string());
    }

    /// How many catalog resolutions (stores + locales) have happened.
    pub fn catalog_lookups(&self) -> usize {
        self.catalog_lookups.load(Ordering::SeqCst)
    }

    /// Every context submitted to the queue, in submission order.
    pub fn submissions(&self) -> Vec<PublishContext> {
        self.submissions.lock().unwrap().clone()
    }

    /// For each submission, whether security checks were suspended when it
    /// arrived.
    pub fn suspended_at_submit(&self) -> Vec<bool> {
        self.suspended_at_submit.lock().unwrap().clone()
    }

    /// Every bulk strategy invocation, in call order.
    pub fn strategy_calls(&self) -> Vec<StrategyCall> {
        self.strategy_calls.lock().unwrap().clone()
    }

    /// Whether security checks are currently suspended.
    pub fn checks_suspended(&self) -> bool {
        !*self.checks_enabled.lock().unwrap()
    }

    fn record_strategy(
        &self,
        mode: PublishMode,
        source: &ContentStore,
        targets: &[ContentStore],
        locales: &[Locale],
    ) -> JobHandle {
        let handle = JobHandle::new();
        debug!(%mode, %source, %handle, "strategy accepted");
        self.strategy_calls.lock().unwrap().push(StrategyCall {
            mode,
            source: source.clone(),
            targets: targets.to_vec(),
            locales: locales.to_vec(),
            checks_suspended: self.checks_suspended(),
        });
        handle
    }
}

#[async_trait]
impl Catalog for MemoryRepository {
    async fn resolve_store(&self, name: &str) -> RepoResult<Option<ContentStore>> {
        self.catalog_lookups.fetch_add(1, Ordering::SeqCst);
        let found = self.stores.lock().unwrap().contains(name);
        Ok(found.then(|| ContentStore::new(name)))
    }

    async fn resolve_locale(&self, code: &str) -> RepoResult<Option<Locale>> {
        self.catalog_lookups.fetch_add(1, Ordering::SeqCst);
        let found = self.locales.lock().unwrap().contains(code);
        Ok(found.then(|| Locale::new(code)))
    }
}

#[async_trait]
impl ItemIndex for MemoryRepository {
    async fn get_item(
        &self,
        store: &ContentStore,
        id: ContentItemId,
    ) -> RepoResult<Option<ContentItem>> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .get(store.name())
            .and_then(|items| items.get(&id))
            .cloned())
    }
}

#[async_trait]
impl PublishQueue for MemoryRepository {
    async fn submit(&self, context: PublishContext) -> RepoResult<()> {
        if let Some(message) = self.fail_next_submit.lock().unwrap().take() {
            return Err(RepoError::Queue(message));
        }

        debug!(
            candidates = context.candidates.len(),
            locales = context.locales.len(),
            "processing publish context"
        );

        // Stamp completion metadata the way a real repository would when
        // the queue finishes a context.
        if let Some(candidate) = context.candidates.first() {
            let opts = &candidate.options;
            self.completions.lock().unwrap().insert(
                (
                    opts.source.name().to_string(),
                    opts.target.name().to_string(),
                    opts.locale.code().to_string(),
                ),
                opts.timestamp,
            );
        }

        self.suspended_at_submit
            .lock()
            .unwrap()
            .push(self.checks_suspended());
        self.submissions.lock().unwrap().push(context);
        Ok(())
    }
}

#[async_trait]
impl StrategyRunner for MemoryRepository {
    async fn republish(
        &self,
        source: &ContentStore,
        targets: &[ContentStore],
        locales: &[Locale],
    ) -> RepoResult<JobHandle> {
        Ok(self.record_strategy(PublishMode::Full, source, targets, locales))
    }

    async fn publish_smart(
        &self,
        source: &ContentStore,
        targets: &[ContentStore],
        locales: &[Locale],
    ) -> RepoResult<JobHandle> {
        Ok(self.record_strategy(PublishMode::Smart, source, targets, locales))
    }

    async fn publish_incremental(
        &self,
        source: &ContentStore,
        targets: &[ContentStore],
        locales: &[Locale],
    ) -> RepoResult<JobHandle> {
        Ok(self.record_strategy(PublishMode::Incremental, source, targets, locales))
    }
}

impl SecurityContext for MemoryRepository {
    fn suspend_checks(&self) -> SecurityToken {
        let mut enabled = self.checks_enabled.lock().unwrap();
        let prior = *enabled;
        *enabled = false;
        SecurityToken::new(prior)
    }

    fn restore_checks(&self, token: SecurityToken) {
        if let Some(prior) = token.downcast::<bool>() {
            *self.checks_enabled.lock().unwrap() = prior;
        }
    }
}

#[async_trait]
impl CompletionLog for MemoryRepository {
    async fn last_publish(
        &self,
        source: &ContentStore,
        target: &ContentStore,
        locale: &Locale,
    ) -> RepoResult<DateTime<Utc>> {
        let key = (
            source.name().to_string(),
            target.name().to_string(),
            locale.code().to_string(),
        );
        Ok(self
            .completions
            .lock()
            .unwrap()
            .get(&key)
            .copied()
            .unwrap_or(NEVER_PUBLISHED))
    }
}
