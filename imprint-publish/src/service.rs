//! The publish orchestrator.
//!
//! Ties the registry, elevated scope, and candidate builder to the
//! repository boundary traits. All sequencing rules live here: the
//! store-major/locale-minor fan-out of the explicit-item flow, the
//! resolve-mode-before-touching-anything rule of the bulk flow, and the
//! pass-through completion lookup.

use crate::candidates::build_candidates;
use crate::elevated::ElevatedScope;
use crate::registry::StrategyRegistry;
use crate::{PublishError, PublishResult};
use chrono::{DateTime, Utc};
use imprint_repo::{
    Catalog, CompletionLog, ItemIndex, PublishQueue, SecurityContext, StrategyRunner,
};
use imprint_types::{
    CompletionQuery, ContentStore, ItemPublishRequest, Locale, ModePublishRequest,
    PropagationOptions, PublishContext,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Configuration for the publish service.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Name of the authoritative source store for the explicit-item flow.
    pub source_store: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            source_store: "master".to_string(),
        }
    }
}

/// The publishing orchestrator.
///
/// Holds trait-object collaborators so tests can back it with
/// `MemoryRepository` and production can back it with a real repository.
/// Cheap to clone is not a goal; share it behind an `Arc` if needed — all
/// methods take `&self`.
pub struct PublishService {
    config: PublishConfig,
    catalog: Arc<dyn Catalog>,
    items: Arc<dyn ItemIndex>,
    queue: Arc<dyn PublishQueue>,
    registry: StrategyRegistry,
    security: Arc<dyn SecurityContext>,
    completions: Arc<dyn CompletionLog>,
}

impl PublishService {
    /// Creates a service from individual collaborators.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        config: PublishConfig,
        catalog: Arc<dyn Catalog>,
        items: Arc<dyn ItemIndex>,
        queue: Arc<dyn PublishQueue>,
        strategies: Arc<dyn StrategyRunner>,
        security: Arc<dyn SecurityContext>,
        completions: Arc<dyn CompletionLog>,
    ) -> Self {
        Self {
            config,
            catalog,
            items,
            queue,
            registry: StrategyRegistry::new(strategies),
            security,
            completions,
        }
    }

    /// Creates a service whose collaborators are all one backend, for
    /// backends that implement every boundary trait.
    pub fn with_backend<R>(config: PublishConfig, backend: Arc<R>) -> Self
    where
        R: Catalog
            + ItemIndex
            + PublishQueue
            + StrategyRunner
            + SecurityContext
            + CompletionLog
            + 'static,
    {
        Self::new(
            config,
            backend.clone(),
            backend.clone(),
            backend.clone(),
            backend.clone(),
            backend.clone(),
            backend,
        )
    }

    /// Publishes an explicit set of items to every requested target store,
    /// in every requested locale.
    ///
    /// An empty item list is a no-op: no catalog lookups, no submissions.
    /// Otherwise combinations run strictly in sequence, store-major and
    /// locale-minor, each one driven to completion before the next starts.
    /// An unresolvable store or locale name aborts the whole call;
    /// combinations already processed stay published.
    pub async fn publish_items(&self, request: ItemPublishRequest) -> PublishResult<()> {
        if request.items.is_empty() {
            debug!("explicit publish with no items, nothing to do");
            return Ok(());
        }

        let _elevated = ElevatedScope::enter(Arc::clone(&self.security));

        let source = self.resolve_store(&self.config.source_store).await?;
        info!(
            items = request.items.len(),
            stores = request.target_stores.len(),
            locales = request.target_locales.len(),
            "publishing explicit items"
        );

        // The context submitted for every combination restates the full
        // requested locale set. The restatement is taken verbatim from the
        // request, unvalidated; only the locale an iteration actually
        // drives goes through the catalog.
        let all_locales: Vec<Locale> = request
            .target_locales
            .iter()
            .map(|code| Locale::new(code.clone()))
            .collect();

        for store_name in &request.target_stores {
            let target = self.resolve_store(store_name).await?;

            for locale_code in &request.target_locales {
                let locale = self.resolve_locale(locale_code).await?;

                let options = PropagationOptions::for_items(
                    source.clone(),
                    target.clone(),
                    locale,
                    Utc::now(),
                );
                let candidates =
                    build_candidates(&request.items, &source, self.items.as_ref(), &options)
                        .await?;

                debug!(
                    store = %target,
                    locale = %locale_code,
                    candidates = candidates.len(),
                    "submitting publish context"
                );
                self.queue
                    .submit(PublishContext::new(candidates, all_locales.clone()))
                    .await?;
            }
        }

        Ok(())
    }

    /// Runs one of the built-in bulk strategies across the full
    /// target/locale set.
    ///
    /// The mode is resolved before any repository access, so an unknown
    /// mode has no side effects. The strategy's job handle is dropped:
    /// the job runs detached and its completion is observed through
    /// [`last_completed_run`](Self::last_completed_run), never through
    /// this call.
    pub async fn publish(&self, request: ModePublishRequest) -> PublishResult<()> {
        let mode = self.registry.resolve(&request.mode)?;

        let _elevated = ElevatedScope::enter(Arc::clone(&self.security));

        let source = self.resolve_store(&request.source).await?;

        let mut targets = Vec::with_capacity(request.targets.len());
        for name in &request.targets {
            targets.push(self.resolve_store(name).await?);
        }
        let locales = self.resolve_locales(&request.locales).await?;

        let handle = self.registry.run(mode, &source, &targets, &locales).await?;
        info!(%mode, source = %source, %handle, "bulk publish dispatched");

        Ok(())
    }

    /// Returns when publishing from `query.source` to `query.target` in
    /// `query.locale` last completed.
    ///
    /// A pure read of repository-owned metadata; triples that never
    /// published return the repository's never-published sentinel rather
    /// than an error.
    pub async fn last_completed_run(
        &self,
        query: CompletionQuery,
    ) -> PublishResult<DateTime<Utc>> {
        let source = self.resolve_store(&query.source).await?;
        let target = self.resolve_store(&query.target).await?;
        let locale = self.resolve_locale(&query.locale).await?;

        Ok(self
            .completions
            .last_publish(&source, &target, &locale)
            .await?)
    }

    async fn resolve_store(&self, name: &str) -> PublishResult<ContentStore> {
        self.catalog
            .resolve_store(name)
            .await?
            .ok_or_else(|| PublishError::StoreNotFound(name.to_string()))
    }

    async fn resolve_locale(&self, code: &str) -> PublishResult<Locale> {
        self.catalog
            .resolve_locale(code)
            .await?
            .ok_or_else(|| PublishError::LocaleNotFound(code.to_string()))
    }

    async fn resolve_locales(&self, codes: &[String]) -> PublishResult<Vec<Locale>> {
        let mut locales = Vec::with_capacity(codes.len());
        for code in codes {
            locales.push(self.resolve_locale(code).await?);
        }
        Ok(locales)
    }
}
