//! Publishing orchestration core for Imprint.
//!
//! Sits in front of a content repository and propagates content from the
//! authoritative source store to one or more target stores, in one or more
//! locales. Two ways in:
//!
//! - **Explicit items**: the caller names the items. The orchestrator fans
//!   out over target stores × locales and drives the repository's
//!   processing queue to completion for each combination, in order.
//! - **Bulk strategy**: the caller names one of the built-in strategies
//!   (full, smart, incremental). The orchestrator dispatches it once with
//!   the whole target/locale set and returns without waiting; the job runs
//!   detached inside the repository.
//!
//! Either way the work runs inside an [`ElevatedScope`], which suspends the
//! repository's security checks and restores them on every exit path.
//!
//! "When did source→target in locale L last finish?" is answered by
//! [`PublishService::last_completed_run`], a pure read of repository-owned
//! completion metadata.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use imprint_publish::{PublishConfig, PublishService};
//! use imprint_repo::MemoryRepository;
//! use imprint_types::{ContentItemId, ItemPublishRequest};
//!
//! # async fn run() -> Result<(), imprint_publish::PublishError> {
//! let repo = Arc::new(MemoryRepository::new());
//! let service = PublishService::with_backend(PublishConfig::default(), repo);
//!
//! service
//!     .publish_items(ItemPublishRequest {
//!         items: vec![ContentItemId::new()],
//!         target_stores: vec!["web".into()],
//!         target_locales: vec!["en".into()],
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod candidates;
mod elevated;
mod error;
mod gate;
mod registry;
mod service;

pub use candidates::build_candidates;
pub use elevated::ElevatedScope;
pub use error::{PublishError, PublishResult};
pub use gate::{GateSettings, RequestGate, RequestMeta};
pub use registry::StrategyRegistry;
pub use service::{PublishConfig, PublishService};
