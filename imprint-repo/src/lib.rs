//! Content repository boundary for the Imprint publishing engine.
//!
//! The orchestrator in `imprint-publish` never talks to a concrete
//! repository; it talks to the traits defined here:
//!
//! - **Catalog**: resolves store names and locale codes to handles
//! - **ItemIndex**: looks items up within a store
//! - **PublishQueue**: processes one publish context to completion
//! - **StrategyRunner**: runs the built-in bulk strategies asynchronously
//! - **SecurityContext**: suspends/restores repository security checks
//! - **CompletionLog**: reads last-completed-publish timestamps
//!
//! [`MemoryRepository`] implements all of them in memory and records every
//! interaction, which is what the engine's tests run against.

mod catalog;
mod completion;
mod error;
mod memory;
mod queue;
mod security;

pub use catalog::{Catalog, ItemIndex};
pub use completion::{CompletionLog, NEVER_PUBLISHED};
pub use error::{RepoError, RepoResult};
pub use memory::{MemoryRepository, StrategyCall};
pub use queue::{PublishQueue, StrategyRunner};
pub use security::{SecurityContext, SecurityToken};
