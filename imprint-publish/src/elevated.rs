//! Elevated execution scope.
//!
//! Publishing bypasses the repository's normal security checks. The scope
//! is a guard: entering suspends checks, dropping restores the prior
//! state. Restoration happens on every exit path — normal return, `?`
//! propagation, or unwind — because it lives in `Drop`.

use imprint_repo::{SecurityContext, SecurityToken};
use std::sync::Arc;
use tracing::trace;

/// RAII guard holding the repository's security checks suspended.
///
/// Nesting is safe: each token captures the state to restore, so inner
/// scopes hand back "still suspended" and the outermost hands back the
/// original state.
pub struct ElevatedScope {
    security: Arc<dyn SecurityContext>,
    token: Option<SecurityToken>,
}

impl ElevatedScope {
    /// Suspends security checks until the returned guard is dropped.
    #[must_use]
    pub fn enter(security: Arc<dyn SecurityContext>) -> Self {
        trace!("suspending repository security checks");
        let token = security.suspend_checks();
        Self {
            security,
            token: Some(token),
        }
    }
}

impl Drop for ElevatedScope {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            trace!("restoring repository security checks");
            self.security.restore_checks(token);
        }
    }
}
