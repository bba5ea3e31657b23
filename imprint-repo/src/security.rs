//! Repository security context.
//!
//! Publishing runs with the repository's normal security checks suspended.
//! Suspension is scoped: `suspend_checks` hands back a token capturing the
//! prior state, and `restore_checks` puts that state back. Tokens make
//! nesting safe — the inner restore returns to "suspended", the outer one
//! to the original state.

use std::any::Any;

/// Opaque prior-state token returned by [`SecurityContext::suspend_checks`].
/// Each repository implementation wraps its own state type inside this.
pub struct SecurityToken(Box<dyn Any + Send>);

impl SecurityToken {
    /// Wraps an implementation-specific prior state.
    pub fn new<T: Any + Send + 'static>(inner: T) -> Self {
        Self(Box::new(inner))
    }

    /// Unwraps back to the implementation-specific type.
    pub fn downcast<T: Any + Send + 'static>(self) -> Option<T> {
        self.0.downcast::<T>().ok().map(|b| *b)
    }
}

/// The repository's ambient security-check state.
///
/// Both methods are synchronous so a guard can restore from `Drop`.
pub trait SecurityContext: Send + Sync {
    /// Suspends security checks, returning a token capturing the state to
    /// restore.
    fn suspend_checks(&self) -> SecurityToken;

    /// Restores the state captured in `token`.
    fn restore_checks(&self, token: SecurityToken);
}
