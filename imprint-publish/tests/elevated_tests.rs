//! Tests for the elevated execution scope.

use imprint_publish::{ElevatedScope, PublishError};
use imprint_repo::{MemoryRepository, SecurityContext};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

fn security() -> Arc<MemoryRepository> {
    Arc::new(MemoryRepository::new())
}

#[test]
fn suspends_on_enter_and_restores_on_drop() {
    let repo = security();
    assert!(!repo.checks_suspended());
    {
        let _scope = ElevatedScope::enter(repo.clone());
        assert!(repo.checks_suspended());
    }
    assert!(!repo.checks_suspended());
}

#[test]
fn restores_after_early_error_return() {
    let repo = security();

    fn failing(repo: &Arc<MemoryRepository>) -> Result<(), PublishError> {
        let _scope = ElevatedScope::enter(repo.clone() as Arc<dyn SecurityContext>);
        Err(PublishError::StoreNotFound("web".into()))
    }

    assert!(failing(&repo).is_err());
    assert!(!repo.checks_suspended());
}

#[test]
fn restores_during_unwind() {
    let repo = security();
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _scope = ElevatedScope::enter(repo.clone() as Arc<dyn SecurityContext>);
        panic!("mid-publish failure");
    }));
    assert!(result.is_err());
    assert!(!repo.checks_suspended());
}

#[test]
fn nested_scopes_unwind_to_the_original_state() {
    let repo = security();
    {
        let _outer = ElevatedScope::enter(repo.clone() as Arc<dyn SecurityContext>);
        {
            let _inner = ElevatedScope::enter(repo.clone() as Arc<dyn SecurityContext>);
            assert!(repo.checks_suspended());
        }
        // Inner drop must not re-enable checks while the outer scope lives.
        assert!(repo.checks_suspended());
    }
    assert!(!repo.checks_suspended());
}
