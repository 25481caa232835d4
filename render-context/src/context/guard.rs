//! Scoped ownership of a context activation.

use super::cell::ContextCell;
use crate::errors::ContextError;
use std::sync::Arc;
use uuid::Uuid;

/// Publishes a value on creation and retracts it on drop.
///
/// Dropping happens on every exit path of the code holding the guard:
/// normal completion, an early `?` return, a panic unwinding through the
/// render, or the render future itself being dropped (timeout, cancelled
/// join). The cell therefore never keeps a stale value after its provider
/// stops rendering.
#[must_use = "the context is cleared as soon as the guard is dropped"]
pub struct ActivationGuard<T> {
    cell: Arc<ContextCell<T>>,
    id: u64,
}

impl<T> ActivationGuard<T> {
    /// Publishes `value` in `cell`.
    ///
    /// # Errors
    ///
    /// Returns `ContextError::Reentrant` if the cell refuses the activation.
    pub fn enter(
        cell: Arc<ContextCell<T>>,
        value: T,
        render_pass: Option<Uuid>,
    ) -> Result<Self, ContextError> {
        let id = cell.enter(value, render_pass)?;
        Ok(Self { cell, id })
    }

    /// Returns the activation id.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl<T> Drop for ActivationGuard<T> {
    fn drop(&mut self) {
        self.cell.exit(self.id);
    }
}

impl<T> std::fmt::Debug for ActivationGuard<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationGuard")
            .field("context", &self.cell.name())
            .field("id", &self.id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContextConfig;

    fn cell() -> Arc<ContextCell<String>> {
        Arc::new(ContextCell::new(ContextConfig::new().with_events(false)))
    }

    #[test]
    fn test_guard_clears_on_drop() {
        let cell = cell();
        {
            let guard = ActivationGuard::enter(cell.clone(), "x".to_string(), None).unwrap();
            assert!(guard.id() > 0);
            assert_eq!(cell.current().unwrap().as_str(), "x");
        }
        assert!(cell.current().is_none());
    }

    #[test]
    fn test_guard_clears_on_panic() {
        let cell = cell();
        let inner = cell.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = ActivationGuard::enter(inner, "x".to_string(), None).unwrap();
            panic!("render exploded");
        }));

        assert!(result.is_err());
        assert!(!cell.is_active());
    }
}
