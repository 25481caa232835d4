//! The reading half of a context.

use super::cell::ContextCell;
use crate::core::ContextState;
use std::fmt;
use std::sync::Arc;

/// Reads the value currently published by the matching [`Provider`].
///
/// Returns `None` whenever no provider of the same factory is rendering.
/// The value handed out is the provider's private copy behind an `Arc`; it
/// is immutable and shares nothing with the value the provider was given.
///
/// [`Provider`]: super::Provider
pub struct Accessor<T> {
    cell: Arc<ContextCell<T>>,
}

impl<T> Accessor<T> {
    pub(crate) fn new(cell: Arc<ContextCell<T>>) -> Self {
        Self { cell }
    }

    /// Returns the published value, or `None` outside a provider render.
    #[must_use]
    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.current()
    }

    /// Applies `f` to the published value without cloning the `Arc`'s
    /// contents.
    pub fn with<R, F>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        self.get().map(|value| f(&value))
    }

    /// Returns the published value or `default` when unset.
    #[must_use]
    pub fn get_or(&self, default: T) -> Arc<T> {
        self.get().unwrap_or_else(|| Arc::new(default))
    }

    /// Returns the cell state.
    #[must_use]
    pub fn state(&self) -> ContextState {
        self.cell.state()
    }

    /// Returns true if a provider is rendering.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cell.is_active()
    }

    /// Returns the number of live activations.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.cell.depth()
    }

    /// Returns the context name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.cell.name()
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("context", &self.cell.name())
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::context::create_context;

    #[tokio::test]
    async fn test_get_or_falls_back_when_unset() {
        let (provider, accessor) = create_context::<String>();
        assert_eq!(accessor.get_or("light".to_string()).as_str(), "light");

        provider
            .scope(&"dark".to_string(), async {
                assert_eq!(accessor.get_or("light".to_string()).as_str(), "dark");
            })
            .await
            .unwrap();

        assert_eq!(accessor.get_or("light".to_string()).as_str(), "light");
    }
}
