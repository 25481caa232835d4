//! Construction of matched provider/accessor pairs.

use super::accessor::Accessor;
use super::cell::ContextCell;
use super::provider::Provider;
use crate::config::ContextConfig;
use std::sync::Arc;

/// Creates a context with default configuration.
///
/// The provider and accessor share one private cell; a second call creates
/// a second, unrelated cell.
///
/// ```rust,ignore
/// let (theme, use_theme) = create_context::<String>();
/// let html = theme.render(&pass, &"dark".to_string(), &slots).await?;
/// // inside any component rendered by `slots`:
/// let current = use_theme.get();
/// ```
#[must_use]
pub fn create_context<T>() -> (Provider<T>, Accessor<T>) {
    ContextFactory::new().split()
}

/// Owns the cell a provider/accessor pair shares.
///
/// The factory can hand out any number of clones of both halves; they all
/// refer to the same cell.
#[derive(Debug)]
pub struct ContextFactory<T> {
    cell: Arc<ContextCell<T>>,
}

impl<T> ContextFactory<T> {
    /// Creates a factory with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ContextConfig::default())
    }

    /// Creates a factory with the given configuration.
    #[must_use]
    pub fn with_config(config: ContextConfig) -> Self {
        Self::from_cell(ContextCell::new(config))
    }

    /// Creates a factory around an already configured cell.
    #[must_use]
    pub fn from_cell(cell: ContextCell<T>) -> Self {
        Self {
            cell: Arc::new(cell),
        }
    }

    /// Creates a factory with a name and otherwise default configuration.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_config(ContextConfig::new().with_name(name))
    }

    /// Returns a provider for this context.
    #[must_use]
    pub fn provider(&self) -> Provider<T> {
        Provider::new(Arc::clone(&self.cell))
    }

    /// Returns an accessor for this context.
    #[must_use]
    pub fn accessor(&self) -> Accessor<T> {
        Accessor::new(Arc::clone(&self.cell))
    }

    /// Consumes the factory, returning the pair.
    #[must_use]
    pub fn split(self) -> (Provider<T>, Accessor<T>) {
        (self.provider(), self.accessor())
    }

    /// Returns the shared cell.
    #[must_use]
    pub fn cell(&self) -> &Arc<ContextCell<T>> {
        &self.cell
    }
}

impl<T> Default for ContextFactory<T> {
    fn default() -> Self {
        Self::new()
    }
}
