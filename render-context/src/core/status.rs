//! Context state and component kind enums.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a context cell currently holds a published value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextState {
    /// No provider is rendering; the accessor returns nothing.
    Unset,
    /// A provider is rendering its children with a published copy.
    Active,
}

impl Default for ContextState {
    fn default() -> Self {
        Self::Unset
    }
}

impl fmt::Display for ContextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unset => write!(f, "unset"),
            Self::Active => write!(f, "active"),
        }
    }
}

impl ContextState {
    /// Returns true if a value is published.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// The capability a component declares to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// Builds its output lazily from props and slots (providers, layouts).
    Factory,
    /// Renders directly without owning render-time state.
    Plain,
}

impl Default for ComponentKind {
    fn default() -> Self {
        Self::Plain
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factory => write!(f, "factory"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

impl ComponentKind {
    /// Returns true for component factories.
    #[must_use]
    pub fn is_factory(&self) -> bool {
        matches!(self, Self::Factory)
    }
}
