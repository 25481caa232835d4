//! Error types for render-scoped contexts.
//!
//! A provider fails in one of two ways of its own (the value cannot be
//! copied, or the cell refuses the activation); anything else comes from
//! the child content it renders. All of it is surfaced to the host
//! renderer unchanged.

use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

/// The main error type for rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A context could not be published.
    #[error("{0}")]
    Context(#[from] ContextError),

    /// Child content failed to render.
    #[error("Slot render error: {0}")]
    Slot(String),

    /// A render did not finish within the configured timeout.
    #[error("Render timed out after {0:?}")]
    Timeout(Duration),

    /// A generic internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RenderError {
    /// Creates a slot error from any displayable message.
    #[must_use]
    pub fn slot(message: impl Into<String>) -> Self {
        Self::Slot(message.into())
    }

    /// Returns a stable short code for the error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Context(ContextError::Copy(_)) => "context.copy_failed",
            Self::Context(ContextError::Reentrant { .. }) => "context.reentrant",
            Self::Slot(_) => "render.slot_failed",
            Self::Timeout(_) => "render.timeout",
            Self::Internal(_) => "render.internal",
        }
    }

    /// Converts to a dictionary representation for event payloads.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("code".to_string(), json!(self.code()));
        map.insert("message".to_string(), json!(self.to_string()));
        map
    }
}

/// Errors raised by a context cell when a provider tries to publish a value.
#[derive(Debug, Clone, Error)]
pub enum ContextError {
    /// The provided value could not be deep-copied.
    #[error("{0}")]
    Copy(#[from] CopyError),

    /// The cell already has a live activation and its policy rejects another.
    #[error("Context '{context}' is already provided (activation {active}); nested providers are rejected")]
    Reentrant {
        /// Name of the context.
        context: String,
        /// Id of the activation that currently owns the cell.
        active: u64,
    },
}

/// Error raised when a context payload cannot be deep-copied.
#[derive(Debug, Clone, Error)]
#[error("Cannot deep-copy value of type {type_name}: {reason}")]
pub struct CopyError {
    /// The Rust type that failed to copy.
    pub type_name: &'static str,
    /// Why the copy failed.
    pub reason: String,
}

impl CopyError {
    /// Creates a new copy error for type `T`.
    #[must_use]
    pub fn new<T: ?Sized>(reason: impl Into<String>) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_error_names_type() {
        let err = CopyError::new::<Vec<u8>>("live handle");
        assert!(err.type_name.contains("Vec<u8>"));
        assert!(err.to_string().contains("live handle"));
    }

    #[test]
    fn test_render_error_from_context_error() {
        let err: RenderError = ContextError::Reentrant {
            context: "theme".to_string(),
            active: 3,
        }
        .into();
        assert_eq!(err.code(), "context.reentrant");
        assert!(err.to_string().contains("theme"));
    }

    #[test]
    fn test_render_error_to_dict() {
        let dict = RenderError::slot("boom").to_dict();
        assert_eq!(dict.get("code"), Some(&json!("render.slot_failed")));
        assert_eq!(dict.get("message"), Some(&json!("Slot render error: boom")));
    }

    #[test]
    fn test_timeout_display() {
        let err = RenderError::Timeout(Duration::from_millis(50));
        assert_eq!(err.to_string(), "Render timed out after 50ms");
    }
}
