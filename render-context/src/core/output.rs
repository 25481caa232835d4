//! Rendered markup produced by components and slots.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The rendered output of a component or slot.
///
/// Holds a markup fragment plus optional metadata a renderer may attach
/// (timings, component names). Equality compares both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    /// The rendered markup.
    pub html: String,

    /// Additional metadata.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl RenderOutput {
    /// Creates an output from a markup fragment.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            metadata: HashMap::new(),
        }
    }

    /// Creates an empty output.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Concatenates several outputs in order, merging their metadata.
    ///
    /// Later entries win on metadata key conflicts.
    #[must_use]
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        parts.into_iter().fold(Self::empty(), |mut acc, part| {
            acc.html.push_str(&part.html);
            acc.metadata.extend(part.metadata);
            acc
        })
    }

    /// Wraps the markup between an opening and closing fragment.
    #[must_use]
    pub fn wrap(mut self, open: &str, close: &str) -> Self {
        self.html = format!("{open}{}{close}", self.html);
        self
    }

    /// Adds a single metadata entry.
    #[must_use]
    pub fn add_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Returns the markup.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Consumes the output, returning the markup.
    #[must_use]
    pub fn into_html(self) -> String {
        self.html
    }

    /// Returns true if no markup was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

impl fmt::Display for RenderOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.html)
    }
}

impl From<String> for RenderOutput {
    fn from(html: String) -> Self {
        Self::new(html)
    }
}

impl From<&str> for RenderOutput {
    fn from(html: &str) -> Self {
        Self::new(html)
    }
}
