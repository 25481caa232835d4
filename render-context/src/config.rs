//! Configuration types for contexts and the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How a context cell reacts when a provider is entered while another
/// activation of the same cell is still live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReentryPolicy {
    /// Single slot: entry overwrites the value, any exit clears the cell.
    Replace,
    /// Stack of scopes: each exit removes only its own activation.
    Nest,
    /// Refuse entry while the cell is active.
    Reject,
}

impl Default for ReentryPolicy {
    fn default() -> Self {
        Self::Nest
    }
}

impl fmt::Display for ReentryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace => write!(f, "replace"),
            Self::Nest => write!(f, "nest"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Configuration for a single context factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Name used in logs, events and errors.
    #[serde(default = "default_name")]
    pub name: String,
    /// Behavior on overlapping activations.
    #[serde(default)]
    pub reentry: ReentryPolicy,
    /// Whether activations are reported to the process event sink.
    #[serde(default = "default_emit_events")]
    pub emit_events: bool,
}

fn default_name() -> String {
    "context".to_string()
}

fn default_emit_events() -> bool {
    true
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            reentry: ReentryPolicy::default(),
            emit_events: default_emit_events(),
        }
    }
}

impl ContextConfig {
    /// Creates a new context configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the context name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the re-entry policy.
    #[must_use]
    pub fn with_reentry(mut self, policy: ReentryPolicy) -> Self {
        self.reentry = policy;
        self
    }

    /// Enables or disables event emission.
    #[must_use]
    pub fn with_events(mut self, enabled: bool) -> Self {
        self.emit_events = enabled;
        self
    }
}

/// Configuration for the host renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Upper bound on a single component render, in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_timeout_seconds: Option<f64>,
}

impl RendererConfig {
    /// Creates a new renderer configuration with no timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the render timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.render_timeout_seconds = Some(timeout.as_secs_f64());
        self
    }

    /// Returns the render timeout.
    ///
    /// Values that are not positive, or too large for a `Duration`, mean
    /// no timeout.
    #[must_use]
    pub fn render_timeout(&self) -> Option<Duration> {
        self.render_timeout_seconds
            .filter(|secs| *secs > 0.0)
            .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_context_config_defaults() {
        let config = ContextConfig::default();
        assert_eq!(config.name, "context");
        assert_eq!(config.reentry, ReentryPolicy::Nest);
        assert!(config.emit_events);
    }

    #[test]
    fn test_context_config_builders() {
        let config = ContextConfig::new()
            .with_name("theme")
            .with_reentry(ReentryPolicy::Reject)
            .with_events(false);
        assert_eq!(config.name, "theme");
        assert_eq!(config.reentry, ReentryPolicy::Reject);
        assert!(!config.emit_events);
    }

    #[test]
    fn test_context_config_deserialize_partial() {
        let config: ContextConfig = serde_json::from_str(r#"{"reentry": "replace"}"#).unwrap();
        assert_eq!(config.name, "context");
        assert_eq!(config.reentry, ReentryPolicy::Replace);
        assert!(config.emit_events);
    }

    #[test]
    fn test_reentry_policy_display() {
        assert_eq!(ReentryPolicy::Replace.to_string(), "replace");
        assert_eq!(ReentryPolicy::Nest.to_string(), "nest");
        assert_eq!(ReentryPolicy::Reject.to_string(), "reject");
    }

    #[test]
    fn test_renderer_timeout() {
        assert_eq!(RendererConfig::new().render_timeout(), None);

        let config = RendererConfig::new().with_timeout(Duration::from_millis(250));
        assert_eq!(config.render_timeout(), Some(Duration::from_millis(250)));

        let config = RendererConfig {
            render_timeout_seconds: Some(0.0),
        };
        assert_eq!(config.render_timeout(), None);
    }

    #[test]
    fn test_renderer_timeout_out_of_range() {
        let config: RendererConfig =
            serde_json::from_str(r#"{"render_timeout_seconds": 1e20}"#).unwrap();
        assert_eq!(config.render_timeout(), None);

        let config = RendererConfig {
            render_timeout_seconds: Some(f64::INFINITY),
        };
        assert_eq!(config.render_timeout(), None);

        let config = RendererConfig {
            render_timeout_seconds: Some(f64::NAN),
        };
        assert_eq!(config.render_timeout(), None);
    }
}
