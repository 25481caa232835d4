//! Span and event attributes for context activations.

use crate::config::ReentryPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Attributes describing one context activation.
///
/// Serialized as the payload of `context.*` events and convertible to
/// OpenTelemetry-style attribute keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSpanAttributes {
    /// Context name.
    pub context: String,
    /// Activation ID within the cell.
    pub activation_id: u64,
    /// Live activations after the event.
    pub depth: usize,
    /// Re-entry policy of the cell.
    pub policy: ReentryPolicy,
    /// Render pass ID, when the activation came from a render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_pass_id: Option<Uuid>,
}

impl ContextSpanAttributes {
    /// Creates attributes for an activation.
    #[must_use]
    pub fn new(context: impl Into<String>, activation_id: u64) -> Self {
        Self {
            context: context.into(),
            activation_id,
            depth: 0,
            policy: ReentryPolicy::default(),
            render_pass_id: None,
        }
    }

    /// Sets the depth.
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ReentryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the render pass ID.
    #[must_use]
    pub fn with_render_pass(mut self, id: Uuid) -> Self {
        self.render_pass_id = Some(id);
        self
    }

    /// Converts to an event payload.
    #[must_use]
    pub fn to_event_data(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Converts to OpenTelemetry attributes.
    #[must_use]
    pub fn to_otel_attributes(&self) -> HashMap<String, String> {
        let mut attrs = HashMap::new();
        attrs.insert("context.name".to_string(), self.context.clone());
        attrs.insert("context.activation_id".to_string(), self.activation_id.to_string());
        attrs.insert("context.depth".to_string(), self.depth.to_string());
        attrs.insert("context.policy".to_string(), self.policy.to_string());
        if let Some(id) = self.render_pass_id {
            attrs.insert("render.pass_id".to_string(), id.to_string());
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_data_shape() {
        let attrs = ContextSpanAttributes::new("theme", 7)
            .with_depth(2)
            .with_policy(ReentryPolicy::Replace);
        let data = attrs.to_event_data();

        assert_eq!(data["context"], "theme");
        assert_eq!(data["activation_id"], 7);
        assert_eq!(data["depth"], 2);
        assert_eq!(data["policy"], "replace");
        assert!(data.get("render_pass_id").is_none());
    }

    #[test]
    fn test_otel_attributes() {
        let pass = Uuid::new_v4();
        let attrs = ContextSpanAttributes::new("user", 1).with_render_pass(pass);
        let otel = attrs.to_otel_attributes();

        assert_eq!(otel.get("context.name"), Some(&"user".to_string()));
        assert_eq!(otel.get("context.policy"), Some(&"nest".to_string()));
        assert_eq!(otel.get("render.pass_id"), Some(&pass.to_string()));
    }
}
