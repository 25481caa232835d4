//! Identity of a single render traversal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Identifies one render pass: a single traversal that produces output for
/// a component and its descendants.
///
/// Passed to every component and slot so logs and events can be correlated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderPass {
    /// The unique ID for this pass.
    pub id: Uuid,

    /// When the pass started.
    pub started_at: DateTime<Utc>,

    /// The route or page being rendered, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl Default for RenderPass {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPass {
    /// Creates a new render pass with a generated ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            route: None,
        }
    }

    /// Sets the route.
    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Converts to a dictionary with string values (or null).
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("render_pass_id".to_string(), serde_json::json!(self.id.to_string()));
        map.insert(
            "started_at".to_string(),
            serde_json::json!(self.started_at.to_rfc3339()),
        );
        map.insert("route".to_string(), serde_json::json!(self.route));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pass_ids_are_unique() {
        assert_ne!(RenderPass::new().id, RenderPass::new().id);
    }

    #[test]
    fn test_render_pass_with_route() {
        let pass = RenderPass::new().with_route("/blog");
        assert_eq!(pass.route.as_deref(), Some("/blog"));
    }

    #[test]
    fn test_render_pass_to_dict() {
        let pass = RenderPass::new();
        let dict = pass.to_dict();
        assert_eq!(dict.get("render_pass_id"), Some(&serde_json::json!(pass.id.to_string())));
        assert_eq!(dict.get("route"), Some(&serde_json::Value::Null));
    }
}
