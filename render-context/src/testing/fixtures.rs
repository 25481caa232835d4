//! Test fixtures.

use crate::core::RenderPass;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A sample context payload with nested mutable structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// User preferences.
    pub prefs: BTreeMap<String, String>,
}

crate::impl_deep_copy_via_clone!(Profile);

/// Returns a profile named `name` with one tag and one preference.
#[must_use]
pub fn sample_profile(name: &str) -> Profile {
    let mut prefs = BTreeMap::new();
    prefs.insert("theme".to_string(), "dark".to_string());
    Profile {
        name: name.to_string(),
        tags: vec!["reader".to_string()],
        prefs,
    }
}

/// Returns a render pass for a test route.
#[must_use]
pub fn test_pass() -> RenderPass {
    RenderPass::new().with_route("/test")
}
