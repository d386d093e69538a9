//! Status overrides keyed by `kind/name`.

use std::collections::HashMap;

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use crate::node::ResourceNode;

/// Sync/health state reported for a resource, overriding the node's own fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceState {
    /// Kind of the resource this state applies to.
    pub kind: CompactString,
    /// Name of the resource this state applies to.
    pub name: CompactString,
    /// Name to display instead of `name`.
    #[serde(default)]
    pub display_name: Option<CompactString>,
    /// Sync status, e.g. `Synced`.
    #[serde(default)]
    pub status: String,
    /// Health as reported by the state source.
    #[serde(default)]
    pub health: String,
    /// Free-text message.
    #[serde(default)]
    pub message: String,
}

impl ResourceState {
    /// Create a state for `kind/name`.
    pub fn new(kind: impl Into<CompactString>, name: impl Into<CompactString>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the sync status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the health.
    pub fn with_health(mut self, health: impl Into<String>) -> Self {
        self.health = health.into();
        self
    }

    /// Set the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set a display name.
    pub fn with_display_name(mut self, display_name: impl Into<CompactString>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Name shown in the rendered label.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    fn key(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }
}

/// Lookup of resource states by `kind/name`.
///
/// A later state for the same key replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct StatusOverlay {
    states: HashMap<String, ResourceState>,
}

impl StatusOverlay {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a state, returning the one it replaced.
    pub fn insert(&mut self, state: ResourceState) -> Option<ResourceState> {
        self.states.insert(state.key(), state)
    }

    /// State applying to a node, if any.
    pub fn lookup(&self, node: &ResourceNode) -> Option<&ResourceState> {
        self.states.get(&node.overlay_key())
    }

    /// Number of distinct `kind/name` entries.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the overlay has no entries.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl FromIterator<ResourceState> for StatusOverlay {
    fn from_iter<I: IntoIterator<Item = ResourceState>>(iter: I) -> Self {
        let mut overlay = Self::new();
        for state in iter {
            overlay.insert(state);
        }
        overlay
    }
}
