//! Resource node types.

use std::fmt;

use chrono::{DateTime, Utc};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a node within a resource graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub CompactString);

impl NodeId {
    /// Create a new NodeId.
    pub fn new(id: impl Into<CompactString>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Health status code of a resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
pub enum HealthStatus {
    /// Resource is healthy.
    Healthy,
    /// Resource is still converging.
    Progressing,
    /// Resource has failed or cannot converge.
    Degraded,
    /// Resource is paused or suspended.
    Suspended,
    /// Resource is expected but absent.
    Missing,
    /// Health could not be assessed.
    #[default]
    Unknown,
}

/// Health of a resource: a status code plus free-text reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Status code.
    pub status: HealthStatus,
    /// Human-readable reason, may be empty.
    #[serde(default)]
    pub message: String,
}

impl Health {
    /// Create a health record.
    pub fn new(status: HealthStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

/// A single reportable resource in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    /// Unique identifier.
    #[serde(rename = "uid")]
    pub id: NodeId,

    /// Resource kind, e.g. `Deployment`.
    pub kind: CompactString,

    /// Resource name.
    pub name: CompactString,

    /// API group, empty for the core group.
    #[serde(default)]
    pub group: CompactString,

    /// Namespace, empty for cluster-scoped resources.
    #[serde(default)]
    pub namespace: CompactString,

    /// Ids of the declared parents. Empty means root/orphan.
    #[serde(default)]
    pub parent_refs: Vec<NodeId>,

    /// Health, if it was assessed.
    #[serde(default)]
    pub health: Option<Health>,

    /// Creation time, if known.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ResourceNode {
    /// Create a node with no group, namespace, parents, health, or timestamp.
    pub fn new(
        id: impl Into<NodeId>,
        kind: impl Into<CompactString>,
        name: impl Into<CompactString>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: name.into(),
            group: CompactString::default(),
            namespace: CompactString::default(),
            parent_refs: Vec::new(),
            health: None,
            created_at: None,
        }
    }

    /// Set the API group.
    pub fn with_group(mut self, group: impl Into<CompactString>) -> Self {
        self.group = group.into();
        self
    }

    /// Set the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<CompactString>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Add a parent reference.
    pub fn with_parent(mut self, parent: impl Into<NodeId>) -> Self {
        self.parent_refs.push(parent.into());
        self
    }

    /// Set the health.
    pub fn with_health(mut self, status: HealthStatus, message: impl Into<String>) -> Self {
        self.health = Some(Health::new(status, message));
        self
    }

    /// Set the creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Check if this node has no parent references.
    pub fn is_orphan(&self) -> bool {
        self.parent_refs.is_empty()
    }

    /// Key used to look up status overrides: `kind/name`.
    pub fn overlay_key(&self) -> String {
        format!("{}/{}", self.kind, self.name)
    }

    /// Health status and reason, empty when health was never assessed.
    pub fn health_status_and_reason(&self) -> (String, &str) {
        match &self.health {
            Some(health) => (health.status.to_string(), health.message.as_str()),
            None => (String::new(), ""),
        }
    }
}
