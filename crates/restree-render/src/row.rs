//! Row models for the tree and flat views.

use chrono::{DateTime, Utc};

use restree_core::{Detail, ResourceNode, ResourceState};

use crate::age::age_since;

/// Header of the terse tree view.
pub const TREE_HEADER: &[&str] = &["KIND/NAME", "STATUS", "HEALTH", "MESSAGE"];

/// Header of the detailed tree view.
pub const DETAILED_TREE_HEADER: &[&str] =
    &["KIND/NAME", "STATUS", "HEALTH", "AGE", "MESSAGE", "REASON"];

/// Header of the terse flat view.
pub const FLAT_HEADER: &[&str] = &["GROUP", "KIND", "NAMESPACE", "NAME", "ORPHANED"];

/// Header of the detailed flat view.
pub const DETAILED_FLAT_HEADER: &[&str] = &[
    "GROUP", "KIND", "NAMESPACE", "NAME", "ORPHANED", "AGE", "HEALTH", "REASON",
];

/// One line of the tree view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    /// Connector prefix followed by `kind/name`.
    pub label: String,
    pub status: String,
    pub health: String,
    pub age: String,
    pub message: String,
    /// Health reason from the node itself, even when overridden.
    pub reason: String,
}

impl TreeRow {
    /// Build the row for a node.
    ///
    /// A resource state, when present, supplies the displayed name, status,
    /// health, and message. Without one, status and message stay blank and
    /// health comes from the node.
    pub fn new(
        node: &ResourceNode,
        prefix: &str,
        state: Option<&ResourceState>,
        now: DateTime<Utc>,
    ) -> Self {
        let (node_health, reason) = node.health_status_and_reason();
        let age = age_since(node.created_at, now);
        let reason = reason.to_string();

        match state {
            Some(state) => Self {
                label: format!("{prefix}{}/{}", node.kind, state.display_name()),
                status: state.status.clone(),
                health: state.health.clone(),
                age,
                message: state.message.clone(),
                reason,
            },
            None => Self {
                label: format!("{prefix}{}/{}", node.kind, node.name),
                status: String::new(),
                health: node_health,
                age,
                message: String::new(),
                reason,
            },
        }
    }

    /// Cells for the given column set.
    pub fn cells(&self, detail: Detail) -> Vec<&str> {
        match detail {
            Detail::Terse => vec![
                self.label.as_str(),
                self.status.as_str(),
                self.health.as_str(),
                self.message.as_str(),
            ],
            Detail::Detailed => vec![
                self.label.as_str(),
                self.status.as_str(),
                self.health.as_str(),
                self.age.as_str(),
                self.message.as_str(),
                self.reason.as_str(),
            ],
        }
    }
}

/// One line of the orphaned / not-orphaned tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    pub group: String,
    pub kind: String,
    pub namespace: String,
    pub name: String,
    pub orphaned: bool,
    pub age: String,
    pub health: String,
    pub reason: String,
}

impl FlatRow {
    /// Build the row for a node written to the orphaned or not-orphaned table.
    pub fn new(node: &ResourceNode, orphaned: bool, now: DateTime<Utc>) -> Self {
        let (health, reason) = node.health_status_and_reason();
        Self {
            group: node.group.to_string(),
            kind: node.kind.to_string(),
            namespace: node.namespace.to_string(),
            name: node.name.to_string(),
            orphaned,
            age: age_since(node.created_at, now),
            health,
            reason: reason.to_string(),
        }
    }

    /// `Yes` or `No`.
    pub fn orphaned_flag(&self) -> &'static str {
        if self.orphaned { "Yes" } else { "No" }
    }

    /// Cells for the given column set.
    pub fn cells(&self, detail: Detail) -> Vec<&str> {
        let mut cells = vec![
            self.group.as_str(),
            self.kind.as_str(),
            self.namespace.as_str(),
            self.name.as_str(),
            self.orphaned_flag(),
        ];
        if detail == Detail::Detailed {
            cells.extend([self.age.as_str(), self.health.as_str(), self.reason.as_str()]);
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use restree_core::HealthStatus;

    use super::*;

    #[test]
    fn test_tree_row_without_state() {
        let now = Utc::now();
        let node = ResourceNode::new("1", "Pod", "web-0")
            .with_health(HealthStatus::Degraded, "OOMKilled")
            .with_created_at(now - TimeDelta::seconds(30));
        let row = TreeRow::new(&node, "└─", None, now);

        assert_eq!(row.cells(Detail::Terse), vec!["└─Pod/web-0", "", "Degraded", ""]);
        assert_eq!(
            row.cells(Detail::Detailed),
            vec!["└─Pod/web-0", "", "Degraded", "30s", "", "OOMKilled"]
        );
    }

    #[test]
    fn test_tree_row_state_wins() {
        let node = ResourceNode::new("1", "Deployment", "web")
            .with_health(HealthStatus::Degraded, "rollout stuck");
        let state = ResourceState::new("Deployment", "web")
            .with_status("Synced")
            .with_health("Healthy")
            .with_message("deployment.apps/web configured");
        let row = TreeRow::new(&node, "", Some(&state), Utc::now());

        assert_eq!(
            row.cells(Detail::Detailed),
            vec![
                "Deployment/web",
                "Synced",
                "Healthy",
                "<unknown>",
                "deployment.apps/web configured",
                "rollout stuck"
            ]
        );
    }

    #[test]
    fn test_flat_row_cells() {
        let node = ResourceNode::new("1", "Role", "reader")
            .with_group("rbac.authorization.k8s.io")
            .with_namespace("prod");
        let row = FlatRow::new(&node, true, Utc::now());

        assert_eq!(
            row.cells(Detail::Terse),
            vec!["rbac.authorization.k8s.io", "Role", "prod", "reader", "Yes"]
        );
        assert_eq!(row.cells(Detail::Detailed)[5..], ["<unknown>", "", ""]);
    }
}
