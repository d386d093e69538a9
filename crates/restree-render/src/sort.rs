//! Deterministic sibling ordering.

use std::cmp::Ordering;

use itertools::Itertools;

use restree_core::{GraphDefect, NodeId, RenderError, ResourceNode, ResourceTree};

/// Compare nodes by kind, then name, then group, then namespace.
///
/// Kind and name come first because they are the visible fields of a tree
/// line. Group and namespace only break ties between resources of the same
/// kind and name, since (group, kind, namespace, name) identifies a resource.
pub fn compare_nodes(a: &ResourceNode, b: &ResourceNode) -> Ordering {
    a.kind
        .cmp(&b.kind)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.group.cmp(&b.group))
        .then_with(|| a.namespace.cmp(&b.namespace))
}

/// Resolve sibling ids against the tree and return them in display order.
///
/// Each entry carries the node's arena index alongside the node.
pub fn sort_siblings<'a>(
    tree: &'a ResourceTree,
    ids: &[NodeId],
) -> Result<Vec<(usize, &'a ResourceNode)>, RenderError> {
    let resolved: Vec<(usize, &ResourceNode)> = ids
        .iter()
        .map(|id| {
            tree.get_full(id)
                .ok_or_else(|| RenderError::malformed(id, GraphDefect::UnknownNode))
        })
        .collect::<Result<_, _>>()?;

    Ok(resolved
        .into_iter()
        .sorted_by(|(_, a), (_, b)| compare_nodes(a, b))
        .collect())
}

/// Roots of the tree in display order.
pub fn sorted_roots(tree: &ResourceTree) -> Vec<&ResourceNode> {
    tree.roots().sorted_by(|a, b| compare_nodes(a, b)).collect()
}
