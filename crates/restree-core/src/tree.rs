//! Node index and parent-to-children adjacency.

use std::collections::HashMap;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::TreeError;
use crate::node::{NodeId, ResourceNode};

/// A resource graph: nodes indexed by id plus a parent-to-children map.
///
/// Nodes live in insertion order, so each one also has a stable arena index
/// that traversals can use for visit bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct ResourceTree {
    nodes: IndexMap<NodeId, ResourceNode>,
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl ResourceTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index the nodes and derive the adjacency from their parent references.
    ///
    /// Children are listed under each parent in input order.
    pub fn from_nodes(nodes: impl IntoIterator<Item = ResourceNode>) -> Result<Self, TreeError> {
        let nodes = index_nodes(nodes)?;
        let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for node in nodes.values() {
            for parent in &node.parent_refs {
                children
                    .entry(parent.clone())
                    .or_default()
                    .push(node.id.clone());
            }
        }
        Ok(Self { nodes, children })
    }

    /// Index the nodes and use a caller-built adjacency as-is.
    pub fn with_adjacency(
        nodes: impl IntoIterator<Item = ResourceNode>,
        children: HashMap<NodeId, Vec<NodeId>>,
    ) -> Result<Self, TreeError> {
        Ok(Self {
            nodes: index_nodes(nodes)?,
            children,
        })
    }

    /// Look up a node by id.
    pub fn get(&self, id: &NodeId) -> Option<&ResourceNode> {
        self.nodes.get(id)
    }

    /// Look up a node and its arena index.
    pub fn get_full(&self, id: &NodeId) -> Option<(usize, &ResourceNode)> {
        self.nodes.get_full(id).map(|(idx, _, node)| (idx, node))
    }

    /// Children registered under a parent id, unsorted.
    pub fn children(&self, id: &NodeId) -> &[NodeId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Nodes with no parent references, in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.values().filter(|node| node.is_orphan())
    }

    /// Iterate over all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.values()
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn index_nodes(
    nodes: impl IntoIterator<Item = ResourceNode>,
) -> Result<IndexMap<NodeId, ResourceNode>, TreeError> {
    let mut index = IndexMap::new();
    for node in nodes {
        match index.entry(node.id.clone()) {
            Entry::Occupied(_) => return Err(TreeError::DuplicateNode { id: node.id }),
            Entry::Vacant(slot) => {
                slot.insert(node);
            }
        }
    }
    Ok(index)
}
