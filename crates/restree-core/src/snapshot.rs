//! Serialized resource graph snapshots.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::node::ResourceNode;
use crate::overlay::{ResourceState, StatusOverlay};
use crate::tree::ResourceTree;

/// A resource graph as supplied by the inspection tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Managed resources.
    #[serde(default)]
    pub nodes: Vec<ResourceNode>,

    /// Resources found in the target namespace but not managed.
    #[serde(default)]
    pub orphaned_nodes: Vec<ResourceNode>,

    /// Per-resource state overriding the nodes' own fields.
    #[serde(default)]
    pub resources: Vec<ResourceState>,
}

impl Snapshot {
    /// Decode a snapshot from JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, TreeError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Read and decode a snapshot file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TreeError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| TreeError::io(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Graph of the managed resources.
    pub fn managed_tree(&self) -> Result<ResourceTree, TreeError> {
        ResourceTree::from_nodes(self.nodes.iter().cloned())
    }

    /// Graph of the orphaned resources.
    pub fn orphaned_tree(&self) -> Result<ResourceTree, TreeError> {
        ResourceTree::from_nodes(self.orphaned_nodes.iter().cloned())
    }

    /// Status overlay built from the resource states.
    pub fn overlay(&self) -> StatusOverlay {
        self.resources.iter().cloned().collect()
    }
}
