//! Error types for building and rendering resource graphs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;

use crate::node::NodeId;

/// Errors that can occur while assembling a resource graph.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Two nodes share the same id.
    #[error("Duplicate node id: {id}")]
    DuplicateNode { id: NodeId },

    /// Snapshot could not be decoded.
    #[error("Invalid snapshot: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Snapshot could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TreeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// What is wrong with a graph that could not be traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum GraphDefect {
    /// The node is already on the current path.
    #[strum(serialize = "cycle")]
    Cycle,
    /// The node was reached under a second parent.
    #[strum(serialize = "node reachable through more than one parent")]
    SharedChild,
    /// The adjacency names a node missing from the index.
    #[strum(serialize = "unknown node")]
    UnknownNode,
}

/// Errors that can occur while rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The graph is not a forest.
    #[error("Malformed resource graph at {id}: {defect}")]
    MalformedGraph { id: NodeId, defect: GraphDefect },

    /// Writing to the output sink failed.
    #[error("Failed to write output: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Create a malformed graph error.
    pub fn malformed(id: &NodeId, defect: GraphDefect) -> Self {
        Self::MalformedGraph {
            id: id.clone(),
            defect,
        }
    }
}
