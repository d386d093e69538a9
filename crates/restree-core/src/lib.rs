//! Core types for restree.
//!
//! This crate provides the data structures the renderers read: resource
//! nodes, the node index with its parent-to-children adjacency, status
//! overlays, snapshots, and render configuration.

mod config;
mod error;
mod node;
mod overlay;
mod snapshot;
mod tree;

pub use config::{Detail, RenderConfig, RenderConfigBuilder};
pub use error::{GraphDefect, RenderError, TreeError};
pub use node::{Health, HealthStatus, NodeId, ResourceNode};
pub use overlay::{ResourceState, StatusOverlay};
pub use snapshot::Snapshot;
pub use tree::ResourceTree;
