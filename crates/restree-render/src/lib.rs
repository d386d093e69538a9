//! Text rendering for restree.
//!
//! Turns a [`ResourceTree`](restree_core::ResourceTree) into aligned text in
//! one of four shapes:
//!
//! - **Tree** - one line per resource with box-drawing connectors
//! - **Detailed tree** - adds age and health reason
//! - **Flat table** - orphaned or not-orphaned resources, no connectors
//! - **Detailed flat table** - adds age, health, and reason
//!
//! All shapes share one depth-first traversal with deterministic sibling
//! order, so rendering the same input twice gives byte-identical output.
//!
//! ```rust,ignore
//! use restree_core::{RenderConfig, Snapshot};
//! use restree_render::{TabWriter, render_tree_view};
//!
//! let snapshot = Snapshot::from_path("app.json")?;
//! let tree = snapshot.managed_tree()?;
//! let overlay = snapshot.overlay();
//! let config = RenderConfig::default();
//!
//! let mut out = TabWriter::new(std::io::stdout()).padding(config.padding);
//! render_tree_view(&tree, Some(&overlay), &config, &mut out)?;
//! out.flush()?;
//! ```

pub mod age;
mod flat;
pub mod prefix;
mod row;
mod sort;
mod tabwriter;
mod tree;
mod walk;

pub use age::{UNKNOWN_AGE, age_since, format_age};
pub use flat::{FlatRenderer, Selection, Table, render_listing};
pub use prefix::PrefixTracker;
pub use row::{
    DETAILED_FLAT_HEADER, DETAILED_TREE_HEADER, FLAT_HEADER, FlatRow, TREE_HEADER, TreeRow,
};
pub use sort::{compare_nodes, sort_siblings, sorted_roots};
pub use tabwriter::{RowSink, TabWriter};
pub use tree::{TreeRenderer, render_tree_view};
pub use walk::walk;

// Re-export core types
pub use restree_core::{RenderConfig, RenderError, ResourceNode, ResourceTree, StatusOverlay};
