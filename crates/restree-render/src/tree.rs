//! ASCII tree view.

use restree_core::{RenderConfig, RenderError, ResourceNode, ResourceTree, StatusOverlay};

use crate::row::{DETAILED_TREE_HEADER, TREE_HEADER, TreeRow};
use crate::sort::sorted_roots;
use crate::tabwriter::RowSink;
use crate::walk::walk;

/// Renders resources as a tree, one line per node.
#[derive(Debug, Clone, Copy)]
pub struct TreeRenderer<'a> {
    tree: &'a ResourceTree,
    overlay: Option<&'a StatusOverlay>,
    config: &'a RenderConfig,
}

impl<'a> TreeRenderer<'a> {
    /// Create a renderer without a status overlay.
    pub fn new(tree: &'a ResourceTree, config: &'a RenderConfig) -> Self {
        Self {
            tree,
            overlay: None,
            config,
        }
    }

    /// Override displayed name, status, health, and message from `overlay`.
    pub fn with_overlay(mut self, overlay: &'a StatusOverlay) -> Self {
        self.overlay = Some(overlay);
        self
    }

    /// Column headers for the configured detail level.
    pub fn header(&self) -> &'static [&'static str] {
        if self.config.is_detailed() {
            DETAILED_TREE_HEADER
        } else {
            TREE_HEADER
        }
    }

    /// Render `root` and its descendants. Returns the number of rows written.
    pub fn render_tree<S: RowSink>(
        &self,
        root: &ResourceNode,
        sink: &mut S,
    ) -> Result<usize, RenderError> {
        let mut rows = 0;
        walk(self.tree, root, |node, prefix| {
            let state = self.overlay.and_then(|overlay| overlay.lookup(node));
            let row = TreeRow::new(node, &prefix.prefix(), state, self.config.reference_time);
            sink.write_row(&row.cells(self.config.detail))?;
            rows += 1;
            Ok(())
        })?;

        tracing::debug!(root = %root.id, detail = %self.config.detail, rows, "rendered tree");
        Ok(rows)
    }

    /// Render every root of the tree in sibling order.
    pub fn render_forest<S: RowSink>(&self, sink: &mut S) -> Result<usize, RenderError> {
        let mut rows = 0;
        for root in sorted_roots(self.tree) {
            rows += self.render_tree(root, sink)?;
        }
        Ok(rows)
    }
}

/// Render the full tree view: header (if enabled) followed by every root.
pub fn render_tree_view<S: RowSink>(
    tree: &ResourceTree,
    overlay: Option<&StatusOverlay>,
    config: &RenderConfig,
    sink: &mut S,
) -> Result<usize, RenderError> {
    let mut renderer = TreeRenderer::new(tree, config);
    if let Some(overlay) = overlay {
        renderer = renderer.with_overlay(overlay);
    }
    if config.show_headers {
        sink.write_row(renderer.header())?;
    }
    renderer.render_forest(sink)
}
