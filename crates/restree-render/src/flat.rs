//! Flat orphaned / not-orphaned tables.

use strum::{Display, EnumString};

use restree_core::{RenderConfig, RenderError, ResourceNode, ResourceTree};

use crate::row::{DETAILED_FLAT_HEADER, FLAT_HEADER, FlatRow};
use crate::sort::sorted_roots;
use crate::tabwriter::RowSink;
use crate::walk::walk;

/// Which table a flat render writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum Table {
    /// Nodes with at least one parent reference, flagged `No`.
    NotOrphaned,
    /// Every visited node, flagged `Yes`.
    ///
    /// Only meaningful when started from a true orphan: descendants are
    /// listed too, whatever their own parent references.
    Orphaned,
}

impl Table {
    /// Check if a visited node gets a row in this table.
    pub fn admits(self, node: &ResourceNode) -> bool {
        match self {
            Table::NotOrphaned => !node.is_orphan(),
            Table::Orphaned => true,
        }
    }

    /// Value of the `ORPHANED` column.
    pub fn is_orphaned(self) -> bool {
        self == Table::Orphaned
    }
}

/// Which resource sets a listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Selection {
    /// Managed resources only.
    #[default]
    Managed,
    /// Orphaned resources only.
    Orphaned,
    /// Managed resources followed by orphaned ones.
    All,
}

/// Renders resources as flat table rows without connectors.
#[derive(Debug, Clone, Copy)]
pub struct FlatRenderer<'a> {
    tree: &'a ResourceTree,
    config: &'a RenderConfig,
}

impl<'a> FlatRenderer<'a> {
    /// Create a flat renderer.
    pub fn new(tree: &'a ResourceTree, config: &'a RenderConfig) -> Self {
        Self { tree, config }
    }

    /// Column headers for the configured detail level.
    pub fn header(&self) -> &'static [&'static str] {
        if self.config.is_detailed() {
            DETAILED_FLAT_HEADER
        } else {
            FLAT_HEADER
        }
    }

    /// Walk `root` and its descendants, writing a row for each node `table`
    /// admits. Returns the number of rows written.
    pub fn render_flat<S: RowSink>(
        &self,
        root: &ResourceNode,
        table: Table,
        sink: &mut S,
    ) -> Result<usize, RenderError> {
        let mut rows = 0;
        walk(self.tree, root, |node, _| {
            if !table.admits(node) {
                return Ok(());
            }
            if table.is_orphaned() && !node.is_orphan() {
                tracing::warn!(
                    node = %node.id,
                    root = %root.id,
                    "listing resource with parent references as orphaned"
                );
            }
            let row = FlatRow::new(node, table.is_orphaned(), self.config.reference_time);
            sink.write_row(&row.cells(self.config.detail))?;
            rows += 1;
            Ok(())
        })?;

        tracing::debug!(root = %root.id, %table, rows, "rendered flat table");
        Ok(rows)
    }

    /// Render every root of the tree in sibling order.
    pub fn render_forest<S: RowSink>(
        &self,
        table: Table,
        sink: &mut S,
    ) -> Result<usize, RenderError> {
        let mut rows = 0;
        for root in sorted_roots(self.tree) {
            rows += self.render_flat(root, table, sink)?;
        }
        Ok(rows)
    }
}

/// Render the resource listing: header (if enabled), then the managed
/// resources as the not-orphaned table and/or the orphaned resources as the
/// orphaned table.
pub fn render_listing<S: RowSink>(
    managed: &ResourceTree,
    orphaned: &ResourceTree,
    selection: Selection,
    config: &RenderConfig,
    sink: &mut S,
) -> Result<usize, RenderError> {
    let managed_renderer = FlatRenderer::new(managed, config);
    if config.show_headers {
        sink.write_row(managed_renderer.header())?;
    }

    let mut rows = 0;
    if matches!(selection, Selection::Managed | Selection::All) {
        rows += managed_renderer.render_forest(Table::NotOrphaned, sink)?;
    }
    if matches!(selection, Selection::Orphaned | Selection::All) {
        rows += FlatRenderer::new(orphaned, config).render_forest(Table::Orphaned, sink)?;
    }
    Ok(rows)
}
