//! Depth-first, pre-order traversal shared by the renderers.

use restree_core::{GraphDefect, RenderError, ResourceNode, ResourceTree};

use crate::prefix::PrefixTracker;
use crate::sort::sort_siblings;

/// Visit `root` and every node below it, parents before children.
///
/// Children are visited in sibling order. The tracker handed to `visit` is
/// positioned at the visited node. A node reached a second time, whether
/// through a cycle or a second parent, aborts the walk with
/// [`RenderError::MalformedGraph`].
pub fn walk<'a, F>(
    tree: &'a ResourceTree,
    root: &ResourceNode,
    mut visit: F,
) -> Result<(), RenderError>
where
    F: FnMut(&'a ResourceNode, &PrefixTracker) -> Result<(), RenderError>,
{
    let (root_idx, root) = tree
        .get_full(&root.id)
        .ok_or_else(|| RenderError::malformed(&root.id, GraphDefect::UnknownNode))?;

    let mut walker = Walker {
        tree,
        on_path: vec![false; tree.len()],
        seen: vec![false; tree.len()],
        prefix: PrefixTracker::new(),
    };
    walker.descend(root_idx, root, &mut visit)
}

struct Walker<'a> {
    tree: &'a ResourceTree,
    on_path: Vec<bool>,
    seen: Vec<bool>,
    prefix: PrefixTracker,
}

impl<'a> Walker<'a> {
    fn descend<F>(
        &mut self,
        idx: usize,
        node: &'a ResourceNode,
        visit: &mut F,
    ) -> Result<(), RenderError>
    where
        F: FnMut(&'a ResourceNode, &PrefixTracker) -> Result<(), RenderError>,
    {
        if self.on_path[idx] {
            return Err(RenderError::malformed(&node.id, GraphDefect::Cycle));
        }
        if self.seen[idx] {
            return Err(RenderError::malformed(&node.id, GraphDefect::SharedChild));
        }
        self.on_path[idx] = true;
        self.seen[idx] = true;

        visit(node, &self.prefix)?;

        let children = sort_siblings(self.tree, self.tree.children(&node.id))?;
        let last = children.len().saturating_sub(1);
        for (i, (child_idx, child)) in children.into_iter().enumerate() {
            self.prefix.push(i == last);
            self.descend(child_idx, child, visit)?;
            self.prefix.pop();
        }

        self.on_path[idx] = false;
        Ok(())
    }
}
