//! Tree connector prefixes.
//!
//! Every glyph is two columns wide so labels stay aligned at any depth.

/// Connector for a child that has later siblings.
pub const BRANCH: &str = "├─";

/// Connector for the last child of a parent.
pub const LAST_BRANCH: &str = "└─";

/// Continuation under an ancestor that still has siblings below it.
pub const PIPE: &str = "│ ";

/// Indentation under an ancestor that was a last child.
pub const BLANK: &str = "  ";

/// Per-depth "is last sibling" flags for the current path.
///
/// Depth 0 (the root) has no entry and no connector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixTracker {
    lasts: Vec<bool>,
}

impl PrefixTracker {
    /// Create a tracker positioned at a root.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current depth below the root.
    pub fn depth(&self) -> usize {
        self.lasts.len()
    }

    /// Descend into a child.
    pub fn push(&mut self, is_last: bool) {
        self.lasts.push(is_last);
    }

    /// Return to the parent.
    pub fn pop(&mut self) -> Option<bool> {
        self.lasts.pop()
    }

    /// Prefix for the line of the node at the current depth.
    pub fn prefix(&self) -> String {
        let Some((&is_last, ancestors)) = self.lasts.split_last() else {
            return String::new();
        };
        let mut prefix = extend(ancestors);
        prefix.push_str(if is_last { LAST_BRANCH } else { BRANCH });
        prefix
    }

    /// Leading string contributed to every descendant of the current node.
    pub fn extension(&self) -> String {
        extend(&self.lasts)
    }
}

fn extend(lasts: &[bool]) -> String {
    lasts
        .iter()
        .map(|&is_last| if is_last { BLANK } else { PIPE })
        .collect()
}
