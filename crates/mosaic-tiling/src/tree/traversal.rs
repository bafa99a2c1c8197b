//! Read-only queries: path lookup, leaf listing, depth statistics.

use super::MosaicNode;
use crate::path::{Branch, LayoutPath};

impl<T> MosaicNode<T> {
    /// Walk `path` from this node. Returns `None` when the path runs past a
    /// leaf, which is the normal outcome for a stale path.
    pub fn node_at_path(&self, path: &LayoutPath) -> Option<&MosaicNode<T>> {
        path.iter()
            .try_fold(self, |node, branch| node.child(branch))
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            MosaicNode::Leaf(_) => 1,
            MosaicNode::Split { first, second, .. } => first.leaf_count() + second.leaf_count(),
        }
    }

    /// Leaf ids in depth-first, first-before-second order.
    pub fn leaf_refs(&self) -> Vec<&T> {
        let mut ids = Vec::new();
        self.collect_refs_into(&mut ids);
        ids
    }

    fn collect_refs_into<'a>(&'a self, out: &mut Vec<&'a T>) {
        match self {
            MosaicNode::Leaf(id) => out.push(id),
            MosaicNode::Split { first, second, .. } => {
                first.collect_refs_into(out);
                second.collect_refs_into(out);
            }
        }
    }

    /// Depth of the shallowest and deepest leaf. A lone leaf is `(0, 0)`.
    pub fn depth_range(&self) -> (usize, usize) {
        match self {
            MosaicNode::Leaf(_) => (0, 0),
            MosaicNode::Split { first, second, .. } => {
                let (first_min, first_max) = first.depth_range();
                let (second_min, second_max) = second.depth_range();
                (
                    first_min.min(second_min) + 1,
                    first_max.max(second_max) + 1,
                )
            }
        }
    }

    /// First split percentage outside `[0, 100]` (NaN included), in
    /// depth-first order.
    pub fn invalid_percentage(&self) -> Option<f64> {
        match self {
            MosaicNode::Leaf(_) => None,
            MosaicNode::Split {
                first,
                second,
                split_percentage,
                ..
            } => split_percentage
                .filter(|p| !(0.0..=100.0).contains(p))
                .or_else(|| first.invalid_percentage())
                .or_else(|| second.invalid_percentage()),
        }
    }

    pub fn has_valid_percentages(&self) -> bool {
        self.invalid_percentage().is_none()
    }

    /// Number of splits in the tree.
    pub fn split_count(&self) -> usize {
        match self {
            MosaicNode::Leaf(_) => 0,
            MosaicNode::Split { first, second, .. } => 1 + first.split_count() + second.split_count(),
        }
    }
}

impl<T: Clone> MosaicNode<T> {
    /// Collect all leaf ids in depth-first order.
    pub fn leaves(&self) -> Vec<T> {
        self.leaf_refs().into_iter().cloned().collect()
    }
}

impl<T: PartialEq> MosaicNode<T> {
    pub fn contains(&self, id: &T) -> bool {
        match self {
            MosaicNode::Leaf(leaf) => leaf == id,
            MosaicNode::Split { first, second, .. } => first.contains(id) || second.contains(id),
        }
    }

    /// Path of the leaf holding `id`, if any.
    pub fn path_to(&self, id: &T) -> Option<LayoutPath> {
        let mut branches = Vec::new();
        self.path_to_into(id, &mut branches)
            .then(|| LayoutPath::from(branches))
    }

    fn path_to_into(&self, id: &T, branches: &mut Vec<Branch>) -> bool {
        match self {
            MosaicNode::Leaf(leaf) => leaf == id,
            MosaicNode::Split { first, second, .. } => {
                for (branch, child) in [(Branch::First, first), (Branch::Second, second)] {
                    branches.push(branch);
                    if child.path_to_into(id, branches) {
                        return true;
                    }
                    branches.pop();
                }
                false
            }
        }
    }

    /// True when every leaf id appears exactly once.
    pub fn has_unique_leaves(&self) -> bool {
        let ids = self.leaf_refs();
        ids.iter()
            .enumerate()
            .all(|(i, id)| !ids[i + 1..].contains(id))
    }
}
