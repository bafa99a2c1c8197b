//! Structural operations on the split tree: insert, remove, replace, expand, move.
//!
//! Nothing here mutates in place. Each operation rebuilds the ancestors along
//! the affected path and clones untouched subtrees into the result.

use tracing::debug;

use super::{Direction, DropPosition, MosaicNode};
use crate::corner::{insertion_branch, Corner};
use crate::error::LayoutError;
use crate::path::{Branch, LayoutPath};

impl<T: Clone + PartialEq> MosaicNode<T> {
    /// Replace the node at `path` with `replacement`.
    pub fn replace_at_path(
        &self,
        path: &LayoutPath,
        replacement: MosaicNode<T>,
    ) -> Result<MosaicNode<T>, LayoutError> {
        self.replace_from(path.branches(), replacement)
            .ok_or_else(|| LayoutError::PathNotFound(path.clone()))
    }

    fn replace_from(&self, branches: &[Branch], replacement: MosaicNode<T>) -> Option<MosaicNode<T>> {
        let Some((head, rest)) = branches.split_first() else {
            return Some(replacement);
        };
        match self {
            MosaicNode::Leaf(_) => None,
            MosaicNode::Split {
                direction,
                first,
                second,
                split_percentage,
            } => {
                let (first, second) = match head {
                    Branch::First => (first.replace_from(rest, replacement)?, (**second).clone()),
                    Branch::Second => ((**first).clone(), second.replace_from(rest, replacement)?),
                };
                Some(MosaicNode::Split {
                    direction: *direction,
                    first: Box::new(first),
                    second: Box::new(second),
                    split_percentage: *split_percentage,
                })
            }
        }
    }

    /// Open `new_id` next to the pane occupying `corner`.
    ///
    /// The new split runs opposite to the destination's parent, or as a row
    /// when the destination is the root.
    pub fn insert_at_corner(&self, corner: Corner, new_id: T) -> Result<MosaicNode<T>, LayoutError> {
        if self.contains(&new_id) {
            return Err(LayoutError::DuplicateId);
        }
        let path = self.path_to_corner(corner);
        self.insert_at_path(&path, corner, new_id)
    }

    /// Wrap the node at `path` together with `new_id`. A path that no longer
    /// resolves falls back to wrapping the root.
    pub fn insert_at_path(
        &self,
        path: &LayoutPath,
        corner: Corner,
        new_id: T,
    ) -> Result<MosaicNode<T>, LayoutError> {
        let (target, destination) = match self.node_at_path(path) {
            Some(node) => (path.clone(), node),
            None => {
                debug!("insertion path {path} is stale, inserting at the root");
                (LayoutPath::root(), self)
            }
        };

        let direction = target
            .parent()
            .ok()
            .and_then(|parent| self.node_at_path(&parent))
            .and_then(MosaicNode::direction)
            .map(Direction::other)
            .unwrap_or(Direction::Row);

        let new_leaf = MosaicNode::Leaf(new_id);
        let destination = destination.clone();
        let wrapped = match insertion_branch(corner, direction) {
            Branch::First => MosaicNode::split(direction, new_leaf, destination),
            Branch::Second => MosaicNode::split(direction, destination, new_leaf),
        };
        self.replace_at_path(&target, wrapped)
    }

    /// Remove the leaf holding `id`. A split that loses one side is replaced
    /// by the surviving side; the split's own percentage is dropped with it.
    /// Returns `None` when nothing is left.
    pub fn remove_leaf(&self, id: &T) -> Option<MosaicNode<T>> {
        match self {
            MosaicNode::Leaf(leaf) if leaf == id => None,
            MosaicNode::Leaf(_) => Some(self.clone()),
            MosaicNode::Split {
                direction,
                first,
                second,
                split_percentage,
            } => match (first.remove_leaf(id), second.remove_leaf(id)) {
                (None, None) => None,
                (Some(kept), None) | (None, Some(kept)) => Some(kept),
                (Some(first), Some(second)) => Some(MosaicNode::Split {
                    direction: *direction,
                    first: Box::new(first),
                    second: Box::new(second),
                    split_percentage: *split_percentage,
                }),
            },
        }
    }

    /// Remove the node at `path` and promote its sibling into the parent's
    /// place. Removing the root empties the tree; a path that does not
    /// resolve leaves the tree unchanged.
    pub fn remove_at_path(&self, path: &LayoutPath) -> Option<MosaicNode<T>> {
        if path.is_root() {
            return None;
        }
        let promoted = path
            .sibling()
            .ok()
            .filter(|_| self.node_at_path(path).is_some())
            .and_then(|sibling| self.node_at_path(&sibling))
            .cloned();
        match (promoted, path.parent()) {
            (Some(promoted), Ok(parent)) => self
                .replace_from(parent.branches(), promoted)
                .or_else(|| Some(self.clone())),
            _ => Some(self.clone()),
        }
    }

    /// Give the node at `path` `percentage` of every split on the way to it.
    pub fn expand(&self, path: &LayoutPath, percentage: f64) -> Result<MosaicNode<T>, LayoutError> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(LayoutError::InvalidPercentage(percentage));
        }
        if self.node_at_path(path).is_none() {
            return Err(LayoutError::PathNotFound(path.clone()));
        }
        Ok(self.expand_from(path.branches(), percentage))
    }

    fn expand_from(&self, branches: &[Branch], percentage: f64) -> MosaicNode<T> {
        match (branches.split_first(), self) {
            (
                Some((head, rest)),
                MosaicNode::Split {
                    direction,
                    first,
                    second,
                    ..
                },
            ) => {
                let (first, second, share) = match head {
                    Branch::First => (
                        first.expand_from(rest, percentage),
                        (**second).clone(),
                        percentage,
                    ),
                    Branch::Second => (
                        (**first).clone(),
                        second.expand_from(rest, percentage),
                        100.0 - percentage,
                    ),
                };
                MosaicNode::Split {
                    direction: *direction,
                    first: Box::new(first),
                    second: Box::new(second),
                    split_percentage: Some(share),
                }
            }
            _ => self.clone(),
        }
    }

    /// Drag the node at `source` onto the `position` side of the node at
    /// `destination`. Both paths refer to this snapshot; the destination is
    /// re-derived after the source is pruned.
    pub fn move_node(
        &self,
        source: &LayoutPath,
        destination: &LayoutPath,
        position: DropPosition,
    ) -> Result<MosaicNode<T>, LayoutError> {
        if source.is_root() {
            return Err(LayoutError::InvalidMove("cannot move the root".into()));
        }
        let moved = self
            .node_at_path(source)
            .ok_or_else(|| LayoutError::PathNotFound(source.clone()))?
            .clone();
        if self.node_at_path(destination).is_none() {
            return Err(LayoutError::PathNotFound(destination.clone()));
        }
        if destination.starts_with(source) {
            return Err(LayoutError::InvalidMove(format!(
                "destination {destination} lies inside {source}"
            )));
        }

        let pruned = self.remove_at_path(source).ok_or(LayoutError::EmptyTree)?;
        let destination = rebase_after_removal(destination, &source.parent()?);
        let target = pruned
            .node_at_path(&destination)
            .ok_or_else(|| LayoutError::PathNotFound(destination.clone()))?
            .clone();

        let wrapped = match position {
            DropPosition::Left => MosaicNode::row(moved, target),
            DropPosition::Right => MosaicNode::row(target, moved),
            DropPosition::Top => MosaicNode::column(moved, target),
            DropPosition::Bottom => MosaicNode::column(target, moved),
        };
        pruned.replace_at_path(&destination, wrapped)
    }
}

/// After the node under `parent` is removed its sibling takes the parent's
/// place, so paths through the sibling lose one step.
fn rebase_after_removal(path: &LayoutPath, parent: &LayoutPath) -> LayoutPath {
    if path.len() > parent.len() && path.starts_with(parent) {
        let branches = path.branches();
        branches[..parent.len()]
            .iter()
            .chain(&branches[parent.len() + 1..])
            .copied()
            .collect()
    } else {
        path.clone()
    }
}
