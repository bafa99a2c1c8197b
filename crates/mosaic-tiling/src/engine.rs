//! The engine's programmatic surface over possibly empty trees.

use serde::{de::DeserializeOwned, Serialize};

use crate::corner::Corner;
use crate::error::LayoutError;
use crate::path::LayoutPath;
use crate::tree::{build_balanced, MosaicNode, MosaicTree};

/// Balanced construction from an ordered list of ids.
pub fn build<T: Clone>(ids: &[T]) -> MosaicTree<T> {
    build_balanced(ids)
}

/// Open `new_id` at `corner`. On an empty tree the new leaf becomes the root.
pub fn insert_at_corner<T: Clone + PartialEq>(
    tree: &MosaicTree<T>,
    corner: Corner,
    new_id: T,
) -> Result<MosaicNode<T>, LayoutError> {
    match tree {
        Some(root) => root.insert_at_corner(corner, new_id),
        None => Ok(MosaicNode::Leaf(new_id)),
    }
}

/// Remove the leaf holding `id`. An unknown id leaves the tree unchanged.
pub fn remove<T: Clone + PartialEq>(tree: &MosaicTree<T>, id: &T) -> MosaicTree<T> {
    tree.as_ref().and_then(|root| root.remove_leaf(id))
}

pub fn locate<'a, T>(tree: &'a MosaicTree<T>, path: &LayoutPath) -> Option<&'a MosaicNode<T>> {
    tree.as_ref().and_then(|root| root.node_at_path(path))
}

/// Path to the pane at `corner`; the root path for an empty tree.
pub fn path_to_corner<T>(tree: &MosaicTree<T>, corner: Corner) -> LayoutPath {
    tree.as_ref()
        .map(|root| root.path_to_corner(corner))
        .unwrap_or_default()
}

/// Encode a tree as JSON. The empty tree is `null`.
pub fn to_json<T: Serialize>(tree: &MosaicTree<T>) -> Result<String, LayoutError> {
    serde_json::to_string(tree).map_err(|e| LayoutError::Serialization(e.to_string()))
}

/// Decode a tree from JSON, rejecting trees that repeat a leaf id or carry
/// a split percentage outside `[0, 100]`.
pub fn from_json<T: DeserializeOwned + PartialEq>(json: &str) -> Result<MosaicTree<T>, LayoutError> {
    let tree: MosaicTree<T> =
        serde_json::from_str(json).map_err(|e| LayoutError::Serialization(e.to_string()))?;
    match &tree {
        Some(root) if !root.has_unique_leaves() => Err(LayoutError::DuplicateId),
        Some(root) => match root.invalid_percentage() {
            Some(p) => Err(LayoutError::InvalidPercentage(p)),
            None => Ok(tree),
        },
        None => Ok(tree),
    }
}
