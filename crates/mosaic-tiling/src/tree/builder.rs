//! Balanced construction from a flat list of leaf ids.

use super::{Direction, MosaicNode, MosaicTree};

/// Build a tree of minimal depth from `ids`, preserving their order.
///
/// The list is halved at `len / 2` and the halves are joined under a split
/// whose direction alternates with depth (row, column, row, ...), so panes
/// stay roughly square as the count grows instead of collapsing into a strip.
pub fn build_balanced<T: Clone>(ids: &[T]) -> MosaicTree<T> {
    if ids.is_empty() {
        return None;
    }
    Some(build_at_depth(ids, 0))
}

fn build_at_depth<T: Clone>(ids: &[T], depth: usize) -> MosaicNode<T> {
    if let [only] = ids {
        return MosaicNode::Leaf(only.clone());
    }
    let (first, second) = ids.split_at(ids.len() / 2);
    let direction = if depth % 2 == 0 {
        Direction::Row
    } else {
        Direction::Column
    };
    MosaicNode::split(
        direction,
        build_at_depth(first, depth + 1),
        build_at_depth(second, depth + 1),
    )
}
