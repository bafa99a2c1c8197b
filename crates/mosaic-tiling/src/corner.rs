//! Corner location: the canonical path to the pane occupying a layout corner.

pub use mosaic_common::Corner;

use crate::path::{Branch, LayoutPath};
use crate::tree::{Direction, MosaicNode};

impl<T> MosaicNode<T> {
    /// Path to the deepest node occupying `corner`. A row divides
    /// left/right, a column divides top/bottom. For a lone leaf this is the
    /// root path.
    pub fn path_to_corner(&self, corner: Corner) -> LayoutPath {
        let mut path = LayoutPath::root();
        let mut current = self;
        while let MosaicNode::Split {
            direction,
            first,
            second,
            ..
        } = current
        {
            let branch = corner_branch(corner, *direction);
            path.push(branch);
            current = match branch {
                Branch::First => first.as_ref(),
                Branch::Second => second.as_ref(),
            };
        }
        path
    }
}

/// Which child of a split with `direction` lies toward `corner`.
pub fn corner_branch(corner: Corner, direction: Direction) -> Branch {
    let toward_first = match direction {
        Direction::Row => corner.is_left(),
        Direction::Column => corner.is_top(),
    };
    if toward_first {
        Branch::First
    } else {
        Branch::Second
    }
}

/// Which side of a freshly created split the inserted leaf takes.
///
/// In a row the new leaf moves onto the corner's horizontal edge. In a
/// column the destination keeps the corner's vertical edge and the new
/// leaf goes on the opposite half.
pub(crate) fn insertion_branch(corner: Corner, direction: Direction) -> Branch {
    match direction {
        Direction::Row => corner_branch(corner, direction),
        Direction::Column => corner_branch(corner, direction).other(),
    }
}
