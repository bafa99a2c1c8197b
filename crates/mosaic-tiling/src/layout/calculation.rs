//! Tree-to-rect computation.

use crate::tree::{Direction, MosaicNode};
use mosaic_common::Rect;

use super::LayoutEngine;

impl LayoutEngine {
    /// Rect of every leaf within `viewport`, in depth-first order.
    pub fn compute<T: Clone>(&self, root: &MosaicNode<T>, viewport: Rect) -> Vec<(T, Rect)> {
        let mut placed = Vec::with_capacity(root.leaf_count());
        self.place(root, self.inset(viewport), &mut placed);
        placed
    }

    fn inset(&self, viewport: Rect) -> Rect {
        let pad = f64::from(self.outer_padding);
        Rect::new(
            viewport.x + pad,
            viewport.y + pad,
            (viewport.width - 2.0 * pad).max(0.0),
            (viewport.height - 2.0 * pad).max(0.0),
        )
    }

    fn place<T: Clone>(&self, node: &MosaicNode<T>, area: Rect, placed: &mut Vec<(T, Rect)>) {
        match node {
            MosaicNode::Leaf(id) => placed.push((id.clone(), area)),
            MosaicNode::Split {
                direction,
                first,
                second,
                ..
            } => {
                let (first_area, second_area) = self.divide(area, *direction, node.ratio());
                self.place(first, first_area, placed);
                self.place(second, second_area, placed);
            }
        }
    }

    /// Cut `area` along `direction`, giving the first side `ratio` of the
    /// space left after the gap.
    fn divide(&self, area: Rect, direction: Direction, ratio: f64) -> (Rect, Rect) {
        let gap = f64::from(self.gap);
        match direction {
            Direction::Row => {
                let usable = (area.width - gap).max(0.0);
                let lead = usable * ratio;
                (
                    Rect::new(area.x, area.y, lead, area.height),
                    Rect::new(area.x + lead + gap, area.y, (usable - lead).max(0.0), area.height),
                )
            }
            Direction::Column => {
                let usable = (area.height - gap).max(0.0);
                let lead = usable * ratio;
                (
                    Rect::new(area.x, area.y, area.width, lead),
                    Rect::new(area.x, area.y + lead + gap, area.width, (usable - lead).max(0.0)),
                )
            }
        }
    }
}
