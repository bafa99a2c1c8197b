//! Core types for the split tree: Direction, MosaicNode, DropPosition.

use serde::{Deserialize, Serialize};

use crate::path::Branch;

/// Axis a split divides. A row places children left and right, a column
/// places them top and bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Row,
    Column,
}

impl Direction {
    pub fn other(self) -> Self {
        match self {
            Direction::Row => Direction::Column,
            Direction::Column => Direction::Row,
        }
    }
}

/// A node of the binary split tree.
///
/// Serializes untagged: a leaf is its bare id, a split is an object with
/// `direction`, `first`, `second` and an optional `splitPercentage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MosaicNode<T> {
    Split {
        direction: Direction,
        first: Box<MosaicNode<T>>,
        second: Box<MosaicNode<T>>,
        /// Share of `first` in `[0, 100]`. `None` means an even split.
        #[serde(
            rename = "splitPercentage",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        split_percentage: Option<f64>,
    },
    Leaf(T),
}

/// A possibly empty tree.
pub type MosaicTree<T> = Option<MosaicNode<T>>;

/// Side of a destination tile a dragged tile is dropped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DropPosition {
    Left,
    Right,
    Top,
    Bottom,
}

impl<T> MosaicNode<T> {
    pub fn leaf(id: T) -> Self {
        MosaicNode::Leaf(id)
    }

    pub fn split(direction: Direction, first: MosaicNode<T>, second: MosaicNode<T>) -> Self {
        MosaicNode::Split {
            direction,
            first: Box::new(first),
            second: Box::new(second),
            split_percentage: None,
        }
    }

    pub fn row(first: MosaicNode<T>, second: MosaicNode<T>) -> Self {
        Self::split(Direction::Row, first, second)
    }

    pub fn column(first: MosaicNode<T>, second: MosaicNode<T>) -> Self {
        Self::split(Direction::Column, first, second)
    }

    /// Set the split percentage. Has no effect on a leaf.
    pub fn with_split_percentage(mut self, percentage: f64) -> Self {
        if let MosaicNode::Split {
            split_percentage, ..
        } = &mut self
        {
            *split_percentage = Some(percentage);
        }
        self
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MosaicNode::Leaf(_))
    }

    pub fn is_split(&self) -> bool {
        matches!(self, MosaicNode::Split { .. })
    }

    pub fn leaf_id(&self) -> Option<&T> {
        match self {
            MosaicNode::Leaf(id) => Some(id),
            MosaicNode::Split { .. } => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            MosaicNode::Split { direction, .. } => Some(*direction),
            MosaicNode::Leaf(_) => None,
        }
    }

    pub fn split_percentage(&self) -> Option<f64> {
        match self {
            MosaicNode::Split {
                split_percentage, ..
            } => *split_percentage,
            MosaicNode::Leaf(_) => None,
        }
    }

    /// Share of the first child in `[0, 1]`; an absent percentage is an even split.
    pub fn ratio(&self) -> f64 {
        self.split_percentage()
            .map(|p| (p / 100.0).clamp(0.0, 1.0))
            .unwrap_or(0.5)
    }

    pub fn child(&self, branch: Branch) -> Option<&MosaicNode<T>> {
        match (self, branch) {
            (MosaicNode::Split { first, .. }, Branch::First) => Some(first.as_ref()),
            (MosaicNode::Split { second, .. }, Branch::Second) => Some(second.as_ref()),
            (MosaicNode::Leaf(_), _) => None,
        }
    }
}
