use mosaic_common::{Corner, WindowId, WindowKind};

use crate::tree::DropPosition;

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutCommand {
    /// Open a window at `corner`, or the configured default corner.
    Open {
        kind: WindowKind,
        title: String,
        corner: Option<Corner>,
    },
    Close(WindowId),
    /// Grow (positive) or shrink (negative) a window by resize steps.
    Resize(WindowId, i32),
    Expand(WindowId),
    Move {
        id: WindowId,
        target: WindowId,
        position: DropPosition,
    },
    Rebalance,
}

impl LayoutCommand {
    pub fn open(kind: WindowKind, title: impl Into<String>) -> Self {
        LayoutCommand::Open {
            kind,
            title: title.into(),
            corner: None,
        }
    }
}
