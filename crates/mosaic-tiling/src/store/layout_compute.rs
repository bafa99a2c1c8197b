//! Layout computation and command dispatch for LayoutStore.

use mosaic_common::{Rect, WindowId};
use mosaic_config::LayoutConfig;

use crate::commands::LayoutCommand;
use crate::layout::LayoutEngine;

use super::LayoutStore;

impl LayoutStore {
    /// Execute a layout command. Returns `true` if the command was handled.
    pub fn execute(&mut self, cmd: LayoutCommand) -> bool {
        match cmd {
            LayoutCommand::Open {
                kind,
                title,
                corner,
            } => {
                let corner = corner.unwrap_or(self.config.default_corner);
                self.open_window_at(corner, kind, title).is_ok()
            }
            LayoutCommand::Close(id) => self.close_window(id),
            LayoutCommand::Resize(id, steps) => self.resize(id, steps),
            LayoutCommand::Expand(id) => self.expand(id),
            LayoutCommand::Move {
                id,
                target,
                position,
            } => match self.move_window(id, target, position) {
                Ok(()) => true,
                Err(e) => {
                    tracing::debug!("move of {id} rejected: {e}");
                    false
                }
            },
            LayoutCommand::Rebalance => self.rebalance(),
        }
    }

    /// Compute the rect of every window within the given viewport.
    pub fn compute_layout(&self, viewport: Rect) -> Vec<(WindowId, Rect)> {
        match self.tree().as_ref() {
            Some(root) => self
                .layout_engine
                .compute(root, viewport)
                .into_iter()
                .map(|(id, rect)| (WindowId(id), rect))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Replace the configuration (called when settings change).
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.layout_engine = LayoutEngine::from_config(&config);
        self.config = config;
    }
}
