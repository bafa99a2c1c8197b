//! Open, close, resize, expand, move and rebalance operations on the LayoutStore.

use std::sync::Arc;

use mosaic_common::{Corner, WindowId, WindowKind};
use tracing::debug;

use crate::engine;
use crate::error::LayoutError;
use crate::events::LayoutEvent;
use crate::patch::{apply_patch, Patch};
use crate::path::Branch;
use crate::tree::{build_balanced, DropPosition, MosaicTree};
use crate::window::Window;

use super::LayoutStore;

impl LayoutStore {
    /// Open a window at the configured default corner.
    pub fn open_window(
        &mut self,
        kind: WindowKind,
        title: impl Into<String>,
    ) -> Result<WindowId, LayoutError> {
        self.open_window_at(self.config.default_corner, kind, title)
    }

    /// Allocate an id, insert it at `corner` and register the window, all
    /// against the currently published tree.
    pub fn open_window_at(
        &mut self,
        corner: Corner,
        kind: WindowKind,
        title: impl Into<String>,
    ) -> Result<WindowId, LayoutError> {
        let id = self.next_id;
        let following = id.checked_add(1).ok_or(LayoutError::IdsExhausted)?;
        let next = engine::insert_at_corner(self.tree(), corner, id)?;
        self.next_id = following;

        let window_id = WindowId(id);
        self.windows.insert(id, Window::new(window_id, kind, title));
        self.commit(Some(next));
        self.events.publish(LayoutEvent::WindowOpened(window_id));
        Ok(window_id)
    }

    /// Close a window. The leaf and its registry entry go in the same step.
    /// Returns `false` for an unknown id.
    pub fn close_window(&mut self, id: WindowId) -> bool {
        if self.windows.remove(&id.0).is_none() {
            return false;
        }
        let next = engine::remove(self.tree(), &id.0);
        self.commit(next);
        self.events.publish(LayoutEvent::WindowClosed(id));
        true
    }

    /// Move the divider next to a window by `steps` resize steps. Positive
    /// steps grow the window.
    pub fn resize(&mut self, id: WindowId, steps: i32) -> bool {
        let Some(root) = self.tree().as_ref() else {
            return false;
        };
        let Some(path) = root.path_to(&id.0) else {
            return false;
        };
        let (Ok(parent), Some(branch)) = (path.parent(), path.last()) else {
            return false;
        };

        let current = root
            .node_at_path(&parent)
            .map(|split| split.ratio() * 100.0)
            .unwrap_or(50.0);
        let delta = f64::from(steps) * f64::from(self.config.resize_step);
        let target = match branch {
            Branch::First => current + delta,
            Branch::Second => current - delta,
        };
        let (min, max) = self.split_bounds();

        let outcome = apply_patch(
            self.tree(),
            &[Patch::set_split_percentage(parent, target.clamp(min, max))],
        );
        outcome.is_complete() && self.commit(outcome.tree)
    }

    /// Give a window the configured expand share of every split above it.
    pub fn expand(&mut self, id: WindowId) -> bool {
        let Some(root) = self.tree().as_ref() else {
            return false;
        };
        let Some(path) = root.path_to(&id.0) else {
            return false;
        };
        match root.expand(&path, self.config.expand_percentage) {
            Ok(next) => self.commit(Some(next)),
            Err(e) => {
                debug!("expand of {id} skipped: {e}");
                false
            }
        }
    }

    /// Drag `id` onto the `position` side of `target`.
    pub fn move_window(
        &mut self,
        id: WindowId,
        target: WindowId,
        position: DropPosition,
    ) -> Result<(), LayoutError> {
        if id == target {
            return Err(LayoutError::InvalidMove(format!("{id} cannot be dropped on itself")));
        }
        let root = self.tree().as_ref().ok_or(LayoutError::EmptyTree)?;
        let source = root.path_to(&id.0).ok_or(LayoutError::UnknownWindow(id))?;
        let destination = root
            .path_to(&target.0)
            .ok_or(LayoutError::UnknownWindow(target))?;
        let next = root.move_node(&source, &destination, position)?;
        self.commit(Some(next));
        Ok(())
    }

    /// Rebuild the tree as a balanced grid, keeping the current leaf order.
    pub fn rebalance(&mut self) -> bool {
        let ids: Vec<u32> = self
            .tree()
            .as_ref()
            .map(|root| root.leaves())
            .unwrap_or_default();
        self.commit(build_balanced(&ids))
    }

    /// Publish `next` if it differs from the current tree.
    pub(super) fn commit(&mut self, next: MosaicTree<u32>) -> bool {
        if *self.tree == next {
            return false;
        }
        let previous = std::mem::replace(&mut self.tree, Arc::new(next));
        let subscribers = self.events.publish(LayoutEvent::TreeChanged {
            previous,
            current: Arc::clone(&self.tree),
        });
        debug!(
            windows = self.windows.len(),
            subscribers, "layout tree replaced"
        );
        true
    }

    /// Resize clamp range, falling back to the full range when the
    /// configured bounds are unusable.
    fn split_bounds(&self) -> (f64, f64) {
        let min = self.config.min_split_percentage;
        let max = self.config.max_split_percentage;
        if min.is_nan() || max.is_nan() {
            return (0.0, 100.0);
        }
        let (min, max) = (min.clamp(0.0, 100.0), max.clamp(0.0, 100.0));
        if min > max {
            (0.0, 100.0)
        } else {
            (min, max)
        }
    }
}
