//! Batch patches against the published tree, keeping the registry in step.

use std::collections::HashSet;

use mosaic_common::WindowId;

use crate::error::LayoutError;
use crate::events::LayoutEvent;
use crate::patch::{self, Patch, RejectedPatch};

use super::LayoutStore;

impl LayoutStore {
    /// Apply a batch of patch instructions (drag, resize, reparent).
    ///
    /// Every leaf in the patched tree must be a registered window and appear
    /// once; otherwise nothing is published. Windows the batch prunes are
    /// dropped from the registry in the same step. Returns the instructions
    /// that did not apply.
    pub fn apply_patch(&mut self, patches: &[Patch<u32>]) -> Result<Vec<RejectedPatch>, LayoutError> {
        let outcome = patch::apply_patch(self.tree(), patches);

        if let Some(root) = &outcome.tree {
            if !root.has_unique_leaves() {
                return Err(LayoutError::DuplicateId);
            }
            if let Some(unknown) = root
                .leaf_refs()
                .into_iter()
                .find(|id| !self.windows.contains_key(id))
            {
                return Err(LayoutError::UnknownWindow(WindowId(*unknown)));
            }
        }

        let remaining: HashSet<u32> = outcome
            .tree
            .as_ref()
            .map(|root| root.leaves().into_iter().collect())
            .unwrap_or_default();
        let mut closed: Vec<u32> = self
            .windows
            .keys()
            .copied()
            .filter(|id| !remaining.contains(id))
            .collect();
        closed.sort_unstable();
        for id in &closed {
            self.windows.remove(id);
        }

        self.commit(outcome.tree);
        for id in closed {
            self.events.publish(LayoutEvent::WindowClosed(WindowId(id)));
        }
        Ok(outcome.rejected)
    }
}
