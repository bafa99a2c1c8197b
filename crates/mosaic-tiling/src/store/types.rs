//! Core types and constructors for LayoutStore.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use mosaic_common::WindowId;
use mosaic_config::LayoutConfig;
use tokio::sync::broadcast;

use crate::commands::LayoutCommand;
use crate::events::{EventBus, LayoutEvent};
use crate::layout::LayoutEngine;
use crate::tree::MosaicTree;
use crate::window::Window;

/// Sole owner of the published layout: the split tree, the window registry
/// keyed by the tree's leaf ids, and the id counter. Every mutation reads
/// the latest tree, computes the next one and publishes it in one call.
pub struct LayoutStore {
    /// The published tree. Readers hold clones of this `Arc`.
    pub(super) tree: Arc<MosaicTree<u32>>,
    /// Registry of all windows by their numeric id.
    pub(super) windows: HashMap<u32, Window>,
    /// Auto-incrementing counter for window ids. Never reused.
    pub(super) next_id: u32,
    pub(super) config: LayoutConfig,
    pub(super) layout_engine: LayoutEngine,
    pub(super) events: EventBus,
    /// Commands waiting for `flush`.
    pub(super) pending: VecDeque<LayoutCommand>,
}

impl LayoutStore {
    /// Create an empty store with default configuration.
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            tree: Arc::new(None),
            windows: HashMap::new(),
            next_id: 1,
            layout_engine: LayoutEngine::from_config(&config),
            config,
            events: EventBus::default(),
            pending: VecDeque::new(),
        }
    }

    // -- Accessors --

    pub fn tree(&self) -> &MosaicTree<u32> {
        &self.tree
    }

    /// Shared read-only handle to the current tree.
    pub fn snapshot(&self) -> Arc<MosaicTree<u32>> {
        Arc::clone(&self.tree)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LayoutEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn window(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id.0)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_none()
    }

    /// Window ids in depth-first order (matches visual layout).
    pub fn ordered_window_ids(&self) -> Vec<WindowId> {
        self.tree()
            .as_ref()
            .map(|root| root.leaves().into_iter().map(WindowId).collect())
            .unwrap_or_default()
    }

    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }
}

impl Default for LayoutStore {
    fn default() -> Self {
        Self::new()
    }
}
