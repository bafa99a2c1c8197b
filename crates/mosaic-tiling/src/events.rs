//! Change notification: how a replacement tree reaches the rendering layer.

use std::sync::Arc;

use mosaic_common::WindowId;
use tokio::sync::broadcast;

use crate::tree::MosaicTree;

#[derive(Debug, Clone)]
pub enum LayoutEvent {
    /// The published tree was replaced. Both snapshots are read-only.
    TreeChanged {
        previous: Arc<MosaicTree<u32>>,
        current: Arc<MosaicTree<u32>>,
    },
    WindowOpened(WindowId),
    WindowClosed(WindowId),
}

pub struct EventBus {
    sender: broadcast::Sender<LayoutEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LayoutEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of subscribers reached.
    pub fn publish(&self, event: LayoutEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
