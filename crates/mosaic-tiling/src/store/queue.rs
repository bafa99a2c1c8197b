//! Queued commands for callers that issue several changes in one turn.

use crate::commands::LayoutCommand;

use super::LayoutStore;

impl LayoutStore {
    pub fn enqueue(&mut self, command: LayoutCommand) {
        self.pending.push_back(command);
    }

    /// Apply queued commands in order. Each one runs against the tree the
    /// previous one published. Returns how many were handled.
    pub fn flush(&mut self) -> usize {
        let mut handled = 0;
        while let Some(command) = self.pending.pop_front() {
            if self.execute(command) {
                handled += 1;
            }
        }
        handled
    }
}
