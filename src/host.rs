use std::collections::HashSet;

use log::debug;

use crate::element::DialogId;

/// Owns the actual open/closed state of dialogs and queues close signals.
///
/// Closing a dialog marks it closed immediately but only *queues* its close
/// signal; delivery happens when the event loop runs
/// [`CloseDispatcher::dispatch`](crate::dispatch::CloseDispatcher::dispatch).
/// A dialog may be reopened in between, in which case the stale signal finds
/// it open again and the focus manager leaves it tracked.
#[derive(Debug, Default)]
pub struct DialogHost {
    open: HashSet<DialogId>,
    pending_close: Vec<DialogId>,
}

impl DialogHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the dialog open. Idempotent.
    pub fn open_modal(&mut self, dialog: DialogId) {
        if self.open.insert(dialog) {
            debug!("dialog {:?} opened", dialog);
        }
    }

    /// Mark the dialog closed and queue its close signal. Closing a dialog
    /// that is not open is a no-op.
    pub fn close(&mut self, dialog: DialogId) {
        if self.open.remove(&dialog) {
            debug!("dialog {:?} closed", dialog);
            self.pending_close.push(dialog);
        }
    }

    pub fn is_open(&self, dialog: &DialogId) -> bool {
        self.open.contains(dialog)
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Drain queued close signals in the order the closes happened.
    pub fn take_close_signals(&mut self) -> Vec<DialogId> {
        std::mem::take(&mut self.pending_close)
    }
}
