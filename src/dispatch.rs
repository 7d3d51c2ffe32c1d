use std::collections::HashSet;

use log::debug;

use crate::context::FocusContext;
use crate::dialog::DialogFocusManager;
use crate::element::DialogId;

/// Routes dialog close signals to the focus manager.
///
/// Observers are keyed by dialog identity: the manager registers interest
/// when a dialog is first shown and detaches it when the dialog's real
/// closure is processed. The event loop calls [`dispatch`](Self::dispatch)
/// after handling input to drain the host's queued signals; signals for
/// dialogs nothing observes are dropped.
#[derive(Debug, Default)]
pub struct CloseDispatcher {
    observed: HashSet<DialogId>,
}

impl CloseDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a close observer for the dialog. Returns false if one is
    /// already registered.
    pub fn observe(&mut self, dialog: DialogId) -> bool {
        self.observed.insert(dialog)
    }

    /// Remove the dialog's close observer.
    pub fn detach(&mut self, dialog: &DialogId) {
        self.observed.remove(dialog);
    }

    pub fn is_observed(&self, dialog: &DialogId) -> bool {
        self.observed.contains(dialog)
    }

    /// Drain the host's queued close signals and deliver each observed one
    /// to the focus manager. Returns the number of signals delivered.
    pub fn dispatch(
        &mut self,
        ctx: &mut FocusContext,
        manager: &mut DialogFocusManager,
    ) -> usize {
        let mut delivered = 0;

        for dialog in ctx.host_mut().take_close_signals() {
            if self.observed.contains(&dialog) {
                manager.on_close_signal(ctx, self, dialog);
                delivered += 1;
            } else {
                debug!("dropping close signal for unobserved dialog {:?}", dialog);
            }
        }

        delivered
    }
}
