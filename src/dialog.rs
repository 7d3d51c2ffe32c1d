use std::collections::HashSet;

use anyhow::Result;
use log::debug;

use crate::context::FocusContext;
use crate::dispatch::CloseDispatcher;
use crate::element::{DialogId, FocusId};

/// Tracks open modal dialogs and restores focus when the stack empties.
///
/// The restoration target is captured once per stack: when the tracked set
/// goes from empty to non-empty, or when the sole tracked dialog is
/// reshown. It never moves while other dialogs remain open, so however many
/// dialogs open and close in between, emptying the stack puts focus back
/// where the user left it.
#[derive(Debug, Default)]
pub struct DialogFocusManager {
    /// Element focused immediately before the first dialog in the current
    /// stack opened.
    previous_focus: Option<FocusId>,

    /// Whether `previous_focus` was acquired via pointer interaction.
    previous_focus_pointer_driven: bool,

    /// Dialogs currently tracked as open.
    open_dialogs: HashSet<DialogId>,
}

impl DialogFocusManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `dialog` modally via the host, tracking it for focus
    /// restoration.
    pub fn show_dialog(
        &mut self,
        ctx: &mut FocusContext,
        dispatcher: &mut CloseDispatcher,
        dialog: DialogId,
    ) -> Result<()> {
        self.show_dialog_with(ctx, dispatcher, dialog, |ctx| {
            ctx.host_mut().open_modal(dialog);
            Ok(())
        })
    }

    /// Show `dialog` using a caller-supplied show function.
    ///
    /// Captures the restoration target if no dialogs are tracked, or if
    /// `dialog` is the only tracked dialog and is being reshown. First-time
    /// shows register a close observer with the dispatcher; reshowing an
    /// already-tracked dialog never duplicates registration.
    pub fn show_dialog_with<F>(
        &mut self,
        ctx: &mut FocusContext,
        dispatcher: &mut CloseDispatcher,
        dialog: DialogId,
        show: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut FocusContext) -> Result<()>,
    {
        if self.open_dialogs.is_empty()
            || (self.open_dialogs.contains(&dialog) && self.open_dialogs.len() == 1)
        {
            self.capture_previous_focus(ctx);
        }

        if self.open_dialogs.insert(dialog) {
            dispatcher.observe(dialog);
        }

        show(ctx)
    }

    fn capture_previous_focus(&mut self, ctx: &FocusContext) {
        self.previous_focus = ctx.focused_element();
        self.previous_focus_pointer_driven = match &self.previous_focus {
            Some(element) => ctx.classifier().is_pointer_focused(element),
            None => false,
        };
        debug!(
            "captured restoration target {:?} (pointer driven: {})",
            self.previous_focus, self.previous_focus_pointer_driven
        );
    }

    /// Handle a close signal for `dialog`, delivered by the dispatcher.
    ///
    /// If the dialog is open at dispatch time it was reshown before its
    /// closure was processed; it stays tracked until its real closure
    /// arrives. Otherwise it is untracked, and if it was the last dialog in
    /// the stack, focus returns to the captured restoration target.
    ///
    /// Panics if `dialog` is closed but not in the tracked set: that is a
    /// bookkeeping bug in the caller, not a recoverable condition.
    pub fn on_close_signal(
        &mut self,
        ctx: &mut FocusContext,
        dispatcher: &mut CloseDispatcher,
        dialog: DialogId,
    ) {
        if ctx.host().is_open(&dialog) {
            debug!("close signal for reopened dialog {:?} deferred", dialog);
            return;
        }

        assert!(
            self.open_dialogs.remove(&dialog),
            "close signal for untracked dialog {:?}",
            dialog
        );

        if self.open_dialogs.is_empty() {
            if let Some(element) = self.previous_focus {
                ctx.restore_focus(element, self.previous_focus_pointer_driven);
                debug!(
                    "dialog stack empty, restored focus to {:?} (pointer driven: {})",
                    element, self.previous_focus_pointer_driven
                );
            }
        }

        dispatcher.detach(&dialog);
    }

    pub fn is_tracking(&self, dialog: &DialogId) -> bool {
        self.open_dialogs.contains(dialog)
    }

    pub fn tracked_count(&self) -> usize {
        self.open_dialogs.len()
    }
}
