//! Host-facing dialog lifecycle around the submit controller.

use std::sync::Arc;

use crate::domain::OrderRecord;
use crate::form::controller::{SubmitController, SubmitOutcome};

type CompletionHandler = Arc<dyn Fn(OrderRecord) + Send + Sync>;
type CancelHandler = Arc<dyn Fn() + Send + Sync>;

/// One create-order dialog lifecycle.
///
/// The host owns the visual open/close transition; the dialog mirrors it
/// through [`FormDialog::open`] and [`FormDialog::cancel`], and performs the
/// invisible session reset in the post-exit [`FormDialog::exited`] hook.
pub struct FormDialog {
    controller: SubmitController,
    opened: bool,
    on_complete: CompletionHandler,
    on_cancel: CancelHandler,
}

impl FormDialog {
    pub fn new(
        controller: SubmitController,
        on_complete: impl Fn(OrderRecord) + Send + Sync + 'static,
        on_cancel: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            controller,
            opened: false,
            on_complete: Arc::new(on_complete),
            on_cancel: Arc::new(on_cancel),
        }
    }

    pub fn controller(&self) -> &SubmitController {
        &self.controller
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Marks the dialog opened. The session starts empty; there is no
    /// edit-prefill flow.
    pub fn open(&mut self) {
        self.opened = true;
    }

    /// Explicit user cancellation. The host tears the dialog down and fires
    /// [`FormDialog::exited`] once the close transition finishes.
    pub fn cancel(&mut self) {
        self.opened = false;
        (self.on_cancel)();
    }

    /// Submits the current draft.
    ///
    /// On success the completion callback fires once with the saved record
    /// and the dialog closes; on validation or save failure it stays open
    /// with the draft intact.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.controller.submit().await;
        if let SubmitOutcome::Saved(record) = &outcome {
            self.opened = false;
            (self.on_complete)(record.clone());
        }
        outcome
    }

    /// Called by the host once the close transition has finished.
    ///
    /// Resets the session out of sight so the next open starts from a blank
    /// form, and discards any save still in flight for this lifecycle.
    pub async fn exited(&mut self) {
        self.controller.reset_form().await;
    }
}
