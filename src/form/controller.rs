//! Submission lifecycle controller.
//!
//! Mediates every state transition of a [`FormSession`]: field edits, the
//! validation pass, the single save call per submit, and the success or
//! failure continuation.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{OrderDraft, OrderRecord};
use crate::form::schema::{FieldErrors, OrderSchema};
use crate::form::session::{FieldEdit, FormSession, SessionState};
use crate::service::{ErrorSink, NotificationSink, OrderService};

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The save collaborator accepted the order.
    Saved(OrderRecord),
    /// Validation failed; errors are on the session and no save call was made.
    Invalid,
    /// The save collaborator failed; values are kept so the user can retry.
    Failed,
    /// A save was already in flight; no second call was made.
    AlreadyInFlight,
    /// The session was reset while the save was in flight; result dropped.
    Stale,
}

/// Drives one [`FormSession`] against the external collaborators.
///
/// Cheap to clone; clones share the same session, so at most one save is in
/// flight per session no matter how many handles the host keeps.
#[derive(Clone)]
pub struct SubmitController {
    session: Arc<Mutex<FormSession>>,
    schema: Arc<OrderSchema>,
    service: Arc<dyn OrderService>,
    notifier: Arc<dyn NotificationSink>,
    error_log: Arc<dyn ErrorSink>,
}

impl SubmitController {
    pub fn new(
        schema: OrderSchema,
        service: Arc<dyn OrderService>,
        notifier: Arc<dyn NotificationSink>,
        error_log: Arc<dyn ErrorSink>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(FormSession::new())),
            schema: Arc::new(schema),
            service,
            notifier,
            error_log,
        }
    }

    /// Applies a typed field edit to the session.
    pub async fn set_field(&self, edit: FieldEdit) {
        self.session.lock().await.apply(edit);
    }

    /// Clears the session back to its initial empty state.
    ///
    /// Invoked by the dialog once the close transition has finished.
    pub async fn reset_form(&self) {
        self.session.lock().await.reset();
    }

    pub async fn state(&self) -> SessionState {
        self.session.lock().await.state()
    }

    pub async fn values(&self) -> OrderDraft {
        self.session.lock().await.values().clone()
    }

    pub async fn errors(&self) -> FieldErrors {
        self.session.lock().await.errors().clone()
    }

    /// Runs one submit attempt.
    ///
    /// At most one save call leaves this method per invocation, and none at
    /// all when validation fails or another save is still in flight. The
    /// session lock is not held across the save await, so edits and
    /// teardown stay responsive while the call is out.
    pub async fn submit(&self) -> SubmitOutcome {
        let (submission, generation) = {
            let mut session = self.session.lock().await;
            if session.state() == SessionState::Submitting {
                return SubmitOutcome::AlreadyInFlight;
            }
            match self.schema.validate(session.values()) {
                Err(errors) => {
                    tracing::debug!(fields = errors.len(), "order draft failed validation");
                    session.show_errors(errors);
                    return SubmitOutcome::Invalid;
                }
                Ok(submission) => {
                    session.begin_submit();
                    (submission, session.generation())
                }
            }
        };

        let result = self.service.save(submission).await;

        let mut session = self.session.lock().await;
        if session.generation() != generation {
            // The dialog was torn down mid-flight; as far as the user is
            // concerned this session no longer exists.
            tracing::debug!("dropping save result for a discarded session");
            return SubmitOutcome::Stale;
        }
        session.finish_submit();
        match result {
            Ok(record) => {
                self.notifier
                    .show(&format!("{} was saved", record.description));
                SubmitOutcome::Saved(record)
            }
            Err(error) => {
                self.error_log.log(&error, true);
                SubmitOutcome::Failed
            }
        }
    }
}
