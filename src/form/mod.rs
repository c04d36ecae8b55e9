//! Form layer for the order dialog: validation schema, session state, and
//! the submission lifecycle controller.

pub mod controller;
pub mod dialog;
pub mod schema;
pub mod session;

pub use controller::{SubmitController, SubmitOutcome};
pub use dialog::FormDialog;
pub use schema::{FieldErrors, FieldKey, OrderSchema, Violation};
pub use session::{FieldEdit, FormSession, SessionState};
