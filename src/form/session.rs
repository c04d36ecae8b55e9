//! Mutable state for one dialog-open-to-close lifecycle.

use crate::domain::OrderDraft;
use crate::form::schema::FieldErrors;

/// Observable session states between controller entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    InvalidShowErrors,
    Submitting,
}

/// Typed field update applied through [`FormSession::apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    Description(String),
    Quantity(f64),
    Total(f64),
}

/// Represents one open form session.
///
/// Values and errors are mutated only through the session's own entry
/// points. The generation counter identifies which lifecycle an async save
/// result belongs to, so results for a torn-down session can be dropped.
#[derive(Debug)]
pub struct FormSession {
    values: OrderDraft,
    errors: FieldErrors,
    state: SessionState,
    generation: u64,
}

impl FormSession {
    pub fn new() -> Self {
        Self {
            values: OrderDraft::default(),
            errors: FieldErrors::new(),
            state: SessionState::Idle,
            generation: 0,
        }
    }

    /// Applies one field edit.
    ///
    /// Edits are ignored while a save is in flight. Leaving
    /// `InvalidShowErrors` clears the stored violations; the next full
    /// validation pass happens on submit, not per keystroke.
    pub fn apply(&mut self, edit: FieldEdit) {
        if self.state == SessionState::Submitting {
            return;
        }
        match edit {
            FieldEdit::Description(value) => self.values.description = Some(value),
            FieldEdit::Quantity(value) => self.values.quantity = Some(value),
            FieldEdit::Total(value) => self.values.total = Some(value),
        }
        if self.state == SessionState::InvalidShowErrors {
            self.errors.clear();
            self.state = SessionState::Idle;
        }
    }

    /// Clears values and errors back to the initial empty state.
    ///
    /// Bumps the generation so a save still in flight for the previous
    /// lifecycle is dropped when it completes.
    pub fn reset(&mut self) {
        self.values = OrderDraft::default();
        self.errors.clear();
        self.state = SessionState::Idle;
        self.generation += 1;
    }

    pub(crate) fn show_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
        self.state = SessionState::InvalidShowErrors;
    }

    pub(crate) fn begin_submit(&mut self) {
        self.errors.clear();
        self.state = SessionState::Submitting;
    }

    pub(crate) fn finish_submit(&mut self) {
        self.state = SessionState::Idle;
    }

    pub fn values(&self) -> &OrderDraft {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::schema::{FieldKey, Violation};

    #[test]
    fn edits_update_the_draft() {
        let mut session = FormSession::new();
        session.apply(FieldEdit::Description("Pizza".into()));
        session.apply(FieldEdit::Quantity(2.0));
        session.apply(FieldEdit::Total(39.9));

        assert_eq!(session.values().description.as_deref(), Some("Pizza"));
        assert_eq!(session.values().quantity, Some(2.0));
        assert_eq!(session.values().total, Some(39.9));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn edit_after_invalid_clears_errors() {
        let mut session = FormSession::new();
        let mut errors = FieldErrors::new();
        errors.insert(FieldKey::Description, Violation::Required);
        session.show_errors(errors);
        assert_eq!(session.state(), SessionState::InvalidShowErrors);

        session.apply(FieldEdit::Description("Pizza".into()));
        assert!(session.errors().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut session = FormSession::new();
        session.apply(FieldEdit::Description("Pizza".into()));
        session.begin_submit();

        session.apply(FieldEdit::Description("Burger".into()));
        assert_eq!(session.values().description.as_deref(), Some("Pizza"));
        assert_eq!(session.state(), SessionState::Submitting);
    }

    #[test]
    fn reset_restores_initial_state_and_bumps_generation() {
        let mut session = FormSession::new();
        session.apply(FieldEdit::Description("Pizza".into()));
        let mut errors = FieldErrors::new();
        errors.insert(FieldKey::Total, Violation::Required);
        session.show_errors(errors);
        let before = session.generation();

        session.reset();
        assert!(session.values().is_empty());
        assert!(session.errors().is_empty());
        assert_eq!(session.state(), SessionState::Idle);
        assert_eq!(session.generation(), before + 1);
    }
}
