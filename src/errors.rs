use thiserror::Error;

/// Error type that captures failures reported by the persistence collaborator.
///
/// Field-level violations are deliberately not part of this taxonomy; they
/// live in [`crate::form::schema`] and never leave the form layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("save rejected: {0}")]
    Rejected(String),
}
