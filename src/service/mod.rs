//! Collaborator seams consumed by the form layer: persistence, user-visible
//! notification, and failure logging.

pub mod memory;
pub mod sinks;

pub use memory::MemoryOrderService;
pub use sinks::{TracingErrorSink, TracingNotifier};

use async_trait::async_trait;

use crate::domain::{OrderRecord, OrderSubmission};
use crate::errors::ServiceError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Persists validated orders.
///
/// Called exactly once per successful local validation pass; the form layer
/// never retries on its own and applies no timeout.
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn save(&self, submission: OrderSubmission) -> ServiceResult<OrderRecord>;
}

/// User-visible confirmation messages, fire and forget.
pub trait NotificationSink: Send + Sync {
    fn show(&self, message: &str);
}

/// Diagnostic sink for submit failures.
///
/// `suppress` mirrors the caller's choice to swallow the failure after
/// recording it instead of escalating it to the user.
pub trait ErrorSink: Send + Sync {
    fn log(&self, error: &ServiceError, suppress: bool);
}
