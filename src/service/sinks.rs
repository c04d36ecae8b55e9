use crate::errors::ServiceError;
use crate::service::{ErrorSink, NotificationSink};

/// Routes confirmation toasts through the tracing pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl NotificationSink for TracingNotifier {
    fn show(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// Records submit failures for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn log(&self, error: &ServiceError, suppress: bool) {
        tracing::error!(%error, suppress, "order save failed");
    }
}
