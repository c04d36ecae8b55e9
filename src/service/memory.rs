use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{OrderRecord, OrderSubmission};
use crate::service::{OrderService, ServiceResult};

/// In-memory order store used by demos and tests.
#[derive(Debug, Default)]
pub struct MemoryOrderService {
    records: Mutex<Vec<OrderRecord>>,
}

impl MemoryOrderService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of everything saved so far.
    pub async fn records(&self) -> Vec<OrderRecord> {
        self.records.lock().await.clone()
    }
}

#[async_trait]
impl OrderService for MemoryOrderService {
    async fn save(&self, submission: OrderSubmission) -> ServiceResult<OrderRecord> {
        let record = OrderRecord::from_submission(submission);
        self.records.lock().await.push(record.clone());
        Ok(record)
    }
}
