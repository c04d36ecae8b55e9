use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// In-progress order being edited inside the dialog.
///
/// Every field stays `None` until the user edits it; the create flow always
/// starts from [`OrderDraft::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

impl OrderDraft {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.quantity.is_none() && self.total.is_none()
    }
}

/// Fully validated payload accepted by the persistence collaborator.
///
/// Only the schema produces this type, so every save call carries values
/// that passed all field rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSubmission {
    pub description: String,
    pub quantity: f64,
    pub total: f64,
}

/// Persisted order as returned by the save collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: Uuid,
    pub description: String,
    pub quantity: f64,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl OrderRecord {
    /// Stamps a submission with a fresh id and creation time.
    pub fn from_submission(submission: OrderSubmission) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: submission.description,
            quantity: submission.quantity,
            total: submission.total,
            created_at: Utc::now(),
        }
    }
}
