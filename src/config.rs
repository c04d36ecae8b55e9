use serde::{Deserialize, Serialize};

/// Field bounds applied by the validation schema.
///
/// Hosts pass limits explicitly into [`crate::form::schema::OrderSchema`]
/// instead of reading them from global state, so a deployment can tighten
/// them without touching the form layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormLimits {
    pub description_min: usize,
    pub description_max: usize,
    pub quantity_min: f64,
    pub quantity_max: f64,
    pub total_min: f64,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            description_min: 3,
            description_max: 150,
            quantity_min: 0.0,
            quantity_max: 50.0,
            total_min: 0.0,
        }
    }
}
