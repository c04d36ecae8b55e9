//! Declarative validation rules for the order draft.
//!
//! The schema is pure and total: any draft shape maps either to a fully
//! typed [`OrderSubmission`] or to the first violated rule per field.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::FormLimits;
use crate::domain::{OrderDraft, OrderSubmission};

/// Typed handle for each draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FieldKey {
    Description,
    Quantity,
    Total,
}

impl FieldKey {
    pub fn label(&self) -> &'static str {
        match self {
            FieldKey::Description => "Description",
            FieldKey::Quantity => "Quantity",
            FieldKey::Total => "Total",
        }
    }
}

/// First violated rule for a single field.
///
/// `Required` always wins over the bounds rules, matching the order in
/// which the rules are declared.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Required,
    TooShort { min: usize },
    TooLong { max: usize },
    OutOfRange { min: f64, max: Option<f64> },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Required => write!(f, "This field is required"),
            Violation::TooShort { min } => write!(f, "Enter at least {} characters", min),
            Violation::TooLong { max } => write!(f, "Keep it under {} characters", max),
            Violation::OutOfRange {
                min,
                max: Some(max),
            } => write!(f, "Enter a value between {} and {}", min, max),
            Violation::OutOfRange { min, max: None } => {
                write!(f, "Enter a value of {} or more", min)
            }
        }
    }
}

/// Field violations keyed by draft field, at most one entry per field.
pub type FieldErrors = BTreeMap<FieldKey, Violation>;

/// Rule set evaluated against the current draft.
#[derive(Debug, Clone, Default)]
pub struct OrderSchema {
    limits: FormLimits,
}

impl OrderSchema {
    pub fn new(limits: FormLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &FormLimits {
        &self.limits
    }

    /// Runs one validation pass over every field.
    ///
    /// Fields are checked independently; there are no cross-field rules.
    /// Returns the typed submission only when no field reports a violation.
    pub fn validate(&self, draft: &OrderDraft) -> Result<OrderSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let description = self
            .check_description(draft.description.as_deref())
            .map_err(|violation| errors.insert(FieldKey::Description, violation))
            .ok();
        let quantity = check_bounded(
            draft.quantity,
            self.limits.quantity_min,
            Some(self.limits.quantity_max),
        )
        .map_err(|violation| errors.insert(FieldKey::Quantity, violation))
        .ok();
        let total = check_bounded(draft.total, self.limits.total_min, None)
            .map_err(|violation| errors.insert(FieldKey::Total, violation))
            .ok();

        match (description, quantity, total) {
            (Some(description), Some(quantity), Some(total)) => Ok(OrderSubmission {
                description,
                quantity,
                total,
            }),
            _ => Err(errors),
        }
    }

    fn check_description(&self, value: Option<&str>) -> Result<String, Violation> {
        let trimmed = value.map(str::trim).unwrap_or_default();
        if trimmed.is_empty() {
            return Err(Violation::Required);
        }
        let length = trimmed.chars().count();
        if length < self.limits.description_min {
            Err(Violation::TooShort {
                min: self.limits.description_min,
            })
        } else if length > self.limits.description_max {
            Err(Violation::TooLong {
                max: self.limits.description_max,
            })
        } else {
            Ok(trimmed.to_string())
        }
    }
}

fn check_bounded(value: Option<f64>, min: f64, max: Option<f64>) -> Result<f64, Violation> {
    let Some(value) = value else {
        return Err(Violation::Required);
    };
    // NaN and infinities never satisfy a range rule.
    let above_max = max.map_or(false, |max| value > max);
    if !value.is_finite() || value < min || above_max {
        Err(Violation::OutOfRange { min, max })
    } else {
        Ok(value)
    }
}
