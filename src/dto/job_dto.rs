use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::job::{Category, JobPosting, PayType};

/// The structured record forwarded to the backend's creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobPayload {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 50))]
    pub description: String,
    pub category: Category,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(custom(function = "non_negative_pay"))]
    pub pay_amount: Decimal,
    pub pay_type: PayType,
    #[validate(length(min = 1))]
    pub contact_method: String,
    #[validate(length(min = 1))]
    pub username: String,
}

fn non_negative_pay(amount: &Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::new("pay_amount_negative"));
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JobListQuery {
    pub limit: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DraftBrowseQuery {
    pub search: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
}

/// Filtered listing plus the record open in the detail pane; `selected` is
/// `null` exactly when `items` is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftListResponse {
    pub items: Vec<JobPosting>,
    pub selected: Option<JobPosting>,
    pub total: usize,
}
