use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The dataset's customer profile. Exactly one exists per dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub customer_id: String,
    pub name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub account_type: String,
    pub total_spent: f64,
    pub currency: String,
}
