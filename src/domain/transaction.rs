use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single spending record. Immutable once loaded; storage order carries no
/// guarantee, ordering is imposed by the query operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: DateTime<Utc>,
    pub merchant: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
    pub payment_method: String,
    pub icon: String,
    pub category_color: String,
}
