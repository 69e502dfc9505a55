use serde::{Deserialize, Serialize};

/// Precomputed monthly spending aggregate, keyed by `YYYY-MM`.
///
/// The dataset stores trends in chronological order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: String,
    pub total_spent: f64,
    pub transaction_count: u32,
    pub average_transaction: f64,
}
