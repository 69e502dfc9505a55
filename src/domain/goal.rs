use serde::{Deserialize, Serialize};

/// Monthly budget target for a category, with its consumption state.
///
/// Every figure here is sourced from the dataset; the query engine never
/// recomputes goal numbers from transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingGoal {
    pub id: String,
    pub category: String,
    pub monthly_budget: f64,
    pub current_spent: f64,
    pub percentage_used: f64,
    pub days_remaining: u32,
    pub status: GoalStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    OnTrack,
    Warning,
}
