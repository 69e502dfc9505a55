//! Monthly trend suffix for the dashboard's trend chart.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::domain::MonthlyTrend;

/// Upper bound on how much history a single request may pull.
pub const MAX_TREND_MONTHS: u32 = 24;
pub const DEFAULT_TREND_MONTHS: u32 = 12;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendingTrends {
    pub trends: Vec<MonthlyTrend>,
}

/// Returns the most recent trend entries, preserving stored order.
pub struct TrendService;

impl TrendService {
    /// `months` defaults to 12 and clamps to `[0, 24]`; a request larger than
    /// the stored history returns everything available.
    pub fn spending_trends(dataset: &Dataset, months: Option<u32>) -> SpendingTrends {
        let take = months.unwrap_or(DEFAULT_TREND_MONTHS).min(MAX_TREND_MONTHS) as usize;
        let start = dataset.trends.len().saturating_sub(take);
        SpendingTrends {
            trends: dataset.trends[start..].to_vec(),
        }
    }
}
