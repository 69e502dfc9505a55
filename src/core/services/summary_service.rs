//! Spending summary for a resolved period: totals, average, top category.

use serde::Serialize;

use crate::core::rounding::round2;
use crate::dataset::Dataset;
use crate::domain::{DateRange, Period, Transaction};

// Placeholder deltas carried over from the sourced dashboard data.
// TODO: derive these from the preceding window of equal length once
// period-over-period semantics are agreed with the dashboard team.
const PREVIOUS_SPENT_CHANGE: f64 = 12.5;
const PREVIOUS_TRANSACTION_CHANGE: f64 = -3.2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    pub period: Period,
    pub total_spent: f64,
    pub transaction_count: usize,
    pub average_transaction: f64,
    pub top_category: String,
    pub compared_to_previous: PeriodComparison,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    pub spent_change: f64,
    pub transaction_change: f64,
}

/// Aggregates KPI figures for the dashboard's summary cards.
pub struct SummaryService;

impl SummaryService {
    pub fn spending_summary(dataset: &Dataset, period: Period, range: &DateRange) -> SpendingSummary {
        let filtered: Vec<&Transaction> = dataset
            .transactions
            .iter()
            .filter(|txn| range.contains(txn.date))
            .collect();

        let total: f64 = filtered.iter().map(|txn| txn.amount).sum();
        let count = filtered.len();
        // Guard the empty window: the average must be 0, never NaN.
        let average = if count > 0 { total / count as f64 } else { 0.0 };

        SpendingSummary {
            period,
            total_spent: round2(total),
            transaction_count: count,
            average_transaction: round2(average),
            top_category: top_category(&filtered),
            compared_to_previous: PeriodComparison {
                spent_change: PREVIOUS_SPENT_CHANGE,
                transaction_change: PREVIOUS_TRANSACTION_CHANGE,
            },
        }
    }
}

/// Category with the largest summed amount; ties keep the category seen
/// first, and an empty window reports "N/A".
fn top_category(transactions: &[&Transaction]) -> String {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    for txn in transactions {
        match totals.iter_mut().find(|(name, _)| *name == txn.category) {
            Some((_, amount)) => *amount += txn.amount,
            None => totals.push((txn.category.as_str(), txn.amount)),
        }
    }

    let mut best: Option<(&str, f64)> = None;
    for (name, amount) in totals {
        if best.map_or(true, |(_, best_amount)| amount > best_amount) {
            best = Some((name, amount));
        }
    }
    best.map(|(name, _)| name.to_string())
        .unwrap_or_else(|| "N/A".into())
}
