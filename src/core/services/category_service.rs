//! Category breakdown over a resolved or custom date range.

use serde::Serialize;

use crate::core::rounding::{round1, round2};
use crate::dataset::Dataset;
use crate::domain::DateRange;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySpending {
    pub name: String,
    pub amount: f64,
    pub percentage: f64,
    pub transaction_count: usize,
    pub color: String,
    pub icon: String,
}

/// The queried interval echoed back as calendar-date strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeStamp {
    pub start_date: String,
    pub end_date: String,
}

impl From<&DateRange> for DateRangeStamp {
    fn from(range: &DateRange) -> Self {
        Self {
            start_date: range.start_date().to_string(),
            end_date: range.end_date().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingByCategory {
    pub date_range: DateRangeStamp,
    pub total_amount: f64,
    pub categories: Vec<CategorySpending>,
}

struct CategoryAccumulator {
    name: String,
    amount: f64,
    count: usize,
    color: String,
    icon: String,
}

/// Groups in-range transactions by category and computes each share.
pub struct CategoryService;

impl CategoryService {
    pub fn spending_by_category(dataset: &Dataset, range: &DateRange) -> SpendingByCategory {
        // Accumulator is local to the call and keeps first-encounter order,
        // which also settles equal-amount ties after the stable sort below.
        let mut groups: Vec<CategoryAccumulator> = Vec::new();
        let mut total = 0.0;

        for txn in dataset
            .transactions
            .iter()
            .filter(|txn| range.contains(txn.date))
        {
            total += txn.amount;
            match groups.iter_mut().find(|group| group.name == txn.category) {
                Some(group) => {
                    group.amount += txn.amount;
                    group.count += 1;
                }
                None => groups.push(CategoryAccumulator {
                    name: txn.category.clone(),
                    amount: txn.amount,
                    count: 1,
                    color: txn.category_color.clone(),
                    icon: txn.icon.clone(),
                }),
            }
        }

        let mut categories: Vec<CategorySpending> = groups
            .into_iter()
            .map(|group| CategorySpending {
                name: group.name,
                amount: round2(group.amount),
                percentage: if total > 0.0 {
                    round1(group.amount / total * 100.0)
                } else {
                    0.0
                },
                transaction_count: group.count,
                color: group.color,
                icon: group.icon,
            })
            .collect();
        categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));

        SpendingByCategory {
            date_range: DateRangeStamp::from(range),
            total_amount: round2(total),
            categories,
        }
    }
}
