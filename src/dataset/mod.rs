//! The in-memory dataset aggregate: loaded once at startup, read-only after.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::{CustomerProfile, FilterCatalog, MonthlyTrend, SpendingGoal, Transaction};

/// Everything the dashboard reads: one profile, the transaction collection,
/// precomputed monthly trends, budget goals, and filter metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub profile: CustomerProfile,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub trends: Vec<MonthlyTrend>,
    #[serde(default)]
    pub goals: Vec<SpendingGoal>,
    #[serde(default)]
    pub filters: FilterCatalog,
}

impl Dataset {
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Cross-reference scan over the loaded records. Warnings are advisory:
    /// the dataset is trusted, so nothing here is fatal.
    pub fn warnings(&self) -> Vec<String> {
        let catalog: HashSet<&str> = self
            .filters
            .categories
            .iter()
            .map(|filter| filter.name.as_str())
            .collect();
        let mut warnings = Vec::new();

        for txn in &self.transactions {
            if txn.amount <= 0.0 {
                warnings.push(format!(
                    "transaction {} has non-positive amount {}",
                    txn.id, txn.amount
                ));
            }
            if !catalog.is_empty() && !catalog.contains(txn.category.as_str()) {
                warnings.push(format!(
                    "transaction {} references category `{}` missing from the filter catalog",
                    txn.id, txn.category
                ));
            }
        }
        for goal in &self.goals {
            if !catalog.is_empty() && !catalog.contains(goal.category.as_str()) {
                warnings.push(format!(
                    "goal {} references category `{}` missing from the filter catalog",
                    goal.id, goal.category
                ));
            }
        }
        // "YYYY-MM" keys order lexicographically, which is chronological.
        for pair in self.trends.windows(2) {
            if pair[0].month >= pair[1].month {
                warnings.push(format!(
                    "trend months `{}` and `{}` are out of chronological order",
                    pair[0].month, pair[1].month
                ));
            }
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CategoryFilter, GoalStatus};
    use chrono::{NaiveDate, Utc};

    fn sample_profile() -> CustomerProfile {
        CustomerProfile {
            customer_id: "12345".into(),
            name: "Jordan Avery".into(),
            email: "jordan.avery@example.com".into(),
            join_date: NaiveDate::from_ymd_opt(2023, 4, 18).unwrap(),
            account_type: "premium".into(),
            total_spent: 0.0,
            currency: "USD".into(),
        }
    }

    fn sample_transaction(id: &str, category: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.into(),
            date: Utc::now(),
            merchant: "Sample Merchant".into(),
            category: category.into(),
            amount,
            description: "sample".into(),
            payment_method: "credit_card".into(),
            icon: "shopping-cart".into(),
            category_color: "#4CAF50".into(),
        }
    }

    fn dataset_with(transactions: Vec<Transaction>, goals: Vec<SpendingGoal>) -> Dataset {
        Dataset {
            profile: sample_profile(),
            transactions,
            trends: Vec::new(),
            goals,
            filters: FilterCatalog {
                categories: vec![CategoryFilter {
                    name: "Groceries".into(),
                    color: "#4CAF50".into(),
                    icon: "shopping-cart".into(),
                }],
                date_range_presets: Vec::new(),
            },
        }
    }

    #[test]
    fn clean_dataset_has_no_warnings() {
        let dataset = dataset_with(vec![sample_transaction("txn_1", "Groceries", 12.5)], vec![]);
        assert!(dataset.warnings().is_empty());
    }

    #[test]
    fn flags_unknown_categories_and_bad_amounts() {
        let dataset = dataset_with(
            vec![
                sample_transaction("txn_1", "Jetpacks", 12.5),
                sample_transaction("txn_2", "Groceries", -3.0),
            ],
            vec![SpendingGoal {
                id: "goal_1".into(),
                category: "Jetpacks".into(),
                monthly_budget: 100.0,
                current_spent: 10.0,
                percentage_used: 10.0,
                days_remaining: 20,
                status: GoalStatus::OnTrack,
            }],
        );
        let warnings = dataset.warnings();
        assert_eq!(warnings.len(), 3);
        assert!(warnings.iter().any(|w| w.contains("txn_1")));
        assert!(warnings.iter().any(|w| w.contains("non-positive")));
        assert!(warnings.iter().any(|w| w.contains("goal_1")));
    }

    #[test]
    fn flags_out_of_order_trends() {
        let mut dataset = dataset_with(Vec::new(), Vec::new());
        dataset.trends = vec![
            MonthlyTrend {
                month: "2026-03".into(),
                total_spent: 100.0,
                transaction_count: 4,
                average_transaction: 25.0,
            },
            MonthlyTrend {
                month: "2026-02".into(),
                total_spent: 90.0,
                transaction_count: 3,
                average_transaction: 30.0,
            },
        ];
        let warnings = dataset.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("chronological"));
    }
}
