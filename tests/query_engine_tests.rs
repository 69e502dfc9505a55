use chrono::{DateTime, NaiveDate, Utc};
use insights_core::core::clock::FixedClock;
use insights_core::core::engine::InsightsEngine;
use insights_core::core::services::{SortBy, TransactionQuery};
use insights_core::dataset::Dataset;
use insights_core::domain::{
    CategoryFilter, CustomerProfile, DateRange, DateRangePreset, FilterCatalog, GoalStatus,
    MonthlyTrend, Period, SpendingGoal, Transaction,
};

fn sample_date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn txn(id: &str, date: &str, category: &str, amount: f64) -> Transaction {
    Transaction {
        id: id.into(),
        date: date.parse::<DateTime<Utc>>().expect("valid test instant"),
        merchant: format!("{category} Merchant"),
        category: category.into(),
        amount,
        description: format!("{category} purchase"),
        payment_method: "credit_card".into(),
        icon: "tag".into(),
        category_color: "#888888".into(),
    }
}

fn sample_dataset() -> Dataset {
    Dataset {
        profile: CustomerProfile {
            customer_id: "12345".into(),
            name: "Jordan Avery".into(),
            email: "jordan.avery@example.com".into(),
            join_date: sample_date(2023, 4, 18),
            account_type: "premium".into(),
            total_spent: 256.0,
            currency: "USD".into(),
        },
        // Storage order is deliberately not chronological.
        transactions: vec![
            txn("txn_jan_dining", "2026-01-10T12:00:00Z", "Dining", 40.0),
            txn("txn_jan_groceries", "2026-01-20T09:30:00Z", "Groceries", 60.0),
            txn("txn_last_summer", "2025-06-01T15:00:00Z", "Shopping", 99.99),
            txn("txn_may_transport", "2026-05-15T08:15:00Z", "Transport", 30.0),
            txn("txn_jul_groceries", "2026-07-10T17:45:00Z", "Groceries", 25.5),
            txn("txn_jul_dining", "2026-07-20T19:00:00Z", "Dining", 25.5),
            txn("txn_aug_streaming", "2026-08-01T10:00:00Z", "Entertainment", 10.01),
            txn("txn_aug_groceries", "2026-08-02T18:30:00Z", "Groceries", 45.99),
            txn("txn_aug_dining", "2026-08-03T20:15:00Z", "Dining", 19.0),
        ],
        trends: (0..26)
            .map(|index| MonthlyTrend {
                month: format!("{:04}-{:02}", 2024 + index / 12, index % 12 + 1),
                total_spent: 500.0 + index as f64,
                transaction_count: 10 + index,
                average_transaction: 50.0,
            })
            .collect(),
        goals: vec![
            SpendingGoal {
                id: "goal_groceries".into(),
                category: "Groceries".into(),
                monthly_budget: 300.0,
                current_spent: 131.49,
                percentage_used: 43.8,
                days_remaining: 26,
                status: GoalStatus::OnTrack,
            },
            SpendingGoal {
                id: "goal_dining".into(),
                category: "Dining".into(),
                monthly_budget: 90.0,
                current_spent: 84.5,
                percentage_used: 93.9,
                days_remaining: 26,
                status: GoalStatus::Warning,
            },
        ],
        filters: FilterCatalog {
            categories: vec![
                CategoryFilter {
                    name: "Groceries".into(),
                    color: "#4CAF50".into(),
                    icon: "shopping-cart".into(),
                },
                CategoryFilter {
                    name: "Dining".into(),
                    color: "#FF7043".into(),
                    icon: "utensils".into(),
                },
            ],
            date_range_presets: vec![DateRangePreset {
                label: "Last 30 days".into(),
                value: "30d".into(),
            }],
        },
    }
}

// All assertions below assume "today" is 2026-08-05.
fn engine() -> InsightsEngine {
    let instant = "2026-08-05T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
    InsightsEngine::with_clock(sample_dataset(), Box::new(FixedClock(instant)))
}

#[test]
fn summary_totals_per_period() {
    let engine = engine();

    let week = engine.spending_summary("12345", Period::SevenDays);
    assert_eq!(week.transaction_count, 3);
    assert_eq!(week.total_spent, 75.0);
    assert_eq!(week.average_transaction, 25.0);
    assert_eq!(week.top_category, "Groceries");

    let month = engine.spending_summary("12345", Period::ThirtyDays);
    assert_eq!(month.transaction_count, 5);
    assert_eq!(month.total_spent, 126.0);
    assert_eq!(month.average_transaction, 25.2);

    let quarter = engine.spending_summary("12345", Period::NinetyDays);
    assert_eq!(quarter.transaction_count, 6);
    assert_eq!(quarter.total_spent, 156.0);

    // The 2025-06-01 transaction sits outside even the one-year window.
    let year = engine.spending_summary("12345", Period::OneYear);
    assert_eq!(year.transaction_count, 8);
    assert_eq!(year.total_spent, 256.0);
}

#[test]
fn summary_average_matches_rounded_quotient() {
    let engine = engine();
    for period in Period::ALL {
        let summary = engine.spending_summary("12345", period);
        if summary.transaction_count > 0 {
            let expected =
                (summary.total_spent / summary.transaction_count as f64 * 100.0).round() / 100.0;
            assert_eq!(summary.average_transaction, expected, "{period}");
        } else {
            assert_eq!(summary.average_transaction, 0.0, "{period}");
        }
    }
}

#[test]
fn breakdown_is_sorted_and_shares_sum_to_one_hundred() {
    let engine = engine();
    for period in Period::ALL {
        let breakdown = engine.spending_by_category("12345", period, None);
        for pair in breakdown.categories.windows(2) {
            assert!(pair[0].amount >= pair[1].amount, "{period} not descending");
        }
        if breakdown.total_amount > 0.0 {
            let share_sum: f64 = breakdown.categories.iter().map(|cat| cat.percentage).sum();
            assert!(
                share_sum > 99.0 && share_sum < 101.0,
                "{period} shares summed to {share_sum}"
            );
        }
    }
}

#[test]
fn breakdown_honors_an_explicit_january_range() {
    let engine = engine();
    let range = DateRange::new(sample_date(2026, 1, 1), sample_date(2026, 1, 31)).unwrap();

    let breakdown = engine.spending_by_category("12345", Period::ThirtyDays, Some(range));
    assert_eq!(breakdown.date_range.start_date, "2026-01-01");
    assert_eq!(breakdown.date_range.end_date, "2026-01-31");
    assert_eq!(breakdown.total_amount, 100.0);

    let names: Vec<&str> = breakdown
        .categories
        .iter()
        .map(|cat| cat.name.as_str())
        .collect();
    assert_eq!(names, ["Groceries", "Dining"]);
    assert_eq!(breakdown.categories[0].percentage, 60.0);
    assert_eq!(breakdown.categories[1].percentage, 40.0);
}

#[test]
fn trends_clamp_and_preserve_stored_order() {
    let engine = engine();

    assert_eq!(engine.spending_trends("12345", None).trends.len(), 12);
    assert_eq!(engine.spending_trends("12345", Some(100)).trends.len(), 24);

    let six = engine.spending_trends("12345", Some(6)).trends;
    assert_eq!(six.len(), 6);
    let months: Vec<&str> = six.iter().map(|t| t.month.as_str()).collect();
    assert_eq!(
        months,
        ["2025-09", "2025-10", "2025-11", "2025-12", "2026-01", "2026-02"]
    );
}

#[test]
fn listing_sorts_are_total_and_stable() {
    let engine = engine();

    let by_date = engine.transactions("12345", &TransactionQuery::default());
    let ids: Vec<&str> = by_date.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids[0], "txn_aug_dining");
    assert_eq!(ids.last().copied(), Some("txn_last_summer"));

    let by_amount = engine.transactions(
        "12345",
        &TransactionQuery {
            sort_by: SortBy::AmountAsc,
            ..TransactionQuery::default()
        },
    );
    let amounts: Vec<f64> = by_amount.transactions.iter().map(|t| t.amount).collect();
    for pair in amounts.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    // 25.50 appears twice; storage order breaks the tie.
    let ids: Vec<&str> = by_amount
        .transactions
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    let groceries = ids.iter().position(|id| *id == "txn_jul_groceries").unwrap();
    let dining = ids.iter().position(|id| *id == "txn_jul_dining").unwrap();
    assert_eq!(dining, groceries + 1);
}

#[test]
fn listing_pages_are_disjoint_and_report_has_more() {
    let engine = engine();

    let first = engine.transactions(
        "12345",
        &TransactionQuery {
            limit: Some(2),
            ..TransactionQuery::default()
        },
    );
    let second = engine.transactions(
        "12345",
        &TransactionQuery {
            limit: Some(2),
            offset: 2,
            ..TransactionQuery::default()
        },
    );
    assert_eq!(first.transactions.len(), 2);
    assert_eq!(second.transactions.len(), 2);
    assert!(first
        .transactions
        .iter()
        .all(|txn| second.transactions.iter().all(|other| other.id != txn.id)));
    assert!(first.pagination.has_more);

    let tail = engine.transactions(
        "12345",
        &TransactionQuery {
            limit: Some(3),
            offset: 6,
            ..TransactionQuery::default()
        },
    );
    assert_eq!(tail.transactions.len(), 3);
    assert!(!tail.pagination.has_more);
}

#[test]
fn listing_limit_clamps_to_one_hundred() {
    let engine = engine();
    let page = engine.transactions(
        "12345",
        &TransactionQuery {
            limit: Some(200),
            ..TransactionQuery::default()
        },
    );
    assert_eq!(page.pagination.limit, 100);
    assert_eq!(page.pagination.total, 9);
    assert_eq!(page.transactions.len(), 9);
    assert!(!page.pagination.has_more);
}

#[test]
fn listing_filters_combine() {
    let engine = engine();
    let page = engine.transactions(
        "12345",
        &TransactionQuery {
            category: Some("Groceries".into()),
            start_date: Some(sample_date(2026, 7, 1)),
            end_date: Some(sample_date(2026, 8, 2)),
            ..TransactionQuery::default()
        },
    );
    let ids: Vec<&str> = page.transactions.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["txn_aug_groceries", "txn_jul_groceries"]);
    assert_eq!(page.pagination.total, 2);
}

#[test]
fn goals_and_filters_pass_through_unmodified() {
    let engine = engine();

    let goals = engine.goals("12345").goals;
    assert_eq!(goals.len(), 2);
    assert_eq!(goals[0].id, "goal_groceries");
    assert_eq!(goals[1].status, GoalStatus::Warning);
    assert_eq!(goals[1].percentage_used, 93.9);

    let catalog = engine.filters("12345");
    assert_eq!(catalog.categories.len(), 2);
    assert_eq!(catalog.date_range_presets[0].value, "30d");
}
