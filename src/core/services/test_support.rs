//! Shared builders for service tests.

use chrono::NaiveDate;

use crate::dataset::Dataset;
use crate::domain::{CustomerProfile, FilterCatalog, Transaction};

pub(crate) fn sample_profile() -> CustomerProfile {
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

pub(crate) fn dataset_with_transactions(transactions: Vec<Transaction>) -> Dataset {
    Dataset {
        profile: sample_profile(),
        transactions,
        trends: Vec::new(),
        goals: Vec::new(),
        filters: FilterCatalog::default(),
    }
}

/// Transaction at noon UTC on the given `YYYY-MM-DD` day.
pub(crate) fn txn_on(id: &str, day: &str, category: &str, amount: f64) -> Transaction {
    txn_with_style(id, day, category, amount, "#4CAF50", "shopping-cart")
}

pub(crate) fn txn_with_style(
    id: &str,
    day: &str,
    category: &str,
    amount: f64,
    color: &str,
    icon: &str,
) -> Transaction {
    let date = day
        .parse::<NaiveDate>()
        .expect("valid test date")
        .and_hms_opt(12, 0, 0)
        .expect("valid test time")
        .and_utc();
    Transaction {
        id: id.into(),
        date,
        merchant: format!("{category} Merchant"),
        category: category.into(),
        amount,
        description: format!("{category} purchase"),
        payment_method: "credit_card".into(),
        icon: icon.into(),
        category_color: color.into(),
    }
}
