//! Filtered, sorted, paginated transaction listings.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::Dataset;
use crate::domain::{day_end, day_start, Transaction};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const MAX_PAGE_SIZE: usize = 100;

/// Sort order for listings. Sorting is total; equal keys keep the dataset's
/// encounter order (stable sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortBy {
    #[default]
    #[serde(rename = "date_desc")]
    DateDesc,
    #[serde(rename = "date_asc")]
    DateAsc,
    #[serde(rename = "amount_desc")]
    AmountDesc,
    #[serde(rename = "amount_asc")]
    AmountAsc,
}

impl SortBy {
    pub fn token(&self) -> &'static str {
        match self {
            SortBy::DateDesc => "date_desc",
            SortBy::DateAsc => "date_asc",
            SortBy::AmountDesc => "amount_desc",
            SortBy::AmountAsc => "amount_asc",
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key `{0}`; expected date_desc, date_asc, amount_desc, or amount_asc")]
pub struct ParseSortByError(String);

impl FromStr for SortBy {
    type Err = ParseSortByError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "date_desc" => Ok(SortBy::DateDesc),
            "date_asc" => Ok(SortBy::DateAsc),
            "amount_desc" => Ok(SortBy::AmountDesc),
            "amount_asc" => Ok(SortBy::AmountAsc),
            other => Err(ParseSortByError(other.to_string())),
        }
    }
}

/// Listing parameters. Filters are conjunctive and all optional; the date
/// bounds are inclusive, with the end bound stretched to end-of-day.
#[derive(Debug, Clone, Default)]
pub struct TransactionQuery {
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sort_by: SortBy,
    pub limit: Option<usize>,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsPage {
    pub transactions: Vec<Transaction>,
    pub pagination: PageInfo,
}

/// Applies filters, imposes a total order, and pages the result.
pub struct TransactionService;

impl TransactionService {
    pub fn transactions(dataset: &Dataset, query: &TransactionQuery) -> TransactionsPage {
        let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
        let offset = query.offset;

        let mut filtered: Vec<&Transaction> = dataset
            .transactions
            .iter()
            .filter(|txn| {
                query
                    .category
                    .as_deref()
                    .map_or(true, |category| txn.category == category)
            })
            .filter(|txn| {
                query
                    .start_date
                    .map_or(true, |date| txn.date >= day_start(date))
            })
            .filter(|txn| query.end_date.map_or(true, |date| txn.date <= day_end(date)))
            .collect();

        match query.sort_by {
            SortBy::DateDesc => filtered.sort_by(|a, b| b.date.cmp(&a.date)),
            SortBy::DateAsc => filtered.sort_by(|a, b| a.date.cmp(&b.date)),
            SortBy::AmountDesc => filtered.sort_by(|a, b| b.amount.total_cmp(&a.amount)),
            SortBy::AmountAsc => filtered.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
        }

        let total = filtered.len();
        let transactions: Vec<Transaction> = filtered
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        TransactionsPage {
            transactions,
            pagination: PageInfo {
                total,
                limit,
                offset,
                has_more: offset + limit < total,
            },
        }
    }
}
