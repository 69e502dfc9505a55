//! Facade that owns the loaded dataset and preserves the dashboard's query
//! surface. Every call is an independent, side-effect-free read.

use serde::Serialize;
use tracing::debug;

use crate::core::clock::{Clock, SystemClock};
use crate::core::services::{
    CategoryService, GoalService, GoalsResponse, SpendingByCategory, SpendingSummary,
    SpendingTrends, SummaryService, TransactionQuery, TransactionService, TransactionsPage,
    TrendService,
};
use crate::dataset::Dataset;
use crate::domain::{CustomerProfile, DateRange, FilterCatalog, Period};
use crate::errors::InsightsError;
use crate::storage::DatasetSource;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerList {
    pub customers: Vec<CustomerProfile>,
}

pub struct InsightsEngine {
    dataset: Dataset,
    clock: Box<dyn Clock>,
}

impl InsightsEngine {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_clock(dataset, Box::new(SystemClock))
    }

    pub fn with_clock(dataset: Dataset, clock: Box<dyn Clock>) -> Self {
        Self { dataset, clock }
    }

    pub fn from_source(source: &dyn DatasetSource) -> Result<Self, InsightsError> {
        Ok(Self::new(source.load()?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// All known customers. The dataset models exactly one.
    pub fn customers(&self) -> CustomerList {
        CustomerList {
            customers: vec![self.dataset.profile.clone()],
        }
    }

    pub fn profile(&self, customer_id: &str) -> &CustomerProfile {
        self.check_customer(customer_id);
        &self.dataset.profile
    }

    pub fn spending_summary(&self, customer_id: &str, period: Period) -> SpendingSummary {
        self.check_customer(customer_id);
        let range = period.resolve(self.clock.today());
        debug!(%period, start = %range.start_date(), end = %range.end_date(), "spending summary");
        SummaryService::spending_summary(&self.dataset, period, &range)
    }

    /// Category breakdown over the named period, or over `custom_range` when
    /// the caller supplies one (the explicit range wins).
    pub fn spending_by_category(
        &self,
        customer_id: &str,
        period: Period,
        custom_range: Option<DateRange>,
    ) -> SpendingByCategory {
        self.check_customer(customer_id);
        let range = custom_range.unwrap_or_else(|| period.resolve(self.clock.today()));
        debug!(start = %range.start_date(), end = %range.end_date(), "category breakdown");
        CategoryService::spending_by_category(&self.dataset, &range)
    }

    pub fn spending_trends(&self, customer_id: &str, months: Option<u32>) -> SpendingTrends {
        self.check_customer(customer_id);
        TrendService::spending_trends(&self.dataset, months)
    }

    pub fn transactions(&self, customer_id: &str, query: &TransactionQuery) -> TransactionsPage {
        self.check_customer(customer_id);
        debug!(sort = %query.sort_by, offset = query.offset, "transaction listing");
        TransactionService::transactions(&self.dataset, query)
    }

    pub fn goals(&self, customer_id: &str) -> GoalsResponse {
        self.check_customer(customer_id);
        GoalService::goals(&self.dataset)
    }

    pub fn filters(&self, customer_id: &str) -> FilterCatalog {
        self.check_customer(customer_id);
        self.dataset.filters.clone()
    }

    // The id parameter exists for API shape; the dataset is single-customer.
    fn check_customer(&self, customer_id: &str) {
        if customer_id != self.dataset.profile.customer_id {
            debug!(
                requested = customer_id,
                loaded = %self.dataset.profile.customer_id,
                "customer id does not match the loaded profile"
            );
        }
    }
}
