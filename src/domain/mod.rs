//! Dataset record types and the period/date-range vocabulary shared by every
//! query operation.

pub mod filters;
pub mod goal;
pub mod period;
pub mod profile;
pub mod transaction;
pub mod trend;

pub use filters::{CategoryFilter, DateRangePreset, FilterCatalog};
pub use goal::{GoalStatus, SpendingGoal};
pub use period::{day_end, day_start, DateRange, DateRangeError, ParsePeriodError, Period};
pub use profile::CustomerProfile;
pub use transaction::Transaction;
pub use trend::MonthlyTrend;
