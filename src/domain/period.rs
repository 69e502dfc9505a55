use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named relative time window resolved against the current day.
///
/// The set is closed: unknown tokens fail at parse time rather than falling
/// back to a default window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "7d")]
    SevenDays,
    #[default]
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "90d")]
    NinetyDays,
    #[serde(rename = "1y")]
    OneYear,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::SevenDays,
        Period::ThirtyDays,
        Period::NinetyDays,
        Period::OneYear,
    ];

    /// The wire token used by the dashboard and the dataset presets.
    pub fn token(&self) -> &'static str {
        match self {
            Period::SevenDays => "7d",
            Period::ThirtyDays => "30d",
            Period::NinetyDays => "90d",
            Period::OneYear => "1y",
        }
    }

    /// Resolves the period to an inclusive range ending at the end of `today`.
    ///
    /// The start lands on the first instant of the day 7/30/90 days (or one
    /// calendar year) back from `today`.
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        let start_day = match self {
            Period::SevenDays => today - Duration::days(7),
            Period::ThirtyDays => today - Duration::days(30),
            Period::NinetyDays => today - Duration::days(90),
            Period::OneYear => today
                .checked_sub_months(Months::new(12))
                .unwrap_or(today - Duration::days(365)),
        };
        DateRange {
            start: day_start(start_day),
            end: day_end(today),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown period token `{0}`; expected 7d, 30d, 90d, or 1y")]
pub struct ParsePeriodError(String);

impl FromStr for Period {
    type Err = ParsePeriodError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "7d" => Ok(Period::SevenDays),
            "30d" => Ok(Period::ThirtyDays),
            "90d" => Ok(Period::NinetyDays),
            "1y" => Ok(Period::OneYear),
            other => Err(ParsePeriodError(other.to_string())),
        }
    }
}

/// Inclusive `[start, end]` interval with day-normalized bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("start date {start} is after end date {end}")]
pub struct DateRangeError {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Builds a custom range from two calendar dates: `start` at its first
    /// instant, `end` normalized to the last instant of its day.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError { start, end });
        }
        Ok(Self {
            start: day_start(start),
            end: day_end(end),
        })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Calendar date of the range start, as echoed in responses.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Calendar date of the range end, as echoed in responses.
    pub fn end_date(&self) -> NaiveDate {
        self.end.date_naive()
    }
}

/// First instant of `date` in UTC.
pub fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap().and_utc()
}

/// Last instant of `date` in UTC (23:59:59.999).
pub fn day_end(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap().and_utc()
}
