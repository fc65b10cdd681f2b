//! Reporting period model.
//!
//! A [`ReportPeriod`] bounds the business dates aggregated into one period
//! summary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of business dates.
///
/// # Example
///
/// ```
/// use detailing_payroll::models::ReportPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportPeriod {
///     start_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())); // start date
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2025, 3, 31).unwrap())); // end date
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())); // after
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// The first business date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last business date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportPeriod {
    /// A period covering a single business day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start_date: date,
            end_date: date,
        }
    }

    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Rejects periods that end before they start.
    pub fn validate(&self) -> EngineResult<()> {
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidPeriod {
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}
