//! Pay period model.
//!
//! A [`PayPeriod`] is one (month, year) payroll run, the unit of cycle
//! processing, approval and payment.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month payroll period.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
///
/// let period = PayPeriod::new(1, 2026).unwrap();
/// assert_eq!(period.label(), "January 2026");
/// assert_eq!(period.working_days(), 27); // January 2026 has 4 Sundays
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
}

impl PayPeriod {
    /// Creates a pay period, rejecting months outside 1-12.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod { month, year });
        }
        Ok(Self { month, year })
    }

    /// The first day of the period.
    pub fn first_day(&self) -> NaiveDate {
        // Month is validated at construction.
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).expect("valid date"))
    }

    /// The last day of the period.
    pub fn last_day(&self) -> NaiveDate {
        let (next_month, next_year) = if self.month == 12 {
            (1, self.year + 1)
        } else {
            (self.month + 1, self.year)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("valid date")
            .pred_opt()
            .expect("valid date")
    }

    /// Checks whether a date falls inside this period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// Number of working days in the period.
    ///
    /// Mauritius payroll runs on a six-day convention: every day except
    /// Sunday counts as a working day. This is the divisor for the
    /// unpaid-leave daily rate.
    pub fn working_days(&self) -> u32 {
        let mut days = 0;
        let mut date = self.first_day();
        let last = self.last_day();
        while date <= last {
            if date.weekday() != Weekday::Sun {
                days += 1;
            }
            date = match date.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        days
    }

    /// Human-readable label, e.g. "January 2026".
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

impl std::fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}
