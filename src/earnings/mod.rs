//! Earnings aggregation.
//!
//! Turns the raw period facts for one employee — attendance records,
//! timesheets, leave and salary components — into a single
//! [`EarningsStatement`] with the gross salary the statutory calculators
//! run on.

mod aggregator;

pub use aggregator::{aggregate_earnings, EarningsExtras, EarningsStatement};
