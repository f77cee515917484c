//! End-of-year and termination benefits.
//!
//! Three lump-sum calculations that feed the earnings aggregator as
//! one-off extras or stand alone at termination:
//!
//! - the statutory 13th-month bonus (one twelfth of the year's gross),
//! - retirement gratuity for legacy pre-PRGF hires (15 days of basic per
//!   year of service),
//! - leave encashment (remaining leave balance paid at the daily rate).
//!
//! Daily rates divide the monthly basic by the configured working-day
//! divisor (26 in Mauritius).

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::EmployeeSnapshot;
use crate::statutory::round_money;

/// Days of basic salary accrued per year of service for gratuity.
const GRATUITY_DAYS_PER_YEAR: u32 = 15;

/// Calculates the 13th-month bonus from the employee's gross earnings for
/// the calendar year.
///
/// The bonus is one twelfth of total gross. Callers sum the gross of every
/// payslip already issued in the year (plus the current run) before
/// calling.
pub fn calculate_thirteenth_month_bonus(annual_gross: Decimal) -> Decimal {
    round_money(annual_gross / Decimal::from(12))
}

/// Calculates the retirement gratuity owed to a legacy hire.
///
/// Only employees hired before the PRGF cutover accrue gratuity; for
/// later hires the employer's monthly PRGF contributions replace this
/// liability entirely. Accrual is 15 days of basic salary per whole year
/// of service, with nothing owed under one year.
pub fn calculate_gratuity(
    employee: &EmployeeSnapshot,
    as_of: NaiveDate,
    config: &StatutoryConfig,
) -> Decimal {
    if employee.hire_date >= config.prgf.cutover_date {
        return Decimal::ZERO;
    }
    let years = employee.years_of_service(as_of);
    if years < 1 {
        return Decimal::ZERO;
    }
    let daily_rate = employee.basic_salary / config.monthly_working_day_divisor;
    round_money(daily_rate * Decimal::from(GRATUITY_DAYS_PER_YEAR) * Decimal::from(years))
}

/// Calculates the payout for an unused leave balance.
///
/// Each remaining day is paid at the daily rate. Half days are allowed; a
/// zero or negative balance pays nothing.
pub fn calculate_leave_encashment(
    basic_salary: Decimal,
    leave_balance_days: Decimal,
    config: &StatutoryConfig,
) -> Decimal {
    if leave_balance_days <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let daily_rate = basic_salary / config.monthly_working_day_divisor;
    round_money(daily_rate * leave_balance_days)
}
