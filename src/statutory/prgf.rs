//! PRGF (Portable Retirement Gratuity Fund) calculation.
//!
//! Employer-only contribution on **gross** salary for employees hired on or
//! after the 2020-01-01 cutover, replacing the gratuity-on-termination
//! liability. The rate is tiered by whole years of service: up to 5 years
//! 4.3%, 6-10 years 5.0%, above 10 years 6.8%. Pre-cutover hires remain on
//! NPF and contribute zero here regardless of tenure.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryConfig;

use super::round_money;

/// The result of a PRGF calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrgfContribution {
    /// Amount owed by the employer; zero for pre-cutover hires.
    pub employer: Decimal,
    /// The tenure-tier rate that was applied; zero for pre-cutover hires.
    pub rate_applied: Decimal,
}

/// Calculates the employer PRGF contribution on a monthly gross salary.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::config::StatutoryConfig;
/// use payroll_engine::statutory::calculate_prgf;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = StatutoryConfig::mauritius_2025();
/// let hire = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let prgf = calculate_prgf(Decimal::from(60_000), hire, 3, &config);
/// assert_eq!(prgf.employer, Decimal::from_str("2580.00").unwrap()); // 4.3%
/// ```
pub fn calculate_prgf(
    gross_salary: Decimal,
    hire_date: NaiveDate,
    years_of_service: u32,
    config: &StatutoryConfig,
) -> PrgfContribution {
    if hire_date < config.prgf.cutover_date {
        return PrgfContribution {
            employer: Decimal::ZERO,
            rate_applied: Decimal::ZERO,
        };
    }

    let rate = config.prgf_rate_for(years_of_service);
    PrgfContribution {
        employer: round_money(gross_salary * rate),
        rate_applied: rate,
    }
}
