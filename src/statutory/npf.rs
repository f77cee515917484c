//! NPF (National Pension Fund) calculation.
//!
//! Legacy flat-rate pension scheme on **basic** salary: 3% employee, 6%
//! employer. Only employees hired before the 2020-01-01 PRGF cutover remain
//! in the scheme; anyone hired on or after that date contributes zero here
//! and is covered by PRGF instead.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryConfig;

use super::round_money;

/// The result of an NPF calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpfContribution {
    /// Amount withheld from the employee; zero for post-cutover hires.
    pub employee: Decimal,
    /// Amount owed by the employer; zero for post-cutover hires.
    pub employer: Decimal,
}

impl NpfContribution {
    fn zero() -> Self {
        Self {
            employee: Decimal::ZERO,
            employer: Decimal::ZERO,
        }
    }
}

/// Calculates employee and employer NPF on a monthly basic salary.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_engine::config::StatutoryConfig;
/// use payroll_engine::statutory::calculate_npf;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::mauritius_2025();
/// let legacy_hire = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
/// let npf = calculate_npf(Decimal::from(40_000), legacy_hire, &config);
/// assert_eq!(npf.employee, Decimal::new(120000, 2)); // 3% = 1200.00
///
/// let modern_hire = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
/// let npf = calculate_npf(Decimal::from(40_000), modern_hire, &config);
/// assert_eq!(npf.employee, Decimal::ZERO);
/// ```
pub fn calculate_npf(
    basic_salary: Decimal,
    hire_date: NaiveDate,
    config: &StatutoryConfig,
) -> NpfContribution {
    if hire_date >= config.prgf.cutover_date {
        return NpfContribution::zero();
    }

    NpfContribution {
        employee: round_money(basic_salary * config.npf.employee),
        employer: round_money(basic_salary * config.npf.employer),
    }
}
