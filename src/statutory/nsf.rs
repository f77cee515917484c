//! NSF (National Savings Fund) calculation.
//!
//! Flat-rate contribution on **basic** salary: 1% employee, 2.5% employer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryConfig;

use super::round_money;

/// The result of an NSF calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NsfContribution {
    /// Amount withheld from the employee.
    pub employee: Decimal,
    /// Amount owed by the employer.
    pub employer: Decimal,
}

/// Calculates employee and employer NSF on a monthly basic salary.
pub fn calculate_nsf(basic_salary: Decimal, config: &StatutoryConfig) -> NsfContribution {
    NsfContribution {
        employee: round_money(basic_salary * config.nsf.employee),
        employer: round_money(basic_salary * config.nsf.employer),
    }
}
