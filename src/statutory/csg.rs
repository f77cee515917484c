//! CSG (Contribution Sociale Généralisée) calculation.
//!
//! CSG is a progressive two-tier social contribution on monthly **gross**
//! salary (not basic). At or below the threshold the low rates apply;
//! above it the high rates apply to the whole gross — the tiers select a
//! rate, they are not marginal bands.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryConfig;

use super::round_money;

/// The result of a CSG calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsgContribution {
    /// Amount withheld from the employee.
    pub employee: Decimal,
    /// Amount owed by the employer.
    pub employer: Decimal,
    /// The employee rate that was applied.
    pub employee_rate: Decimal,
    /// The employer rate that was applied.
    pub employer_rate: Decimal,
}

/// Calculates employee and employer CSG on a monthly gross salary.
///
/// The threshold boundary is inclusive-low: gross exactly at the threshold
/// pays the low rate; one cent above pays the high rate.
///
/// # Example
///
/// ```
/// use payroll_engine::config::StatutoryConfig;
/// use payroll_engine::statutory::calculate_csg;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = StatutoryConfig::mauritius_2025();
/// let csg = calculate_csg(Decimal::from(60_000), &config);
/// assert_eq!(csg.employee, Decimal::from_str("1800.00").unwrap()); // 3%
/// assert_eq!(csg.employer, Decimal::from_str("3600.00").unwrap()); // 6%
/// ```
pub fn calculate_csg(gross_salary: Decimal, config: &StatutoryConfig) -> CsgContribution {
    let below = gross_salary <= config.csg.threshold;
    let employee_rate = if below {
        config.csg.employee_low
    } else {
        config.csg.employee_high
    };
    let employer_rate = if below {
        config.csg.employer_low
    } else {
        config.csg.employer_high
    };

    CsgContribution {
        employee: round_money(gross_salary * employee_rate),
        employer: round_money(gross_salary * employer_rate),
        employee_rate,
        employer_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_low_tier_below_threshold() {
        let config = StatutoryConfig::mauritius_2025();
        let csg = calculate_csg(dec("30000"), &config);
        assert_eq!(csg.employee, dec("450.00")); // 1.5%
        assert_eq!(csg.employer, dec("900.00")); // 3%
        assert_eq!(csg.employee_rate, dec("0.015"));
    }

    #[test]
    fn test_threshold_boundary_is_inclusive_low() {
        let config = StatutoryConfig::mauritius_2025();
        let at = calculate_csg(dec("50000"), &config);
        assert_eq!(at.employee, dec("750.00")); // 1.5% of 50,000
        assert_eq!(at.employee_rate, dec("0.015"));

        let above = calculate_csg(dec("50000.01"), &config);
        assert_eq!(above.employee_rate, dec("0.03"));
        assert_eq!(above.employee, dec("1500.00")); // 3% of 50,000.01 rounded
    }

    #[test]
    fn test_high_tier_above_threshold() {
        let config = StatutoryConfig::mauritius_2025();
        let csg = calculate_csg(dec("60000"), &config);
        assert_eq!(csg.employee, dec("1800.00"));
        assert_eq!(csg.employer, dec("3600.00"));
    }

    #[test]
    fn test_zero_gross() {
        let config = StatutoryConfig::mauritius_2025();
        let csg = calculate_csg(Decimal::ZERO, &config);
        assert_eq!(csg.employee, dec("0.00"));
        assert_eq!(csg.employer, dec("0.00"));
    }

    #[test]
    fn test_applies_to_gross_not_basic() {
        // Tier selection uses the value passed in; the caller passes gross.
        let config = StatutoryConfig::mauritius_2025();
        let csg = calculate_csg(dec("50000.50"), &config);
        assert_eq!(csg.employee_rate, dec("0.03"));
    }
}
