//! Training levy calculation.
//!
//! Employer-only levy funding national training schemes: a flat 1.5% of
//! **basic** salary.

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;

use super::round_money;

/// Calculates the employer training levy on a monthly basic salary.
pub fn calculate_training_levy(basic_salary: Decimal, config: &StatutoryConfig) -> Decimal {
    round_money(basic_salary * config.training_levy_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_training_levy_rate() {
        let config = StatutoryConfig::mauritius_2025();
        assert_eq!(calculate_training_levy(dec("60000"), &config), dec("900.00"));
    }

    #[test]
    fn test_training_levy_rounding() {
        let config = StatutoryConfig::mauritius_2025();
        // 1.5% of 33,333.33 = 499.99995 -> 500.00
        assert_eq!(
            calculate_training_levy(dec("33333.33"), &config),
            dec("500.00")
        );
    }

    #[test]
    fn test_training_levy_zero_basic() {
        let config = StatutoryConfig::mauritius_2025();
        assert_eq!(
            calculate_training_levy(Decimal::ZERO, &config),
            dec("0.00")
        );
    }
}
