//! PAYE (Pay-As-You-Earn) income tax calculation.
//!
//! PAYE is assessed on **annualized** taxable income: monthly gross times
//! twelve, less the annualized employee statutory deductions. Income at or
//! below the tax-free threshold pays nothing. Above it, tax accumulates
//! through full marginal brackets — each bracket's rate applies only to the
//! slice of income falling inside that bracket, never flat on the total.
//! The annual figure divided by twelve gives the monthly withholding.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::StatutoryConfig;

use super::round_money;

/// The result of a PAYE assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeAssessment {
    /// Annual taxable income the assessment was made on.
    pub taxable_income: Decimal,
    /// Total annual tax across all brackets.
    pub annual_tax: Decimal,
    /// Monthly withholding (annual tax / 12, rounded).
    pub monthly_tax: Decimal,
    /// Display label for the top bracket reached, e.g.
    /// "12% (MUR 550001 - 650000)".
    pub bracket: String,
}

/// Assesses PAYE from annual gross salary and annual statutory deductions.
///
/// # Example
///
/// ```
/// use payroll_engine::config::StatutoryConfig;
/// use payroll_engine::statutory::calculate_paye;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = StatutoryConfig::mauritius_2025();
/// // Taxable 691,200 spans all three brackets:
/// // 160,000 @ 10% + 100,000 @ 12% + 41,200 @ 20% = 36,240 / year
/// let paye = calculate_paye(
///     Decimal::from(720_000),
///     Decimal::from(28_800),
///     &config,
/// );
/// assert_eq!(paye.annual_tax, Decimal::from_str("36240.00").unwrap());
/// assert_eq!(paye.monthly_tax, Decimal::from_str("3020.00").unwrap());
/// ```
pub fn calculate_paye(
    annual_gross: Decimal,
    annual_deductions: Decimal,
    config: &StatutoryConfig,
) -> PayeAssessment {
    let taxable_income = annual_gross - annual_deductions;
    let threshold = config.paye.annual_threshold;

    if taxable_income <= threshold {
        return PayeAssessment {
            taxable_income,
            annual_tax: Decimal::ZERO,
            monthly_tax: Decimal::ZERO,
            bracket: format!("0% (Below MUR {})", threshold),
        };
    }

    let mut annual_tax = Decimal::ZERO;
    let mut lower = threshold;
    let mut bracket = String::new();

    for band in &config.paye.brackets {
        let percent = band.rate * Decimal::from(100);
        match band.up_to {
            Some(limit) if taxable_income > limit => {
                annual_tax += (limit - lower) * band.rate;
                lower = limit;
            }
            Some(limit) => {
                annual_tax += (taxable_income - lower) * band.rate;
                bracket = format!(
                    "{}% (MUR {} - {})",
                    percent.normalize(),
                    (lower + Decimal::ONE).normalize(),
                    limit.normalize()
                );
                break;
            }
            None => {
                annual_tax += (taxable_income - lower) * band.rate;
                bracket = format!("{}% (Above MUR {})", percent.normalize(), lower.normalize());
                break;
            }
        }
    }

    let annual_tax = round_money(annual_tax);
    PayeAssessment {
        taxable_income,
        annual_tax,
        monthly_tax: round_money(annual_tax / Decimal::from(12)),
        bracket,
    }
}
