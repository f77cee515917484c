//! Configuration types for statutory payroll rates.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the built-in
//! Mauritius 2025 table.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

/// CSG (Contribution Sociale Généralisée) rate table.
///
/// CSG is a progressive two-tier contribution on monthly **gross** salary.
/// The threshold boundary is inclusive-low: a gross exactly at the threshold
/// pays the low rate.
#[derive(Debug, Clone, Deserialize)]
pub struct CsgRates {
    /// Monthly gross threshold separating the two tiers.
    pub threshold: Decimal,
    /// Employee rate at or below the threshold.
    pub employee_low: Decimal,
    /// Employee rate above the threshold.
    pub employee_high: Decimal,
    /// Employer rate at or below the threshold.
    pub employer_low: Decimal,
    /// Employer rate above the threshold.
    pub employer_high: Decimal,
}

/// NSF (National Savings Fund) flat rates on **basic** salary.
#[derive(Debug, Clone, Deserialize)]
pub struct NsfRates {
    /// Employee contribution rate.
    pub employee: Decimal,
    /// Employer contribution rate.
    pub employer: Decimal,
}

/// NPF (National Pension Fund) legacy flat rates on **basic** salary.
///
/// Only applies to employees hired before the PRGF cutover date.
#[derive(Debug, Clone, Deserialize)]
pub struct NpfRates {
    /// Employee contribution rate.
    pub employee: Decimal,
    /// Employer contribution rate.
    pub employer: Decimal,
}

/// One PRGF tenure tier.
#[derive(Debug, Clone, Deserialize)]
pub struct PrgfTier {
    /// Upper bound on whole years of service for this tier, inclusive.
    /// `None` means the tier is open-ended.
    pub max_years: Option<u32>,
    /// Employer contribution rate on gross salary.
    pub rate: Decimal,
}

/// PRGF (Portable Retirement Gratuity Fund) configuration.
///
/// Employer-only, tenure-tiered, on **gross** salary, and only for
/// employees hired on or after the cutover date. Pre-cutover hires stay on
/// the legacy NPF scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct PrgfRates {
    /// First hire date the scheme applies to (2020-01-01 in Mauritius).
    pub cutover_date: NaiveDate,
    /// Tenure tiers, ordered by ascending `max_years` with the open-ended
    /// tier last.
    pub tiers: Vec<PrgfTier>,
}

/// One marginal PAYE bracket.
#[derive(Debug, Clone, Deserialize)]
pub struct PayeBracket {
    /// Upper bound of annual taxable income for this bracket, inclusive.
    /// `None` means the bracket is open-ended.
    pub up_to: Option<Decimal>,
    /// Marginal rate applied to income falling in this bracket.
    pub rate: Decimal,
}

/// PAYE income-tax schedule over **annualized** taxable income.
#[derive(Debug, Clone, Deserialize)]
pub struct PayeSchedule {
    /// Annual tax-free threshold.
    pub annual_threshold: Decimal,
    /// Marginal brackets above the threshold, ordered ascending with the
    /// open-ended bracket last.
    pub brackets: Vec<PayeBracket>,
}

/// The complete statutory rate table for one effective year.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryConfig {
    /// The statutory year these rates are effective for.
    pub effective_year: i32,
    /// CSG rate table.
    pub csg: CsgRates,
    /// NSF rates.
    pub nsf: NsfRates,
    /// Legacy NPF rates.
    pub npf: NpfRates,
    /// PRGF configuration.
    pub prgf: PrgfRates,
    /// Employer-only training levy rate on basic salary.
    pub training_levy_rate: Decimal,
    /// PAYE schedule.
    pub paye: PayeSchedule,
    /// Divisor turning a monthly basic salary into an hourly rate (173.33).
    pub standard_monthly_hours: Decimal,
    /// Multiplier for public-holiday hours (2.0).
    pub holiday_pay_multiplier: Decimal,
    /// Divisor turning a monthly basic salary into a daily rate for
    /// gratuity and leave encashment (26 working days per month).
    pub monthly_working_day_divisor: Decimal,
}

impl StatutoryConfig {
    /// The built-in Mauritius 2025 statutory table.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::config::StatutoryConfig;
    /// use rust_decimal::Decimal;
    ///
    /// let config = StatutoryConfig::mauritius_2025();
    /// assert_eq!(config.csg.threshold, Decimal::from(50_000));
    /// assert_eq!(config.paye.brackets.len(), 3);
    /// ```
    pub fn mauritius_2025() -> Self {
        Self {
            effective_year: 2025,
            csg: CsgRates {
                threshold: Decimal::from(50_000),
                employee_low: Decimal::new(15, 3),  // 1.5%
                employee_high: Decimal::new(3, 2),  // 3%
                employer_low: Decimal::new(3, 2),   // 3%
                employer_high: Decimal::new(6, 2),  // 6%
            },
            nsf: NsfRates {
                employee: Decimal::new(1, 2),  // 1%
                employer: Decimal::new(25, 3), // 2.5%
            },
            npf: NpfRates {
                employee: Decimal::new(3, 2), // 3%
                employer: Decimal::new(6, 2), // 6%
            },
            prgf: PrgfRates {
                cutover_date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
                tiers: vec![
                    PrgfTier {
                        max_years: Some(5),
                        rate: Decimal::new(43, 3), // 4.3%
                    },
                    PrgfTier {
                        max_years: Some(10),
                        rate: Decimal::new(50, 3), // 5.0%
                    },
                    PrgfTier {
                        max_years: None,
                        rate: Decimal::new(68, 3), // 6.8%
                    },
                ],
            },
            training_levy_rate: Decimal::new(15, 3), // 1.5%
            paye: PayeSchedule {
                annual_threshold: Decimal::from(390_000),
                brackets: vec![
                    PayeBracket {
                        up_to: Some(Decimal::from(550_000)),
                        rate: Decimal::new(10, 2), // 10%
                    },
                    PayeBracket {
                        up_to: Some(Decimal::from(650_000)),
                        rate: Decimal::new(12, 2), // 12%
                    },
                    PayeBracket {
                        up_to: None,
                        rate: Decimal::new(20, 2), // 20%
                    },
                ],
            },
            standard_monthly_hours: Decimal::new(17333, 2), // 173.33
            holiday_pay_multiplier: Decimal::from(2),
            monthly_working_day_divisor: Decimal::from(26),
        }
    }

    /// The PRGF rate for a post-cutover hire with the given whole years of
    /// service.
    pub fn prgf_rate_for(&self, years_of_service: u32) -> Decimal {
        for tier in &self.prgf.tiers {
            match tier.max_years {
                Some(max) if years_of_service <= max => return tier.rate,
                Some(_) => continue,
                None => return tier.rate,
            }
        }
        Decimal::ZERO
    }
}
