//! Statutory contribution calculators.
//!
//! Pure, stateless, rate-table-driven functions for each Mauritius
//! contribution: CSG, NSF, NPF (legacy), PRGF, Training Levy and PAYE.
//! Every function is total for non-negative salary inputs; negative inputs
//! are a caller error, not a calculator concern. All monetary outputs are
//! rounded to 2 decimal places, half away from zero.

mod csg;
mod npf;
mod nsf;
mod paye;
mod prgf;
mod training_levy;

use rust_decimal::{Decimal, RoundingStrategy};

pub use csg::{CsgContribution, calculate_csg};
pub use npf::{NpfContribution, calculate_npf};
pub use nsf::{NsfContribution, calculate_nsf};
pub use paye::{PayeAssessment, calculate_paye};
pub use prgf::{PrgfContribution, calculate_prgf};
pub use training_levy::calculate_training_levy;

/// Rounds a monetary amount to 2 decimal places, half away from zero.
///
/// Statutory remittance figures are audited; every contribution amount in
/// this crate passes through this single rounding point.
///
/// # Example
///
/// ```
/// use payroll_engine::statutory::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1.005").unwrap();
/// assert_eq!(round_money(amount), Decimal::from_str("1.01").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
