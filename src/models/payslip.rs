//! Payslip model.
//!
//! A [`Payslip`] is the per-employee, per-cycle computed compensation record.
//! It is produced only by the payslip assembler, carries a full earnings,
//! attendance and statutory breakdown, and is never mutated after payment
//! apart from the payment-status flip itself.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// Payment state of a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Computed but not yet paid.
    Pending,
    /// Paid out; the payslip is frozen.
    Paid,
}

/// Statutory contribution breakdown for one payslip.
///
/// Employee-side amounts are withheld from net pay; employer-side amounts
/// are informational remittance figures and are never deducted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatutoryBreakdown {
    /// Employee NPF contribution (legacy scheme, pre-2020 hires).
    pub npf_employee: Decimal,
    /// Employee NSF contribution.
    pub nsf_employee: Decimal,
    /// Employee CSG contribution.
    pub csg_employee: Decimal,
    /// Monthly PAYE income tax withheld.
    pub paye: Decimal,
    /// Employer NPF contribution (legacy scheme, pre-2020 hires).
    pub npf_employer: Decimal,
    /// Employer NSF contribution.
    pub nsf_employer: Decimal,
    /// Employer CSG contribution.
    pub csg_employer: Decimal,
    /// Employer PRGF contribution (post-2020 hires).
    pub prgf: Decimal,
    /// Employer training levy.
    pub training_levy: Decimal,
}

impl StatutoryBreakdown {
    /// Total withheld from the employee's pay.
    pub fn employee_total(&self) -> Decimal {
        self.npf_employee + self.nsf_employee + self.csg_employee + self.paye
    }

    /// Total employer remittance on top of gross pay.
    pub fn employer_total(&self) -> Decimal {
        self.npf_employer + self.nsf_employer + self.csg_employer + self.prgf + self.training_levy
    }
}

/// The per-employee, per-cycle compensation record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier.
    pub id: Uuid,
    /// The payroll cycle this payslip belongs to.
    pub cycle_id: Uuid,
    /// The employee this payslip is for.
    pub employee_id: Uuid,
    /// Month, denormalized from the cycle.
    pub month: u32,
    /// Year, denormalized from the cycle.
    pub year: i32,
    /// Immutable payslip number, `PS-{year}-{month:02}-{employeeCode}`.
    pub payslip_number: String,

    /// Employee code at calculation time.
    pub employee_code: String,
    /// Employee display name at calculation time.
    pub employee_name: String,
    /// Department at calculation time.
    pub department: Option<String>,
    /// Bank name snapshot for the transfer file.
    pub bank_name: Option<String>,
    /// Bank account snapshot for the transfer file.
    pub bank_account: Option<String>,

    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Employer-defined allowances from salary components.
    pub allowances: Decimal,
    /// Total overtime hours paid.
    pub overtime_hours: Decimal,
    /// Overtime pay at per-record sector multipliers.
    pub overtime_pay: Decimal,
    /// Public-holiday pay.
    pub holiday_pay: Decimal,
    /// Leave encashment paid out this period.
    pub leave_encashment: Decimal,
    /// Thirteenth-month bonus paid out this period.
    pub thirteenth_month_bonus: Decimal,
    /// Gross salary after the unpaid-leave adjustment.
    pub total_gross: Decimal,

    /// Working days in the period.
    pub working_days: u32,
    /// Days the employee was actually present.
    pub days_worked: u32,
    /// Approved paid leave days.
    pub paid_leave_days: Decimal,
    /// Approved unpaid leave days.
    pub unpaid_leave_days: Decimal,
    /// Deduction for unpaid leave.
    pub leave_deduction: Decimal,

    /// Statutory contribution breakdown.
    pub statutory: StatutoryBreakdown,

    /// Employer-defined deductions from salary components.
    pub other_deductions: Decimal,
    /// Employee statutory withholdings + other deductions + the
    /// unpaid-leave deduction, per the statutory payslip layout.
    pub total_deductions: Decimal,
    /// `total_gross - total_deductions`, exactly.
    pub net_salary: Decimal,

    /// Payment state.
    pub payment_status: PaymentStatus,
    /// When the payslip was paid, if it has been.
    pub paid_at: Option<DateTime<Utc>>,
    /// When the payslip was computed.
    pub created_at: DateTime<Utc>,
}

impl Payslip {
    /// Builds the immutable payslip number for a period and employee code.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::{PayPeriod, Payslip};
    ///
    /// let period = PayPeriod::new(3, 2026).unwrap();
    /// assert_eq!(Payslip::number_for(period, "EMP042"), "PS-2026-03-EMP042");
    /// ```
    pub fn number_for(period: PayPeriod, employee_code: &str) -> String {
        format!("PS-{}-{:02}-{}", period.year, period.month, employee_code)
    }

    /// Whether this payslip has been paid.
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// Flips the payslip to paid with the given timestamp.
    pub(crate) fn mark_paid(&mut self, at: DateTime<Utc>) {
        self.payment_status = PaymentStatus::Paid;
        self.paid_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payslip_number_pads_month() {
        let period = PayPeriod::new(7, 2025).unwrap();
        assert_eq!(Payslip::number_for(period, "EMP007"), "PS-2025-07-EMP007");
    }

    #[test]
    fn test_payslip_number_double_digit_month() {
        let period = PayPeriod::new(11, 2025).unwrap();
        assert_eq!(Payslip::number_for(period, "EMP007"), "PS-2025-11-EMP007");
    }

    #[test]
    fn test_statutory_employee_total() {
        let breakdown = StatutoryBreakdown {
            npf_employee: Decimal::new(135000, 2),
            nsf_employee: Decimal::new(45000, 2),
            csg_employee: Decimal::new(67500, 2),
            paye: Decimal::new(250000, 2),
            npf_employer: Decimal::new(270000, 2),
            nsf_employer: Decimal::new(112500, 2),
            csg_employer: Decimal::new(135000, 2),
            prgf: Decimal::ZERO,
            training_levy: Decimal::new(67500, 2),
        };
        assert_eq!(breakdown.employee_total(), Decimal::new(497500, 2));
        assert_eq!(breakdown.employer_total(), Decimal::new(585000, 2));
    }

    #[test]
    fn test_payment_status_serialization() {
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"paid\""
        );
    }
}
