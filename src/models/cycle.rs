//! Payroll cycle model and status enum.
//!
//! A [`PayrollCycle`] is one month/year payroll run. Its aggregate totals are
//! always recomputed from the live payslip set, never incrementally
//! maintained, so they can never drift from the payslip detail.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{PayPeriod, Payslip};

/// Lifecycle state of a payroll cycle.
///
/// Legal transitions:
/// `Draft -> Processing -> Calculated -> Approved -> Paid`, with
/// `Draft -> Cancelled` and `Calculated -> Draft` (rejection) as side
/// transitions. `Paid` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    /// Created, not yet processed. The only state processing can start from.
    Draft,
    /// Batch computation in flight.
    Processing,
    /// All payslips generated and totals summed; awaiting approval.
    Calculated,
    /// Approved with a payment date; awaiting payment.
    Approved,
    /// Paid out. Terminal.
    Paid,
    /// Abandoned before processing. Terminal.
    Cancelled,
}

impl CycleStatus {
    /// Whether no further transitions are allowed from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CycleStatus::Paid | CycleStatus::Cancelled)
    }
}

impl std::fmt::Display for CycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CycleStatus::Draft => "Draft",
            CycleStatus::Processing => "Processing",
            CycleStatus::Calculated => "Calculated",
            CycleStatus::Approved => "Approved",
            CycleStatus::Paid => "Paid",
            CycleStatus::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}

/// Aggregate totals for a cycle, summed from its payslips.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleTotals {
    /// Sum of payslip gross salaries.
    pub gross: Decimal,
    /// Sum of payslip total deductions.
    pub deductions: Decimal,
    /// Sum of payslip net salaries.
    pub net: Decimal,
    /// Sum of overtime pay.
    pub overtime_pay: Decimal,
    /// Sum of employee NPF contributions.
    pub npf_employee: Decimal,
    /// Sum of employer NPF contributions.
    pub npf_employer: Decimal,
    /// Sum of employee NSF contributions.
    pub nsf_employee: Decimal,
    /// Sum of employer NSF contributions.
    pub nsf_employer: Decimal,
    /// Sum of employee CSG contributions.
    pub csg_employee: Decimal,
    /// Sum of employer CSG contributions.
    pub csg_employer: Decimal,
    /// Sum of PRGF contributions.
    pub prgf: Decimal,
    /// Sum of training levies.
    pub training_levy: Decimal,
    /// Sum of PAYE withheld.
    pub paye: Decimal,
}

impl CycleTotals {
    /// Recomputes totals as the arithmetic sum of the given payslips.
    pub fn from_payslips(payslips: &[Payslip]) -> Self {
        let mut totals = CycleTotals::default();
        for slip in payslips {
            totals.gross += slip.total_gross;
            totals.deductions += slip.total_deductions;
            totals.net += slip.net_salary;
            totals.overtime_pay += slip.overtime_pay;
            totals.npf_employee += slip.statutory.npf_employee;
            totals.npf_employer += slip.statutory.npf_employer;
            totals.nsf_employee += slip.statutory.nsf_employee;
            totals.nsf_employer += slip.statutory.nsf_employer;
            totals.csg_employee += slip.statutory.csg_employee;
            totals.csg_employer += slip.statutory.csg_employer;
            totals.prgf += slip.statutory.prgf;
            totals.training_levy += slip.statutory.training_levy;
            totals.paye += slip.statutory.paye;
        }
        totals
    }
}

/// One month/year payroll run, the unit of approval and payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollCycle {
    /// Unique identifier.
    pub id: Uuid,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Current lifecycle state.
    pub status: CycleStatus,
    /// Aggregate totals, recomputed from the payslip set on every
    /// processing run.
    pub totals: CycleTotals,
    /// Number of payslips in the cycle.
    pub employee_count: usize,
    /// Who triggered the last processing run.
    pub processed_by: Option<String>,
    /// When the last processing run completed.
    pub processed_at: Option<DateTime<Utc>>,
    /// Who approved the cycle.
    pub approved_by: Option<String>,
    /// When the cycle was approved.
    pub approved_at: Option<DateTime<Utc>>,
    /// Scheduled or actual payment date.
    pub payment_date: Option<NaiveDate>,
    /// Free-form notes; rejection reasons land here.
    pub notes: Option<String>,
    /// Who created the cycle.
    pub created_by: String,
    /// When the cycle was created.
    pub created_at: DateTime<Utc>,
    /// Who last updated the cycle.
    pub updated_by: Option<String>,
    /// When the cycle was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

impl PayrollCycle {
    /// Creates a new draft cycle for the given period.
    pub fn new(period: PayPeriod, created_by: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            month: period.month,
            year: period.year,
            status: CycleStatus::Draft,
            totals: CycleTotals::default(),
            employee_count: 0,
            processed_by: None,
            processed_at: None,
            approved_by: None,
            approved_at: None,
            payment_date: None,
            notes: None,
            created_by: created_by.to_string(),
            created_at: Utc::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    /// The pay period this cycle covers.
    pub fn period(&self) -> PayPeriod {
        // Month was validated when the cycle was created.
        PayPeriod {
            month: self.month,
            year: self.year,
        }
    }
}
