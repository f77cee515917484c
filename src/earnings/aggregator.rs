//! The earnings aggregator.
//!
//! Gross pay is built from the monthly basic salary plus everything the
//! period facts add on top:
//!
//! ```text
//! gross = basic + allowances + overtime pay + holiday pay
//!       + leave encashment + 13th-month bonus - unpaid-leave deduction
//! ```
//!
//! The hourly rate is the basic salary divided by the standard monthly
//! hours (173.33). Overtime is priced per attendance record because the
//! multiplier comes from sector rules and can differ day to day; records
//! carrying overtime hours but no multiplier earn nothing. Public-holiday
//! hours come from timesheets and are paid at the configured multiplier.
//! Unpaid leave is deducted at a daily rate of basic divided by the
//! period's working days (Sundays excluded).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::StatutoryConfig;
use crate::models::{
    AttendanceFact, AttendanceStatus, EmployeeSnapshot, LeaveFact, PayPeriod, SalaryComponents,
    TimesheetFact,
};
use crate::statutory::round_money;

/// One-off earnings routed into a single period's gross.
///
/// Leave encashment and the 13th-month bonus are computed by the benefits
/// module when the cycle requests them; for an ordinary monthly run both
/// are zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsExtras {
    /// Payout for surrendered leave balance.
    pub leave_encashment: Decimal,
    /// End-of-year statutory bonus.
    pub thirteenth_month_bonus: Decimal,
}

/// Aggregated earnings for one employee and one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsStatement {
    /// Hourly rate derived from basic salary (unrounded).
    pub hourly_rate: Decimal,
    /// Total regular hours across attendance records.
    pub regular_hours: Decimal,
    /// Regular hours priced at the hourly rate. Reporting figure only:
    /// the monthly basic already covers regular time, so this never
    /// enters gross.
    pub regular_pay: Decimal,
    /// Total overtime hours across attendance records, whether or not a
    /// multiplier was recorded.
    pub overtime_hours: Decimal,
    /// Overtime pay from records that carried a multiplier.
    pub overtime_pay: Decimal,
    /// Total public-holiday hours across timesheets.
    pub holiday_hours: Decimal,
    /// Holiday pay at the configured multiplier.
    pub holiday_pay: Decimal,
    /// Allowance total from salary components.
    pub allowances: Decimal,
    /// Custom deduction total from salary components. Reported here but
    /// applied at the net-salary stage, not against gross.
    pub other_deductions: Decimal,
    /// Leave encashment included in gross.
    pub leave_encashment: Decimal,
    /// 13th-month bonus included in gross.
    pub thirteenth_month_bonus: Decimal,
    /// Working days in the period (Sundays excluded).
    pub working_days: u32,
    /// Days with an attendance record other than absent.
    pub days_worked: u32,
    /// Paid leave days taken. Neither add to nor subtract from gross.
    pub paid_leave_days: Decimal,
    /// Unpaid leave days taken.
    pub unpaid_leave_days: Decimal,
    /// Deduction for unpaid leave at the period's daily rate.
    pub leave_deduction: Decimal,
    /// The gross salary statutory contributions are assessed on.
    pub gross_salary: Decimal,
}

/// Aggregates period facts into an [`EarningsStatement`].
///
/// # Example
///
/// ```
/// use payroll_engine::config::StatutoryConfig;
/// use payroll_engine::earnings::{aggregate_earnings, EarningsExtras};
/// use payroll_engine::models::{EmployeeSnapshot, PayPeriod, SalaryComponents};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let employee = EmployeeSnapshot {
///     id: Uuid::new_v4(),
///     employee_code: "EMP001".to_string(),
///     first_name: "Anita".to_string(),
///     last_name: "Ramgoolam".to_string(),
///     department: None,
///     basic_salary: Decimal::from(60_000),
///     currency: "MUR".to_string(),
///     hire_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     bank_name: None,
///     bank_account: None,
/// };
/// let period = PayPeriod::new(6, 2025).unwrap();
/// let statement = aggregate_earnings(
///     &employee,
///     period,
///     &[],
///     &[],
///     &[],
///     &SalaryComponents::default(),
///     EarningsExtras::default(),
///     &StatutoryConfig::mauritius_2025(),
/// );
/// // No facts at all: gross is exactly the basic salary.
/// assert_eq!(statement.gross_salary, Decimal::from(60_000));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn aggregate_earnings(
    employee: &EmployeeSnapshot,
    period: PayPeriod,
    attendance: &[AttendanceFact],
    timesheets: &[TimesheetFact],
    leave: &[LeaveFact],
    components: &SalaryComponents,
    extras: EarningsExtras,
    config: &StatutoryConfig,
) -> EarningsStatement {
    let basic = employee.basic_salary;
    let hourly_rate = basic / config.standard_monthly_hours;

    let mut regular_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;
    let mut overtime_pay = Decimal::ZERO;
    let mut days_worked = 0u32;
    for fact in attendance {
        regular_hours += fact.regular_hours;
        overtime_hours += fact.overtime_hours;
        if let Some(multiplier) = fact.overtime_multiplier {
            overtime_pay += fact.overtime_hours * hourly_rate * multiplier;
        }
        if fact.status != AttendanceStatus::Absent {
            days_worked += 1;
        }
    }
    let overtime_pay = round_money(overtime_pay);
    let regular_pay = round_money(regular_hours * hourly_rate);

    let holiday_hours: Decimal = timesheets.iter().map(|t| t.holiday_hours).sum();
    let holiday_pay = round_money(holiday_hours * hourly_rate * config.holiday_pay_multiplier);

    let mut paid_leave_days = Decimal::ZERO;
    let mut unpaid_leave_days = Decimal::ZERO;
    for record in leave {
        if record.paid {
            paid_leave_days += record.days;
        } else {
            unpaid_leave_days += record.days;
        }
    }

    let working_days = period.working_days();
    let leave_deduction = if unpaid_leave_days > Decimal::ZERO && working_days > 0 {
        let daily_rate = basic / Decimal::from(working_days);
        round_money(daily_rate * unpaid_leave_days)
    } else {
        Decimal::ZERO
    };

    let gross_salary = round_money(
        basic + components.allowances + overtime_pay + holiday_pay + extras.leave_encashment
            + extras.thirteenth_month_bonus
            - leave_deduction,
    );

    debug!(
        employee_code = %employee.employee_code,
        period = %period,
        %gross_salary,
        %overtime_pay,
        %leave_deduction,
        "aggregated earnings"
    );

    EarningsStatement {
        hourly_rate,
        regular_hours,
        regular_pay,
        overtime_hours,
        overtime_pay,
        holiday_hours,
        holiday_pay,
        allowances: components.allowances,
        other_deductions: components.deductions,
        leave_encashment: extras.leave_encashment,
        thirteenth_month_bonus: extras.thirteenth_month_bonus,
        working_days,
        days_worked,
        paid_leave_days,
        unpaid_leave_days,
        leave_deduction,
        gross_salary,
    }
}
