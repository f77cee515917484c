//! The payslip assembler.
//!
//! Composes the earnings aggregator and the six statutory calculators into
//! one complete [`Payslip`] for an employee and period. The assembly order
//! matters: gross must be settled first because CSG and PRGF are assessed
//! on gross, and PAYE is assessed on annualized gross less the annualized
//! employee statutory deductions.

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::config::StatutoryConfig;
use crate::earnings::{EarningsExtras, aggregate_earnings};
use crate::models::{
    AttendanceFact, EmployeeSnapshot, LeaveFact, PayPeriod, PaymentStatus, Payslip,
    SalaryComponents, StatutoryBreakdown, TimesheetFact,
};
use crate::statutory::{
    calculate_csg, calculate_npf, calculate_nsf, calculate_paye, calculate_prgf,
    calculate_training_levy,
};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Period facts for one employee, gathered by the orchestrator from the
/// upstream collaborators.
#[derive(Debug, Clone, Default)]
pub struct PayslipInputs {
    /// Approved attendance records inside the period.
    pub attendance: Vec<AttendanceFact>,
    /// Approved timesheets inside the period.
    pub timesheets: Vec<TimesheetFact>,
    /// Approved leave inside the period.
    pub leave: Vec<LeaveFact>,
    /// Salary component totals.
    pub components: SalaryComponents,
    /// One-off extras (leave encashment, 13th-month bonus).
    pub extras: EarningsExtras,
}

/// Assembles a complete payslip for one employee and period.
///
/// Statutory sequencing:
///
/// 1. aggregate earnings into a gross salary;
/// 2. CSG on gross, NSF and NPF on basic, with NPF gated on the hire-date
///    cutover;
/// 3. PAYE on `gross * 12` less the annualized employee CSG, NSF and NPF;
/// 4. PRGF (post-cutover hires, tenure-tiered) and training levy on the
///    employer side;
/// 5. total deductions = employee statutory + other deductions + the
///    unpaid-leave deduction; net = gross - total deductions.
pub fn assemble_payslip(
    cycle_id: Uuid,
    period: PayPeriod,
    employee: &EmployeeSnapshot,
    inputs: &PayslipInputs,
    config: &StatutoryConfig,
) -> Payslip {
    let statement = aggregate_earnings(
        employee,
        period,
        &inputs.attendance,
        &inputs.timesheets,
        &inputs.leave,
        &inputs.components,
        inputs.extras,
        config,
    );
    let gross = statement.gross_salary;
    let basic = employee.basic_salary;

    let csg = calculate_csg(gross, config);
    let nsf = calculate_nsf(basic, config);
    let npf = calculate_npf(basic, employee.hire_date, config);

    let monthly_statutory = csg.employee + nsf.employee + npf.employee;
    let paye = calculate_paye(
        gross * MONTHS_PER_YEAR,
        monthly_statutory * MONTHS_PER_YEAR,
        config,
    );

    let years = employee.years_of_service(period.last_day());
    let prgf = calculate_prgf(gross, employee.hire_date, years, config);
    let training_levy = calculate_training_levy(basic, config);

    let statutory = StatutoryBreakdown {
        npf_employee: npf.employee,
        nsf_employee: nsf.employee,
        csg_employee: csg.employee,
        paye: paye.monthly_tax,
        npf_employer: npf.employer,
        nsf_employer: nsf.employer,
        csg_employer: csg.employer,
        prgf: prgf.employer,
        training_levy,
    };

    let total_deductions =
        statutory.employee_total() + statement.other_deductions + statement.leave_deduction;
    let net_salary = gross - total_deductions;

    debug!(
        employee_code = %employee.employee_code,
        period = %period,
        %gross,
        %net_salary,
        "assembled payslip"
    );

    Payslip {
        id: Uuid::new_v4(),
        cycle_id,
        employee_id: employee.id,
        month: period.month,
        year: period.year,
        payslip_number: Payslip::number_for(period, &employee.employee_code),

        employee_code: employee.employee_code.clone(),
        employee_name: employee.full_name(),
        department: employee.department.clone(),
        bank_name: employee.bank_name.clone(),
        bank_account: employee.bank_account.clone(),

        basic_salary: basic,
        allowances: statement.allowances,
        overtime_hours: statement.overtime_hours,
        overtime_pay: statement.overtime_pay,
        holiday_pay: statement.holiday_pay,
        leave_encashment: statement.leave_encashment,
        thirteenth_month_bonus: statement.thirteenth_month_bonus,
        total_gross: gross,

        working_days: statement.working_days,
        days_worked: statement.days_worked,
        paid_leave_days: statement.paid_leave_days,
        unpaid_leave_days: statement.unpaid_leave_days,
        leave_deduction: statement.leave_deduction,

        statutory,

        other_deductions: statement.other_deductions,
        total_deductions,
        net_salary,

        payment_status: PaymentStatus::Pending,
        paid_at: None,
        created_at: Utc::now(),
    }
}
