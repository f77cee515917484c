//! Persistence and upstream-data seams.
//!
//! The engine never talks to a database or an HR system directly. Every
//! read of employee, attendance, leave or salary-component data, and every
//! write of payslips and cycles, goes through one of the traits in this
//! module. Implementations decide where the data actually lives; the
//! `InMemory*` versions re-exported here back the test suite and small
//! deployments.
//!
//! Every call takes an explicit [`TenantContext`]. Tenancy is never
//! ambient: there is no thread-local or global "current company", so a
//! cycle processed for one tenant cannot read another tenant's data by
//! accident.

mod memory;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AttendanceFact, EmployeeSnapshot, LeaveFact, PayPeriod, PayrollCycle, Payslip,
    SalaryComponents, TimesheetFact,
};

pub use memory::{
    InMemoryAttendanceSource, InMemoryCycleStore, InMemoryEmployeeDirectory, InMemoryLeaveSource,
    InMemoryPayslipStore, InMemorySalaryComponentSource,
};

/// The tenant a payroll operation runs for.
///
/// Passed explicitly through every repository call and orchestrator
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TenantContext {
    /// The company/tenant identifier.
    pub tenant_id: Uuid,
}

impl TenantContext {
    /// Creates a context for the given tenant.
    pub fn new(tenant_id: Uuid) -> Self {
        Self { tenant_id }
    }
}

/// Read access to employee master data.
pub trait EmployeeDirectory {
    /// Employees active for payroll in the given period, as point-in-time
    /// snapshots.
    fn active_employees(
        &self,
        ctx: &TenantContext,
        period: PayPeriod,
    ) -> EngineResult<Vec<EmployeeSnapshot>>;

    /// A single employee snapshot by id.
    fn find_employee(&self, ctx: &TenantContext, id: Uuid) -> EngineResult<EmployeeSnapshot>;
}

/// Read access to approved attendance records and timesheets.
pub trait AttendanceSource {
    /// Approved attendance records for one employee inside the period.
    fn attendance_for(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> EngineResult<Vec<AttendanceFact>>;

    /// Approved timesheets for one employee inside the period.
    fn timesheets_for(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> EngineResult<Vec<TimesheetFact>>;
}

/// Read access to approved leave and leave balances.
pub trait LeaveSource {
    /// Approved leave taken by one employee inside the period.
    fn leave_for(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> EngineResult<Vec<LeaveFact>>;

    /// Remaining encashable leave balance in days as of the given date.
    fn leave_balance(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        as_of: NaiveDate,
    ) -> EngineResult<Decimal>;
}

/// Read access to employer-defined salary components.
pub trait SalaryComponentSource {
    /// Allowance and deduction totals for one employee and period.
    fn components_for(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> EngineResult<SalaryComponents>;
}

/// Storage for computed payslips.
pub trait PayslipStore {
    /// Atomically replaces the payslip set of a cycle with a new batch.
    ///
    /// Reprocessing a cycle must never leave payslips from the previous
    /// run behind.
    fn replace_for_cycle(
        &self,
        ctx: &TenantContext,
        cycle_id: Uuid,
        payslips: Vec<Payslip>,
    ) -> EngineResult<()>;

    /// All payslips of a cycle.
    fn for_cycle(&self, ctx: &TenantContext, cycle_id: Uuid) -> EngineResult<Vec<Payslip>>;

    /// An employee's payslip history, oldest period first, optionally
    /// restricted to one calendar year.
    fn for_employee(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        year: Option<i32>,
    ) -> EngineResult<Vec<Payslip>>;

    /// A single payslip by id.
    fn find(&self, ctx: &TenantContext, payslip_id: Uuid) -> EngineResult<Payslip>;

    /// Overwrites a single stored payslip in place.
    fn update(&self, ctx: &TenantContext, payslip: Payslip) -> EngineResult<()>;

    /// Sum of gross salaries across an employee's stored payslips for a
    /// calendar year. Feeds the 13th-month bonus.
    fn gross_for_employee_year(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        year: i32,
    ) -> EngineResult<Decimal>;
}

/// Storage for payroll cycles.
pub trait CycleStore {
    /// Inserts a newly created cycle.
    fn insert(&self, ctx: &TenantContext, cycle: PayrollCycle) -> EngineResult<()>;

    /// A cycle by id.
    fn find(&self, ctx: &TenantContext, cycle_id: Uuid) -> EngineResult<PayrollCycle>;

    /// The non-cancelled cycle covering a period, if one exists.
    fn find_by_period(
        &self,
        ctx: &TenantContext,
        period: PayPeriod,
    ) -> EngineResult<Option<PayrollCycle>>;

    /// Overwrites a stored cycle in place.
    fn update(&self, ctx: &TenantContext, cycle: PayrollCycle) -> EngineResult<()>;

    /// All cycles of the tenant, newest period first.
    fn list(&self, ctx: &TenantContext) -> EngineResult<Vec<PayrollCycle>>;
}
