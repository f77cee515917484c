//! In-memory repository implementations.
//!
//! Thread-safe, `Mutex`-guarded maps keyed by tenant. These back the test
//! suite and are good enough for single-process deployments; anything
//! larger implements the traits over a real store.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceFact, EmployeeSnapshot, LeaveFact, PayPeriod, PayrollCycle, Payslip,
    SalaryComponents, TimesheetFact,
};

use super::{
    AttendanceSource, CycleStore, EmployeeDirectory, LeaveSource, PayslipStore,
    SalaryComponentSource, TenantContext,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // A poisoned lock only means another thread panicked mid-write; the
    // data itself is still usable for these simple maps.
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// In-memory [`EmployeeDirectory`].
#[derive(Debug, Default)]
pub struct InMemoryEmployeeDirectory {
    employees: Mutex<HashMap<Uuid, Vec<EmployeeSnapshot>>>,
}

impl InMemoryEmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an employee for the tenant.
    pub fn add(&self, ctx: &TenantContext, employee: EmployeeSnapshot) {
        lock(&self.employees)
            .entry(ctx.tenant_id)
            .or_default()
            .push(employee);
    }
}

impl EmployeeDirectory for InMemoryEmployeeDirectory {
    fn active_employees(
        &self,
        ctx: &TenantContext,
        _period: PayPeriod,
    ) -> EngineResult<Vec<EmployeeSnapshot>> {
        Ok(lock(&self.employees)
            .get(&ctx.tenant_id)
            .cloned()
            .unwrap_or_default())
    }

    fn find_employee(&self, ctx: &TenantContext, id: Uuid) -> EngineResult<EmployeeSnapshot> {
        lock(&self.employees)
            .get(&ctx.tenant_id)
            .and_then(|list| list.iter().find(|e| e.id == id))
            .cloned()
            .ok_or(EngineError::EmployeeNotFound { id })
    }
}

/// In-memory [`AttendanceSource`].
#[derive(Debug, Default)]
pub struct InMemoryAttendanceSource {
    attendance: Mutex<HashMap<(Uuid, Uuid), Vec<AttendanceFact>>>,
    timesheets: Mutex<HashMap<(Uuid, Uuid, PayPeriod), Vec<TimesheetFact>>>,
}

impl InMemoryAttendanceSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an attendance fact for an employee.
    pub fn add_attendance(&self, ctx: &TenantContext, employee_id: Uuid, fact: AttendanceFact) {
        lock(&self.attendance)
            .entry((ctx.tenant_id, employee_id))
            .or_default()
            .push(fact);
    }

    /// Records a timesheet for an employee and period.
    pub fn add_timesheet(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
        fact: TimesheetFact,
    ) {
        lock(&self.timesheets)
            .entry((ctx.tenant_id, employee_id, period))
            .or_default()
            .push(fact);
    }
}

impl AttendanceSource for InMemoryAttendanceSource {
    fn attendance_for(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> EngineResult<Vec<AttendanceFact>> {
        Ok(lock(&self.attendance)
            .get(&(ctx.tenant_id, employee_id))
            .map(|facts| {
                facts
                    .iter()
                    .filter(|f| period.contains(f.date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn timesheets_for(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> EngineResult<Vec<TimesheetFact>> {
        Ok(lock(&self.timesheets)
            .get(&(ctx.tenant_id, employee_id, period))
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory [`LeaveSource`].
#[derive(Debug, Default)]
pub struct InMemoryLeaveSource {
    leave: Mutex<HashMap<(Uuid, Uuid, PayPeriod), Vec<LeaveFact>>>,
    balances: Mutex<HashMap<(Uuid, Uuid), Decimal>>,
}

impl InMemoryLeaveSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records approved leave for an employee and period.
    pub fn add_leave(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
        fact: LeaveFact,
    ) {
        lock(&self.leave)
            .entry((ctx.tenant_id, employee_id, period))
            .or_default()
            .push(fact);
    }

    /// Sets an employee's encashable leave balance in days.
    pub fn set_balance(&self, ctx: &TenantContext, employee_id: Uuid, days: Decimal) {
        lock(&self.balances).insert((ctx.tenant_id, employee_id), days);
    }
}

impl LeaveSource for InMemoryLeaveSource {
    fn leave_for(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> EngineResult<Vec<LeaveFact>> {
        Ok(lock(&self.leave)
            .get(&(ctx.tenant_id, employee_id, period))
            .cloned()
            .unwrap_or_default())
    }

    fn leave_balance(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        _as_of: NaiveDate,
    ) -> EngineResult<Decimal> {
        Ok(lock(&self.balances)
            .get(&(ctx.tenant_id, employee_id))
            .copied()
            .unwrap_or(Decimal::ZERO))
    }
}

/// In-memory [`SalaryComponentSource`].
#[derive(Debug, Default)]
pub struct InMemorySalaryComponentSource {
    components: Mutex<HashMap<(Uuid, Uuid, PayPeriod), SalaryComponents>>,
}

impl InMemorySalaryComponentSource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the component totals for an employee and period.
    pub fn set(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
        components: SalaryComponents,
    ) {
        lock(&self.components).insert((ctx.tenant_id, employee_id, period), components);
    }
}

impl SalaryComponentSource for InMemorySalaryComponentSource {
    fn components_for(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        period: PayPeriod,
    ) -> EngineResult<SalaryComponents> {
        Ok(lock(&self.components)
            .get(&(ctx.tenant_id, employee_id, period))
            .cloned()
            .unwrap_or_default())
    }
}

/// In-memory [`PayslipStore`].
#[derive(Debug, Default)]
pub struct InMemoryPayslipStore {
    payslips: Mutex<HashMap<Uuid, Vec<Payslip>>>,
}

impl InMemoryPayslipStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PayslipStore for InMemoryPayslipStore {
    fn replace_for_cycle(
        &self,
        ctx: &TenantContext,
        cycle_id: Uuid,
        payslips: Vec<Payslip>,
    ) -> EngineResult<()> {
        let mut map = lock(&self.payslips);
        let stored = map.entry(ctx.tenant_id).or_default();
        stored.retain(|p| p.cycle_id != cycle_id);
        stored.extend(payslips);
        Ok(())
    }

    fn for_cycle(&self, ctx: &TenantContext, cycle_id: Uuid) -> EngineResult<Vec<Payslip>> {
        Ok(lock(&self.payslips)
            .get(&ctx.tenant_id)
            .map(|stored| {
                stored
                    .iter()
                    .filter(|p| p.cycle_id == cycle_id)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    fn for_employee(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        year: Option<i32>,
    ) -> EngineResult<Vec<Payslip>> {
        let mut history: Vec<Payslip> = lock(&self.payslips)
            .get(&ctx.tenant_id)
            .map(|stored| {
                stored
                    .iter()
                    .filter(|p| {
                        p.employee_id == employee_id && year.is_none_or(|y| p.year == y)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        history.sort_by_key(|p| (p.year, p.month));
        Ok(history)
    }

    fn find(&self, ctx: &TenantContext, payslip_id: Uuid) -> EngineResult<Payslip> {
        lock(&self.payslips)
            .get(&ctx.tenant_id)
            .and_then(|stored| stored.iter().find(|p| p.id == payslip_id))
            .cloned()
            .ok_or(EngineError::PayslipNotFound { id: payslip_id })
    }

    fn update(&self, ctx: &TenantContext, payslip: Payslip) -> EngineResult<()> {
        let mut map = lock(&self.payslips);
        let stored = map
            .get_mut(&ctx.tenant_id)
            .and_then(|list| list.iter_mut().find(|p| p.id == payslip.id))
            .ok_or(EngineError::PayslipNotFound { id: payslip.id })?;
        *stored = payslip;
        Ok(())
    }

    fn gross_for_employee_year(
        &self,
        ctx: &TenantContext,
        employee_id: Uuid,
        year: i32,
    ) -> EngineResult<Decimal> {
        Ok(lock(&self.payslips)
            .get(&ctx.tenant_id)
            .map(|stored| {
                stored
                    .iter()
                    .filter(|p| p.employee_id == employee_id && p.year == year)
                    .map(|p| p.total_gross)
                    .sum()
            })
            .unwrap_or(Decimal::ZERO))
    }
}

/// In-memory [`CycleStore`].
#[derive(Debug, Default)]
pub struct InMemoryCycleStore {
    cycles: Mutex<HashMap<Uuid, Vec<PayrollCycle>>>,
}

impl InMemoryCycleStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CycleStore for InMemoryCycleStore {
    fn insert(&self, ctx: &TenantContext, cycle: PayrollCycle) -> EngineResult<()> {
        lock(&self.cycles)
            .entry(ctx.tenant_id)
            .or_default()
            .push(cycle);
        Ok(())
    }

    fn find(&self, ctx: &TenantContext, cycle_id: Uuid) -> EngineResult<PayrollCycle> {
        lock(&self.cycles)
            .get(&ctx.tenant_id)
            .and_then(|list| list.iter().find(|c| c.id == cycle_id))
            .cloned()
            .ok_or(EngineError::CycleNotFound { id: cycle_id })
    }

    fn find_by_period(
        &self,
        ctx: &TenantContext,
        period: PayPeriod,
    ) -> EngineResult<Option<PayrollCycle>> {
        use crate::models::CycleStatus;
        Ok(lock(&self.cycles).get(&ctx.tenant_id).and_then(|list| {
            list.iter()
                .find(|c| {
                    c.month == period.month
                        && c.year == period.year
                        && c.status != CycleStatus::Cancelled
                })
                .cloned()
        }))
    }

    fn update(&self, ctx: &TenantContext, cycle: PayrollCycle) -> EngineResult<()> {
        let mut map = lock(&self.cycles);
        let stored = map
            .get_mut(&ctx.tenant_id)
            .and_then(|list| list.iter_mut().find(|c| c.id == cycle.id))
            .ok_or(EngineError::CycleNotFound { id: cycle.id })?;
        *stored = cycle;
        Ok(())
    }

    fn list(&self, ctx: &TenantContext) -> EngineResult<Vec<PayrollCycle>> {
        let mut cycles = lock(&self.cycles)
            .get(&ctx.tenant_id)
            .cloned()
            .unwrap_or_default();
        cycles.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
        Ok(cycles)
    }
}
