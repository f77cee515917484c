//! The payroll cycle orchestrator.
//!
//! Drives a cycle through its lifecycle:
//!
//! ```text
//! Draft -> Processing -> Calculated -> Approved -> Paid
//!   |                        |
//!   v                        v
//! Cancelled                Draft (rejection)
//! ```
//!
//! Processing is batch-then-flip: the whole payslip batch is computed in
//! memory first, and only a fully successful batch replaces the stored set
//! and moves the cycle to `Calculated`. Any failure or cancellation
//! reverts the cycle to `Draft` with the previous payslips untouched, so
//! observers never see a half-calculated cycle.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::assembler::{PayslipInputs, assemble_payslip};
use crate::benefits::{calculate_leave_encashment, calculate_thirteenth_month_bonus};
use crate::config::StatutoryConfig;
use crate::earnings::EarningsExtras;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CycleStatus, CycleTotals, EmployeeSnapshot, PayPeriod, PayrollCycle, Payslip,
};
use crate::repository::{
    AttendanceSource, CycleStore, EmployeeDirectory, LeaveSource, PayslipStore,
    SalaryComponentSource, TenantContext,
};

use super::lock::CycleLockRegistry;

/// Cooperative cancellation flag for an in-flight processing batch.
///
/// Cloning shares the flag. Cancellation is checked between employees, so
/// a cancelled batch stops at the next employee boundary and the cycle
/// reverts to draft.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of the batch holding this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Per-run processing options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessOptions {
    /// Include the 13th-month bonus in every payslip of this run (the
    /// December run, typically).
    pub include_thirteenth_month: bool,
    /// Encash each employee's remaining leave balance in this run.
    pub encash_leave_balance: bool,
}

/// The engine's operational facade.
///
/// Owns the repository collaborators, the statutory rate table and the
/// per-cycle lock registry. All operations take an explicit
/// [`TenantContext`].
pub struct PayrollOrchestrator<D, A, L, S, P, C> {
    directory: D,
    attendance: A,
    leave: L,
    components: S,
    payslips: P,
    cycles: C,
    config: StatutoryConfig,
    locks: CycleLockRegistry,
}

impl<D, A, L, S, P, C> PayrollOrchestrator<D, A, L, S, P, C>
where
    D: EmployeeDirectory,
    A: AttendanceSource,
    L: LeaveSource,
    S: SalaryComponentSource,
    P: PayslipStore,
    C: CycleStore,
{
    /// Builds an orchestrator over the given collaborators and rate table.
    pub fn new(
        directory: D,
        attendance: A,
        leave: L,
        components: S,
        payslips: P,
        cycles: C,
        config: StatutoryConfig,
    ) -> Self {
        Self {
            directory,
            attendance,
            leave,
            components,
            payslips,
            cycles,
            config,
            locks: CycleLockRegistry::new(),
        }
    }

    /// The employee directory collaborator.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// The attendance collaborator.
    pub fn attendance(&self) -> &A {
        &self.attendance
    }

    /// The leave collaborator.
    pub fn leave(&self) -> &L {
        &self.leave
    }

    /// The salary component collaborator.
    pub fn components(&self) -> &S {
        &self.components
    }

    /// The payslip store.
    pub fn payslip_store(&self) -> &P {
        &self.payslips
    }

    /// The cycle store.
    pub fn cycle_store(&self) -> &C {
        &self.cycles
    }

    /// Creates a draft cycle for a period.
    ///
    /// At most one non-cancelled cycle may exist per period and tenant.
    pub fn create_cycle(
        &self,
        ctx: &TenantContext,
        period: PayPeriod,
        created_by: &str,
    ) -> EngineResult<PayrollCycle> {
        if self.cycles.find_by_period(ctx, period)?.is_some() {
            return Err(EngineError::DuplicateCycle {
                month: period.month,
                year: period.year,
            });
        }
        let cycle = PayrollCycle::new(period, created_by);
        self.cycles.insert(ctx, cycle.clone())?;
        info!(cycle_id = %cycle.id, period = %period, "created payroll cycle");
        Ok(cycle)
    }

    /// Processes a draft cycle into a full payslip batch.
    ///
    /// On success the cycle lands in `Calculated` with totals summed from
    /// the new batch. On any failure, including cancellation via the
    /// token, the cycle reverts to `Draft` and the previously stored
    /// payslips (if the cycle was processed before and rejected) are left
    /// untouched.
    pub fn process_cycle(
        &self,
        ctx: &TenantContext,
        cycle_id: Uuid,
        processed_by: &str,
        options: ProcessOptions,
        cancel: &CancellationToken,
    ) -> EngineResult<PayrollCycle> {
        let _guard = self.locks.acquire(cycle_id)?;
        let mut cycle = self.cycles.find(ctx, cycle_id)?;
        if cycle.status != CycleStatus::Draft {
            return Err(EngineError::InvalidTransition {
                current: cycle.status,
                action: "process",
            });
        }
        let period = cycle.period();

        cycle.status = CycleStatus::Processing;
        cycle.updated_by = Some(processed_by.to_string());
        cycle.updated_at = Some(Utc::now());
        self.cycles.update(ctx, cycle.clone())?;

        let batch = match self.build_batch(ctx, cycle_id, period, options, cancel) {
            Ok(batch) => batch,
            Err(error) => {
                warn!(
                    cycle_id = %cycle_id,
                    period = %period,
                    %error,
                    "processing failed, reverting cycle to draft"
                );
                cycle.status = CycleStatus::Draft;
                cycle.updated_at = Some(Utc::now());
                self.cycles.update(ctx, cycle)?;
                return Err(error);
            }
        };

        self.payslips.replace_for_cycle(ctx, cycle_id, batch.clone())?;

        cycle.totals = CycleTotals::from_payslips(&batch);
        cycle.employee_count = batch.len();
        cycle.status = CycleStatus::Calculated;
        cycle.processed_by = Some(processed_by.to_string());
        cycle.processed_at = Some(Utc::now());
        cycle.updated_at = Some(Utc::now());
        self.cycles.update(ctx, cycle.clone())?;

        info!(
            cycle_id = %cycle_id,
            period = %period,
            employees = batch.len(),
            gross = %cycle.totals.gross,
            net = %cycle.totals.net,
            "processed payroll cycle"
        );
        Ok(cycle)
    }

    fn build_batch(
        &self,
        ctx: &TenantContext,
        cycle_id: Uuid,
        period: PayPeriod,
        options: ProcessOptions,
        cancel: &CancellationToken,
    ) -> EngineResult<Vec<Payslip>> {
        let employees = self.directory.active_employees(ctx, period)?;

        // Gross already stored for this cycle by a previous run must not
        // count towards the year total the 13th-month bonus is based on.
        let prior_gross: HashMap<Uuid, Decimal> = self
            .payslips
            .for_cycle(ctx, cycle_id)?
            .into_iter()
            .map(|p| (p.employee_id, p.total_gross))
            .collect();

        let mut batch = Vec::with_capacity(employees.len());
        for employee in &employees {
            if cancel.is_cancelled() {
                return Err(EngineError::ProcessingCancelled { id: cycle_id });
            }
            let own_prior = prior_gross
                .get(&employee.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            let inputs = self.gather_inputs(ctx, employee, period, own_prior, options)?;
            batch.push(assemble_payslip(
                cycle_id,
                period,
                employee,
                &inputs,
                &self.config,
            ));
        }
        Ok(batch)
    }

    fn gather_inputs(
        &self,
        ctx: &TenantContext,
        employee: &EmployeeSnapshot,
        period: PayPeriod,
        prior_cycle_gross: Decimal,
        options: ProcessOptions,
    ) -> EngineResult<PayslipInputs> {
        let mut extras = EarningsExtras::default();
        if options.include_thirteenth_month {
            let year_gross = self
                .payslips
                .gross_for_employee_year(ctx, employee.id, period.year)?
                - prior_cycle_gross;
            extras.thirteenth_month_bonus = calculate_thirteenth_month_bonus(year_gross);
        }
        if options.encash_leave_balance {
            let balance = self.leave.leave_balance(ctx, employee.id, period.last_day())?;
            extras.leave_encashment =
                calculate_leave_encashment(employee.basic_salary, balance, &self.config);
        }

        Ok(PayslipInputs {
            attendance: self.attendance.attendance_for(ctx, employee.id, period)?,
            timesheets: self.attendance.timesheets_for(ctx, employee.id, period)?,
            leave: self.leave.leave_for(ctx, employee.id, period)?,
            components: self.components.components_for(ctx, employee.id, period)?,
            extras,
        })
    }

    /// Approves a calculated cycle with a payment date.
    pub fn approve_cycle(
        &self,
        ctx: &TenantContext,
        cycle_id: Uuid,
        approved_by: &str,
        payment_date: Option<NaiveDate>,
    ) -> EngineResult<PayrollCycle> {
        let _guard = self.locks.acquire(cycle_id)?;
        let mut cycle = self.cycles.find(ctx, cycle_id)?;
        if cycle.status != CycleStatus::Calculated {
            return Err(EngineError::InvalidTransition {
                current: cycle.status,
                action: "approve",
            });
        }
        let payment_date = payment_date.ok_or(EngineError::MissingPaymentDate)?;

        cycle.status = CycleStatus::Approved;
        cycle.approved_by = Some(approved_by.to_string());
        cycle.approved_at = Some(Utc::now());
        cycle.payment_date = Some(payment_date);
        cycle.updated_by = Some(approved_by.to_string());
        cycle.updated_at = Some(Utc::now());
        self.cycles.update(ctx, cycle.clone())?;
        info!(cycle_id = %cycle_id, %payment_date, "approved payroll cycle");
        Ok(cycle)
    }

    /// Rejects a calculated cycle back to draft, recording the reason.
    ///
    /// The payslips stay in place so reviewers can still inspect the
    /// rejected run; the next processing run replaces them.
    pub fn reject_cycle(
        &self,
        ctx: &TenantContext,
        cycle_id: Uuid,
        rejected_by: &str,
        reason: &str,
    ) -> EngineResult<PayrollCycle> {
        let _guard = self.locks.acquire(cycle_id)?;
        let mut cycle = self.cycles.find(ctx, cycle_id)?;
        if cycle.status != CycleStatus::Calculated {
            return Err(EngineError::InvalidTransition {
                current: cycle.status,
                action: "reject",
            });
        }

        cycle.status = CycleStatus::Draft;
        cycle.notes = Some(reason.to_string());
        cycle.updated_by = Some(rejected_by.to_string());
        cycle.updated_at = Some(Utc::now());
        self.cycles.update(ctx, cycle.clone())?;
        info!(cycle_id = %cycle_id, reason, "rejected payroll cycle back to draft");
        Ok(cycle)
    }

    /// Marks an approved cycle as paid and flips every payslip to paid.
    pub fn mark_paid(
        &self,
        ctx: &TenantContext,
        cycle_id: Uuid,
        paid_by: &str,
    ) -> EngineResult<PayrollCycle> {
        let _guard = self.locks.acquire(cycle_id)?;
        let mut cycle = self.cycles.find(ctx, cycle_id)?;
        if cycle.status != CycleStatus::Approved {
            return Err(EngineError::InvalidTransition {
                current: cycle.status,
                action: "pay",
            });
        }

        let paid_at = Utc::now();
        for mut payslip in self.payslips.for_cycle(ctx, cycle_id)? {
            payslip.mark_paid(paid_at);
            self.payslips.update(ctx, payslip)?;
        }

        cycle.status = CycleStatus::Paid;
        cycle.updated_by = Some(paid_by.to_string());
        cycle.updated_at = Some(paid_at);
        self.cycles.update(ctx, cycle.clone())?;
        info!(cycle_id = %cycle_id, "marked payroll cycle paid");
        Ok(cycle)
    }

    /// Cancels a draft cycle. Only drafts can be cancelled; anything
    /// later in the lifecycle must be rejected back to draft first.
    pub fn cancel_cycle(
        &self,
        ctx: &TenantContext,
        cycle_id: Uuid,
        cancelled_by: &str,
    ) -> EngineResult<PayrollCycle> {
        let _guard = self.locks.acquire(cycle_id)?;
        let mut cycle = self.cycles.find(ctx, cycle_id)?;
        if cycle.status != CycleStatus::Draft {
            return Err(EngineError::InvalidTransition {
                current: cycle.status,
                action: "cancel",
            });
        }

        cycle.status = CycleStatus::Cancelled;
        cycle.updated_by = Some(cancelled_by.to_string());
        cycle.updated_at = Some(Utc::now());
        self.cycles.update(ctx, cycle.clone())?;
        info!(cycle_id = %cycle_id, "cancelled payroll cycle");
        Ok(cycle)
    }

    /// Recomputes a single payslip from fresh facts, keeping its identity.
    ///
    /// The payslip id, number and creation timestamp are preserved;
    /// everything else is recalculated. Only payslips of a `Calculated`
    /// cycle can be regenerated, and never after they have been paid.
    /// Cycle totals are re-summed afterwards.
    pub fn regenerate_payslip(
        &self,
        ctx: &TenantContext,
        payslip_id: Uuid,
        options: ProcessOptions,
    ) -> EngineResult<Payslip> {
        let existing = self.payslips.find(ctx, payslip_id)?;
        if existing.is_paid() {
            return Err(EngineError::PayslipAlreadyPaid {
                payslip_number: existing.payslip_number,
            });
        }

        let _guard = self.locks.acquire(existing.cycle_id)?;
        let mut cycle = self.cycles.find(ctx, existing.cycle_id)?;
        if cycle.status != CycleStatus::Calculated {
            return Err(EngineError::InvalidTransition {
                current: cycle.status,
                action: "regenerate payslips for",
            });
        }

        let period = cycle.period();
        let employee = self.directory.find_employee(ctx, existing.employee_id)?;
        let inputs = self.gather_inputs(ctx, &employee, period, existing.total_gross, options)?;

        let mut fresh = assemble_payslip(cycle.id, period, &employee, &inputs, &self.config);
        fresh.id = existing.id;
        fresh.payslip_number = existing.payslip_number;
        fresh.created_at = existing.created_at;
        self.payslips.update(ctx, fresh.clone())?;

        let all = self.payslips.for_cycle(ctx, cycle.id)?;
        cycle.totals = CycleTotals::from_payslips(&all);
        cycle.updated_at = Some(Utc::now());
        self.cycles.update(ctx, cycle)?;

        info!(payslip_number = %fresh.payslip_number, "regenerated payslip");
        Ok(fresh)
    }
}
