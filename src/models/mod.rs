//! Core data models for the payroll engine.
//!
//! This module contains the domain models used throughout the engine:
//! point-in-time employee snapshots, attendance/timesheet/leave facts,
//! pay periods, payslips and payroll cycles.

mod cycle;
mod employee;
mod facts;
mod payslip;
mod period;

pub use cycle::{CycleStatus, CycleTotals, PayrollCycle};
pub use employee::EmployeeSnapshot;
pub use facts::{AttendanceFact, AttendanceStatus, LeaveFact, SalaryComponents, TimesheetFact};
pub use payslip::{PaymentStatus, Payslip, StatutoryBreakdown};
pub use period::PayPeriod;
