//! Attendance, timesheet and leave facts.
//!
//! These are read-only inputs supplied by upstream collaborators for one
//! employee and one pay period. The engine consumes them; it never writes
//! them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Daily attendance outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// The employee was present for the day.
    Present,
    /// The employee was absent.
    Absent,
    /// The employee worked a half day.
    HalfDay,
}

/// One day of approved attendance for an employee.
///
/// The overtime multiplier is carried per record because it comes from
/// sector-specific rules (typically 1.5x, 2x or 3x) and can differ day to
/// day. Overtime hours recorded without a multiplier earn nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceFact {
    /// The day this record covers.
    pub date: NaiveDate,
    /// Attendance outcome for the day.
    pub status: AttendanceStatus,
    /// Regular hours worked.
    pub regular_hours: Decimal,
    /// Overtime hours worked.
    pub overtime_hours: Decimal,
    /// Sector-rule overtime multiplier for this record, if any.
    pub overtime_multiplier: Option<Decimal>,
}

/// Period totals from one approved timesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetFact {
    /// Total regular hours in the timesheet.
    pub regular_hours: Decimal,
    /// Total overtime hours in the timesheet.
    pub overtime_hours: Decimal,
    /// Total public-holiday hours worked.
    pub holiday_hours: Decimal,
    /// Total paid-leave hours recorded on the timesheet.
    pub leave_hours: Decimal,
}

/// Employer-defined salary component totals for one employee and period.
///
/// Arbitrary additions and subtractions outside statutory scope, supplied
/// by the salary component collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryComponents {
    /// Total allowances to add to gross.
    pub allowances: Decimal,
    /// Total custom deductions to subtract from net.
    pub deductions: Decimal,
}

/// Approved leave taken in the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveFact {
    /// Leave type name (e.g. "Annual Leave", "Sick Leave").
    pub leave_type: String,
    /// Number of days taken; half days are allowed.
    pub days: Decimal,
    /// Whether this leave type is paid. Only unpaid leave reduces gross.
    pub paid: bool,
}
