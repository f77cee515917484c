//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Variants fall into two families: *rejections* (a caller asked for
//! something the state machine or business rules forbid) and *system
//! failures* (missing data, bad configuration, broken arithmetic). Use
//! [`EngineError::is_rejection`] to branch without matching every variant.

use thiserror::Error;
use uuid::Uuid;

use crate::models::CycleStatus;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::DuplicateCycle { month: 3, year: 2026 };
/// assert_eq!(error.to_string(), "Payroll cycle for 3/2026 already exists");
/// assert!(error.is_rejection());
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A non-deleted payroll cycle already exists for the period.
    #[error("Payroll cycle for {month}/{year} already exists")]
    DuplicateCycle {
        /// Month of the conflicting period.
        month: u32,
        /// Year of the conflicting period.
        year: i32,
    },

    /// The period itself is invalid (month outside 1-12).
    #[error("Invalid pay period {month}/{year}")]
    InvalidPeriod {
        /// The rejected month value.
        month: u32,
        /// The year it was requested for.
        year: i32,
    },

    /// No payroll cycle with this id exists.
    #[error("Payroll cycle {id} not found")]
    CycleNotFound {
        /// The missing cycle id.
        id: Uuid,
    },

    /// No payslip with this id exists.
    #[error("Payslip {id} not found")]
    PayslipNotFound {
        /// The missing payslip id.
        id: Uuid,
    },

    /// No employee with this id exists in the tenant.
    #[error("Employee {id} not found")]
    EmployeeNotFound {
        /// The missing employee id.
        id: Uuid,
    },

    /// The requested operation is not legal in the cycle's current state.
    #[error("Cannot {action} a payroll cycle in {current} status")]
    InvalidTransition {
        /// The state the cycle is actually in.
        current: CycleStatus,
        /// The operation that was attempted.
        action: &'static str,
    },

    /// Approval was requested without a payment date.
    #[error("Payment date is required for approval")]
    MissingPaymentDate,

    /// A paid payslip cannot be regenerated.
    #[error("Cannot regenerate paid payslip {payslip_number}")]
    PayslipAlreadyPaid {
        /// The number of the payslip that is already paid.
        payslip_number: String,
    },

    /// Another processing/approval/payment operation holds this cycle.
    #[error("Payroll cycle {id} is already being processed")]
    CycleBusy {
        /// The locked cycle id.
        id: Uuid,
    },

    /// A processing batch was cancelled cooperatively; the cycle reverted
    /// to draft.
    #[error("Processing of payroll cycle {id} was cancelled")]
    ProcessingCancelled {
        /// The cycle whose batch was aborted.
        id: Uuid,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    Calculation {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Whether this error is a rejected operation rather than a system
    /// failure.
    ///
    /// Rejections are expected outcomes a caller can surface to users
    /// (duplicate cycle, illegal transition, busy cycle); system failures
    /// indicate missing data or broken configuration.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            EngineError::DuplicateCycle { .. }
                | EngineError::InvalidPeriod { .. }
                | EngineError::InvalidTransition { .. }
                | EngineError::MissingPaymentDate
                | EngineError::PayslipAlreadyPaid { .. }
                | EngineError::CycleBusy { .. }
                | EngineError::ProcessingCancelled { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
