//! Payroll cycle orchestration.
//!
//! The state machine around a month's payroll run: creating a cycle,
//! batch-processing it into payslips, approval/rejection, payment and
//! cancellation, with per-cycle locking and cooperative cancellation.

mod lock;
mod orchestrator;

pub use lock::{CycleLockGuard, CycleLockRegistry};
pub use orchestrator::{CancellationToken, PayrollOrchestrator, ProcessOptions};
