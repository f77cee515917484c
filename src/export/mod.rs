//! Export adapters.
//!
//! Turn a processed cycle's payslips into outward-facing artifacts: the
//! bank salary-transfer CSV, the aggregate cycle summary, and rendered
//! payslip documents.

mod bank_file;
mod renderer;
mod summary;

pub use bank_file::bank_transfer_file;
pub use renderer::{PayslipRenderer, TextPayslipRenderer};
pub use summary::{DepartmentSummary, PayrollSummary};
