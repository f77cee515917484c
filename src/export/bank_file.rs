//! Bank salary-transfer file generation.
//!
//! Produces the CSV the bank ingests to execute the month's salary
//! transfers. The layout is fixed:
//!
//! ```text
//! EmployeeCode,EmployeeName,BankName,AccountNumber,NetSalary,Reference
//! ```
//!
//! Rows are ordered by employee code so reruns produce byte-identical
//! files. Employees without a bank account on file are skipped; they are
//! paid through a manual channel and must not produce a malformed row.

use std::fmt::Write;

use crate::models::Payslip;

/// Renders the bank transfer CSV for a set of payslips.
///
/// The employee name is always quoted (names routinely contain commas);
/// embedded quotes are doubled per CSV convention. Net salary is printed
/// with exactly two decimal places. The payslip number doubles as the
/// transfer reference.
pub fn bank_transfer_file(payslips: &[Payslip]) -> String {
    let mut rows: Vec<&Payslip> = payslips
        .iter()
        .filter(|p| p.bank_account.is_some())
        .collect();
    rows.sort_by(|a, b| a.employee_code.cmp(&b.employee_code));

    let mut out = String::from("EmployeeCode,EmployeeName,BankName,AccountNumber,NetSalary,Reference\n");
    for slip in rows {
        let name = slip.employee_name.replace('"', "\"\"");
        let bank = slip.bank_name.as_deref().unwrap_or("");
        let account = slip.bank_account.as_deref().unwrap_or("");
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{},\"{}\",{},{},{:.2},{}",
            slip.employee_code, name, bank, account, slip.net_salary, slip.payslip_number
        );
    }
    out
}
