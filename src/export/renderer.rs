//! Payslip document rendering.
//!
//! [`PayslipRenderer`] is the seam for output formats; the built-in
//! [`TextPayslipRenderer`] produces the plain-text layout used for email
//! bodies and console review. PDF or HTML renderers implement the same
//! trait outside this crate.

use std::fmt::Write;

use crate::models::Payslip;

/// Renders a payslip into a document.
pub trait PayslipRenderer {
    /// Produces the rendered document for one payslip.
    fn render(&self, payslip: &Payslip) -> String;
}

/// Plain-text payslip layout.
#[derive(Debug, Default)]
pub struct TextPayslipRenderer;

impl TextPayslipRenderer {
    /// Creates the renderer.
    pub fn new() -> Self {
        Self
    }
}

impl PayslipRenderer for TextPayslipRenderer {
    fn render(&self, payslip: &Payslip) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "PAYSLIP {}", payslip.payslip_number);
        let _ = writeln!(out, "Period: {}/{}", payslip.month, payslip.year);
        let _ = writeln!(
            out,
            "Employee: {} ({})",
            payslip.employee_name, payslip.employee_code
        );
        if let Some(department) = &payslip.department {
            let _ = writeln!(out, "Department: {department}");
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "EARNINGS");
        let _ = writeln!(out, "  Basic salary           {:>12.2}", payslip.basic_salary);
        let _ = writeln!(out, "  Allowances             {:>12.2}", payslip.allowances);
        let _ = writeln!(out, "  Overtime pay           {:>12.2}", payslip.overtime_pay);
        let _ = writeln!(out, "  Holiday pay            {:>12.2}", payslip.holiday_pay);
        if !payslip.leave_encashment.is_zero() {
            let _ = writeln!(
                out,
                "  Leave encashment       {:>12.2}",
                payslip.leave_encashment
            );
        }
        if !payslip.thirteenth_month_bonus.is_zero() {
            let _ = writeln!(
                out,
                "  13th month bonus       {:>12.2}",
                payslip.thirteenth_month_bonus
            );
        }
        let _ = writeln!(out, "  GROSS                  {:>12.2}", payslip.total_gross);
        let _ = writeln!(out);
        let _ = writeln!(out, "DEDUCTIONS");
        let _ = writeln!(
            out,
            "  CSG                    {:>12.2}",
            payslip.statutory.csg_employee
        );
        let _ = writeln!(
            out,
            "  NSF                    {:>12.2}",
            payslip.statutory.nsf_employee
        );
        if !payslip.statutory.npf_employee.is_zero() {
            let _ = writeln!(
                out,
                "  NPF                    {:>12.2}",
                payslip.statutory.npf_employee
            );
        }
        let _ = writeln!(out, "  PAYE                   {:>12.2}", payslip.statutory.paye);
        if !payslip.other_deductions.is_zero() {
            let _ = writeln!(
                out,
                "  Other deductions       {:>12.2}",
                payslip.other_deductions
            );
        }
        if !payslip.leave_deduction.is_zero() {
            let _ = writeln!(
                out,
                "  Unpaid leave           {:>12.2}",
                payslip.leave_deduction
            );
        }
        let _ = writeln!(
            out,
            "  TOTAL DEDUCTIONS       {:>12.2}",
            payslip.total_deductions
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "NET PAY                  {:>12.2} MUR", payslip.net_salary);
        out
    }
}
