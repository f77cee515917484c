//! Cycle summary reporting.
//!
//! Aggregate views of one processed cycle for review screens and finance
//! sign-off: whole-cycle totals, total cost to company, and a per-
//! department breakdown.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CycleTotals, PayrollCycle, Payslip};

/// Bucket name for payslips without a department.
const UNASSIGNED: &str = "Unassigned";

/// Totals for one department within a cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSummary {
    /// Department name, or "Unassigned".
    pub department: String,
    /// Payslips in this department.
    pub employee_count: usize,
    /// Sum of gross salaries.
    pub gross: Decimal,
    /// Sum of total deductions.
    pub deductions: Decimal,
    /// Sum of net salaries.
    pub net: Decimal,
}

/// Aggregate summary of one payroll cycle.
#[derive(Debug, Clone, Serialize)]
pub struct PayrollSummary {
    /// Human-readable period label, e.g. "June 2025".
    pub period: String,
    /// Lifecycle status at the time the summary was built.
    pub status: String,
    /// Payslips in the cycle.
    pub employee_count: usize,
    /// Whole-cycle contribution totals.
    pub totals: CycleTotals,
    /// Gross plus every employer-side contribution: what the month
    /// actually costs the company.
    pub cost_to_company: Decimal,
    /// Per-department breakdown, sorted by department name.
    pub departments: Vec<DepartmentSummary>,
}

impl PayrollSummary {
    /// Builds a summary from a cycle and its payslips.
    pub fn for_cycle(cycle: &PayrollCycle, payslips: &[Payslip]) -> Self {
        let totals = CycleTotals::from_payslips(payslips);
        let employer_side: Decimal = payslips.iter().map(|p| p.statutory.employer_total()).sum();

        let mut departments: BTreeMap<String, DepartmentSummary> = BTreeMap::new();
        for slip in payslips {
            let name = slip
                .department
                .clone()
                .unwrap_or_else(|| UNASSIGNED.to_string());
            let entry = departments
                .entry(name.clone())
                .or_insert_with(|| DepartmentSummary {
                    department: name,
                    employee_count: 0,
                    gross: Decimal::ZERO,
                    deductions: Decimal::ZERO,
                    net: Decimal::ZERO,
                });
            entry.employee_count += 1;
            entry.gross += slip.total_gross;
            entry.deductions += slip.total_deductions;
            entry.net += slip.net_salary;
        }

        PayrollSummary {
            period: cycle.period().label(),
            status: cycle.status.to_string(),
            employee_count: payslips.len(),
            cost_to_company: totals.gross + employer_side,
            totals,
            departments: departments.into_values().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PayPeriod, PaymentStatus, StatutoryBreakdown};
    use chrono::Utc;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn payslip(department: Option<&str>, gross: &str, net: &str, prgf: &str) -> Payslip {
        Payslip {
            id: Uuid::new_v4(),
            cycle_id: Uuid::new_v4(),
            employee_id: Uuid::new_v4(),
            month: 6,
            year: 2025,
            payslip_number: "PS-2025-06-EMP001".to_string(),
            employee_code: "EMP001".to_string(),
            employee_name: "Test Employee".to_string(),
            department: department.map(str::to_string),
            bank_name: None,
            bank_account: None,
            basic_salary: dec(gross),
            allowances: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            overtime_pay: Decimal::ZERO,
            holiday_pay: Decimal::ZERO,
            leave_encashment: Decimal::ZERO,
            thirteenth_month_bonus: Decimal::ZERO,
            total_gross: dec(gross),
            working_days: 25,
            days_worked: 25,
            paid_leave_days: Decimal::ZERO,
            unpaid_leave_days: Decimal::ZERO,
            leave_deduction: Decimal::ZERO,
            statutory: StatutoryBreakdown {
                npf_employee: Decimal::ZERO,
                nsf_employee: Decimal::ZERO,
                csg_employee: Decimal::ZERO,
                paye: Decimal::ZERO,
                npf_employer: Decimal::ZERO,
                nsf_employer: dec("500.00"),
                csg_employer: dec("1000.00"),
                prgf: dec(prgf),
                training_levy: Decimal::ZERO,
            },
            other_deductions: Decimal::ZERO,
            total_deductions: dec(gross) - dec(net),
            net_salary: dec(net),
            payment_status: PaymentStatus::Pending,
            paid_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_cost_to_company_includes_employer_side() {
        let cycle = PayrollCycle::new(PayPeriod::new(6, 2025).unwrap(), "hr_admin");
        let payslips = vec![payslip(Some("Finance"), "50000.00", "45000.00", "2150.00")];
        let summary = PayrollSummary::for_cycle(&cycle, &payslips);
        // 50,000 gross + 500 NSF + 1,000 CSG + 2,150 PRGF = 53,650.
        assert_eq!(summary.cost_to_company, dec("53650.00"));
        assert_eq!(summary.totals.gross, dec("50000.00"));
        assert_eq!(summary.period, "June 2025");
        assert_eq!(summary.status, "Draft");
    }

    #[test]
    fn test_departments_bucketed_and_sorted() {
        let cycle = PayrollCycle::new(PayPeriod::new(6, 2025).unwrap(), "hr_admin");
        let payslips = vec![
            payslip(Some("Operations"), "30000.00", "28000.00", "0"),
            payslip(Some("Finance"), "50000.00", "45000.00", "0"),
            payslip(Some("Finance"), "40000.00", "36000.00", "0"),
            payslip(None, "20000.00", "19000.00", "0"),
        ];
        let summary = PayrollSummary::for_cycle(&cycle, &payslips);
        let names: Vec<&str> = summary
            .departments
            .iter()
            .map(|d| d.department.as_str())
            .collect();
        assert_eq!(names, vec!["Finance", "Operations", "Unassigned"]);

        let finance = &summary.departments[0];
        assert_eq!(finance.employee_count, 2);
        assert_eq!(finance.gross, dec("90000.00"));
        assert_eq!(finance.net, dec("81000.00"));
    }

    #[test]
    fn test_department_totals_sum_to_cycle_totals() {
        let cycle = PayrollCycle::new(PayPeriod::new(6, 2025).unwrap(), "hr_admin");
        let payslips = vec![
            payslip(Some("Operations"), "30000.00", "28000.00", "0"),
            payslip(None, "20000.00", "19000.00", "0"),
        ];
        let summary = PayrollSummary::for_cycle(&cycle, &payslips);
        let dept_net: Decimal = summary.departments.iter().map(|d| d.net).sum();
        assert_eq!(dept_net, summary.totals.net);
    }

    #[test]
    fn test_empty_cycle_summary() {
        let cycle = PayrollCycle::new(PayPeriod::new(6, 2025).unwrap(), "hr_admin");
        let summary = PayrollSummary::for_cycle(&cycle, &[]);
        assert_eq!(summary.employee_count, 0);
        assert_eq!(summary.cost_to_company, Decimal::ZERO);
        assert!(summary.departments.is_empty());
    }
}
