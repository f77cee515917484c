//! Employee snapshot model.
//!
//! The engine never holds a live reference to an employee record. Payroll
//! calculation copies the fields it needs into an [`EmployeeSnapshot`] so a
//! payslip stays historically accurate even if the employee record changes
//! afterwards.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

fn default_currency() -> String {
    "MUR".to_string()
}

/// Point-in-time copy of the employee fields payroll calculation depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    /// Unique identifier of the employee.
    pub id: Uuid,
    /// Employer-assigned employee code (appears in payslip numbers and
    /// bank-transfer files).
    pub employee_code: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Department name, if assigned.
    pub department: Option<String>,
    /// Monthly basic salary.
    pub basic_salary: Decimal,
    /// Salary currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Date the employee joined the company. Drives the NPF/PRGF cutover
    /// and the PRGF tenure tier.
    pub hire_date: NaiveDate,
    /// Bank name for salary transfer, if on file.
    pub bank_name: Option<String>,
    /// Bank account number for salary transfer, if on file.
    pub bank_account: Option<String>,
}

impl EmployeeSnapshot {
    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whole years of service as of the given date.
    ///
    /// A year counts only once the anniversary of the hire date has passed.
    /// Never negative: a hire date in the future yields zero.
    pub fn years_of_service(&self, as_of: NaiveDate) -> u32 {
        let mut years = as_of.year() - self.hire_date.year();
        if (as_of.month(), as_of.day()) < (self.hire_date.month(), self.hire_date.day()) {
            years -= 1;
        }
        years.max(0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn snapshot(hire: NaiveDate) -> EmployeeSnapshot {
        EmployeeSnapshot {
            id: Uuid::new_v4(),
            employee_code: "EMP001".to_string(),
            first_name: "Anita".to_string(),
            last_name: "Ramgoolam".to_string(),
            department: Some("Finance".to_string()),
            basic_salary: Decimal::from_str("45000").unwrap(),
            currency: "MUR".to_string(),
            hire_date: hire,
            bank_name: Some("MCB".to_string()),
            bank_account: Some("000123456789".to_string()),
        }
    }

    #[test]
    fn test_full_name() {
        let emp = snapshot(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
        assert_eq!(emp.full_name(), "Anita Ramgoolam");
    }

    #[test]
    fn test_years_of_service_after_anniversary() {
        let emp = snapshot(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(emp.years_of_service(as_of), 5);
    }

    #[test]
    fn test_years_of_service_before_anniversary() {
        let emp = snapshot(NaiveDate::from_ymd_opt(2020, 9, 15).unwrap());
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(emp.years_of_service(as_of), 4);
    }

    #[test]
    fn test_years_of_service_on_anniversary_day() {
        let emp = snapshot(NaiveDate::from_ymd_opt(2020, 6, 30).unwrap());
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(emp.years_of_service(as_of), 5);
    }

    #[test]
    fn test_years_of_service_never_negative() {
        let emp = snapshot(NaiveDate::from_ymd_opt(2030, 1, 1).unwrap());
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert_eq!(emp.years_of_service(as_of), 0);
    }

    #[test]
    fn test_currency_defaults_to_mur() {
        let json = r#"{
            "id": "12345678-1234-1234-1234-123456789012",
            "employee_code": "EMP001",
            "first_name": "Anita",
            "last_name": "Ramgoolam",
            "department": null,
            "basic_salary": "45000",
            "hire_date": "2021-01-01",
            "bank_name": null,
            "bank_account": null
        }"#;
        let emp: EmployeeSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(emp.currency, "MUR");
    }
}
