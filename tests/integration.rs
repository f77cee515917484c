//! Integration tests for the payroll engine.
//!
//! This suite drives full payroll runs end to end:
//! - Single-employee statutory breakdown (CSG, NSF, NPF, PRGF, levy, PAYE)
//! - Cycle lifecycle: draft, process, approve, pay
//! - Rejection and reprocessing
//! - Batch atomicity under cancellation
//! - Cycle totals vs payslip sums at batch size
//! - Bank transfer file and cycle summary exports
//! - YAML rate table vs built-in table
//! - Property tests over the money invariants

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

use payroll_engine::assembler::{PayslipInputs, assemble_payslip};
use payroll_engine::config::{ConfigLoader, StatutoryConfig};
use payroll_engine::cycle::{CancellationToken, PayrollOrchestrator, ProcessOptions};
use payroll_engine::error::EngineError;
use payroll_engine::export::{PayrollSummary, bank_transfer_file};
use payroll_engine::models::{CycleStatus, EmployeeSnapshot, PayPeriod, PaymentStatus};
use payroll_engine::repository::{
    CycleStore, InMemoryAttendanceSource, InMemoryCycleStore, InMemoryEmployeeDirectory,
    InMemoryLeaveSource, InMemoryPayslipStore, InMemorySalaryComponentSource, PayslipStore,
    TenantContext,
};
use payroll_engine::statutory::{calculate_csg, calculate_paye};

// =============================================================================
// Test Helpers
// =============================================================================

type Engine = PayrollOrchestrator<
    InMemoryEmployeeDirectory,
    InMemoryAttendanceSource,
    InMemoryLeaveSource,
    InMemorySalaryComponentSource,
    InMemoryPayslipStore,
    InMemoryCycleStore,
>;

fn engine() -> Engine {
    PayrollOrchestrator::new(
        InMemoryEmployeeDirectory::new(),
        InMemoryAttendanceSource::new(),
        InMemoryLeaveSource::new(),
        InMemorySalaryComponentSource::new(),
        InMemoryPayslipStore::new(),
        InMemoryCycleStore::new(),
        StatutoryConfig::mauritius_2025(),
    )
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn employee(code: &str, basic: Decimal, hire: &str) -> EmployeeSnapshot {
    EmployeeSnapshot {
        id: Uuid::new_v4(),
        employee_code: code.to_string(),
        first_name: "Test".to_string(),
        last_name: code.to_string(),
        department: Some("Operations".to_string()),
        basic_salary: basic,
        currency: "MUR".to_string(),
        hire_date: NaiveDate::from_str(hire).unwrap(),
        bank_name: Some("MCB".to_string()),
        bank_account: Some(format!("0001{code}")),
    }
}

fn june() -> PayPeriod {
    PayPeriod::new(6, 2025).unwrap()
}

fn process(engine: &Engine, ctx: &TenantContext, cycle_id: Uuid) {
    engine
        .process_cycle(
            ctx,
            cycle_id,
            "hr_admin",
            ProcessOptions::default(),
            &CancellationToken::new(),
        )
        .expect("processing should succeed");
}

// =============================================================================
// End-to-end lifecycle
// =============================================================================

#[test]
fn test_single_employee_full_lifecycle() {
    let engine = engine();
    let ctx = TenantContext::new(Uuid::new_v4());
    engine
        .directory()
        .add(&ctx, employee("EMP001", dec("60000"), "2021-01-01"));

    let cycle = engine.create_cycle(&ctx, june(), "hr_admin").unwrap();
    process(&engine, &ctx, cycle.id);

    let payslips = engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap();
    assert_eq!(payslips.len(), 1);
    let slip = &payslips[0];

    // Hired after the 2020 cutover on a 60,000 gross:
    assert_eq!(slip.total_gross, dec("60000.00"));
    assert_eq!(slip.statutory.csg_employee, dec("1800.00")); // 3% high tier
    assert_eq!(slip.statutory.csg_employer, dec("3600.00")); // 6%
    assert_eq!(slip.statutory.nsf_employee, dec("600.00")); // 1% of basic
    assert_eq!(slip.statutory.nsf_employer, dec("1500.00")); // 2.5%
    assert_eq!(slip.statutory.npf_employee, Decimal::ZERO); // post-cutover
    assert_eq!(slip.statutory.prgf, dec("2580.00")); // 4.3%, 4y tenure
    assert_eq!(slip.statutory.training_levy, dec("900.00")); // 1.5% of basic
    assert_eq!(slip.statutory.paye, dec("3020.00"));
    assert_eq!(slip.net_salary, dec("54580.00"));
    assert_eq!(slip.payslip_number, "PS-2025-06-EMP001");

    let payment_date = NaiveDate::from_ymd_opt(2025, 6, 28).unwrap();
    let approved = engine
        .approve_cycle(&ctx, cycle.id, "manager", Some(payment_date))
        .unwrap();
    assert_eq!(approved.status, CycleStatus::Approved);

    let paid = engine.mark_paid(&ctx, cycle.id, "finance").unwrap();
    assert_eq!(paid.status, CycleStatus::Paid);
    assert!(paid.status.is_terminal());
    let slip = &engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap()[0];
    assert_eq!(slip.payment_status, PaymentStatus::Paid);
    assert!(slip.paid_at.is_some());
}

#[test]
fn test_legacy_hire_gets_npf_and_gratuity_scheme() {
    let engine = engine();
    let ctx = TenantContext::new(Uuid::new_v4());
    engine
        .directory()
        .add(&ctx, employee("EMP001", dec("40000"), "2015-06-01"));

    let cycle = engine.create_cycle(&ctx, june(), "hr_admin").unwrap();
    process(&engine, &ctx, cycle.id);

    let slip = &engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap()[0];
    assert_eq!(slip.statutory.npf_employee, dec("1200.00")); // 3% of basic
    assert_eq!(slip.statutory.npf_employer, dec("2400.00")); // 6%
    assert_eq!(slip.statutory.prgf, Decimal::ZERO); // pre-cutover hire
}

// =============================================================================
// Totals and money invariants at batch size
// =============================================================================

#[test]
fn test_cycle_totals_equal_payslip_sums_for_hundred_employees() {
    let engine = engine();
    let ctx = TenantContext::new(Uuid::new_v4());
    for n in 0..100u32 {
        // Salaries spread across both CSG tiers and both pension schemes.
        let basic = Decimal::from(18_000 + n * 537);
        let hire = if n % 3 == 0 { "2015-03-01" } else { "2022-07-01" };
        engine
            .directory()
            .add(&ctx, employee(&format!("EMP{n:03}"), basic, hire));
    }

    let cycle = engine.create_cycle(&ctx, june(), "hr_admin").unwrap();
    process(&engine, &ctx, cycle.id);

    let stored = engine.cycle_store().find(&ctx, cycle.id).unwrap();
    assert_eq!(stored.employee_count, 100);

    let payslips = engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap();
    let gross: Decimal = payslips.iter().map(|p| p.total_gross).sum();
    let deductions: Decimal = payslips.iter().map(|p| p.total_deductions).sum();
    let net: Decimal = payslips.iter().map(|p| p.net_salary).sum();
    assert_eq!(stored.totals.gross, gross);
    assert_eq!(stored.totals.deductions, deductions);
    assert_eq!(stored.totals.net, net);
    assert_eq!(gross - deductions, net);

    for slip in &payslips {
        assert_eq!(slip.net_salary, slip.total_gross - slip.total_deductions);
        assert_eq!(
            slip.total_deductions,
            slip.statutory.employee_total() + slip.other_deductions + slip.leave_deduction
        );
    }
}

// =============================================================================
// Rejection, reprocessing and batch atomicity
// =============================================================================

#[test]
fn test_rejected_cycle_reprocesses_with_fresh_batch() {
    let engine = engine();
    let ctx = TenantContext::new(Uuid::new_v4());
    engine
        .directory()
        .add(&ctx, employee("EMP001", dec("45000"), "2021-01-01"));

    let cycle = engine.create_cycle(&ctx, june(), "hr_admin").unwrap();
    process(&engine, &ctx, cycle.id);
    let first = engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap();

    engine
        .reject_cycle(&ctx, cycle.id, "manager", "allowances missing")
        .unwrap();
    let rejected = engine.cycle_store().find(&ctx, cycle.id).unwrap();
    assert_eq!(rejected.status, CycleStatus::Draft);
    assert_eq!(rejected.notes.as_deref(), Some("allowances missing"));

    process(&engine, &ctx, cycle.id);
    let second = engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap();
    assert_eq!(second.len(), 1);
    assert_ne!(first[0].id, second[0].id);
}

#[test]
fn test_cancelled_reprocess_keeps_previous_batch_intact() {
    let engine = engine();
    let ctx = TenantContext::new(Uuid::new_v4());
    engine
        .directory()
        .add(&ctx, employee("EMP001", dec("45000"), "2021-01-01"));

    let cycle = engine.create_cycle(&ctx, june(), "hr_admin").unwrap();
    process(&engine, &ctx, cycle.id);
    let first = engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap();
    engine
        .reject_cycle(&ctx, cycle.id, "manager", "rerun with components")
        .unwrap();

    // The rerun is cancelled before it finishes: the rejected batch must
    // survive untouched and the cycle must sit back in draft.
    let token = CancellationToken::new();
    token.cancel();
    let error = engine
        .process_cycle(&ctx, cycle.id, "hr_admin", ProcessOptions::default(), &token)
        .unwrap_err();
    assert!(matches!(error, EngineError::ProcessingCancelled { .. }));
    assert!(error.is_rejection());

    let stored = engine.cycle_store().find(&ctx, cycle.id).unwrap();
    assert_eq!(stored.status, CycleStatus::Draft);
    let survivors = engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap();
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].id, first[0].id);
}

#[test]
fn test_terminal_states_refuse_everything() {
    let engine = engine();
    let ctx = TenantContext::new(Uuid::new_v4());
    engine
        .directory()
        .add(&ctx, employee("EMP001", dec("45000"), "2021-01-01"));
    let cycle = engine.create_cycle(&ctx, june(), "hr_admin").unwrap();
    engine.cancel_cycle(&ctx, cycle.id, "hr_admin").unwrap();

    let error = engine
        .process_cycle(
            &ctx,
            cycle.id,
            "hr_admin",
            ProcessOptions::default(),
            &CancellationToken::new(),
        )
        .unwrap_err();
    assert!(matches!(
        error,
        EngineError::InvalidTransition {
            current: CycleStatus::Cancelled,
            ..
        }
    ));
    assert!(engine.cancel_cycle(&ctx, cycle.id, "hr_admin").is_err());
}

// =============================================================================
// Exports
// =============================================================================

#[test]
fn test_bank_file_for_processed_cycle() {
    let engine = engine();
    let ctx = TenantContext::new(Uuid::new_v4());
    engine
        .directory()
        .add(&ctx, employee("EMP002", dec("60000"), "2021-01-01"));
    let mut no_account = employee("EMP001", dec("30000"), "2021-01-01");
    no_account.bank_name = None;
    no_account.bank_account = None;
    engine.directory().add(&ctx, no_account);

    let cycle = engine.create_cycle(&ctx, june(), "hr_admin").unwrap();
    process(&engine, &ctx, cycle.id);

    let payslips = engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap();
    let file = bank_transfer_file(&payslips);
    let lines: Vec<&str> = file.lines().collect();
    assert_eq!(
        lines[0],
        "EmployeeCode,EmployeeName,BankName,AccountNumber,NetSalary,Reference"
    );
    // EMP001 has no account on file and is skipped.
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[1],
        "EMP002,\"Test EMP002\",MCB,0001EMP002,54580.00,PS-2025-06-EMP002"
    );
}

#[test]
fn test_summary_reports_cost_to_company() {
    let engine = engine();
    let ctx = TenantContext::new(Uuid::new_v4());
    engine
        .directory()
        .add(&ctx, employee("EMP001", dec("60000"), "2021-01-01"));
    let cycle = engine.create_cycle(&ctx, june(), "hr_admin").unwrap();
    process(&engine, &ctx, cycle.id);

    let stored = engine.cycle_store().find(&ctx, cycle.id).unwrap();
    let payslips = engine.payslip_store().for_cycle(&ctx, cycle.id).unwrap();
    let summary = PayrollSummary::for_cycle(&stored, &payslips);

    assert_eq!(summary.period, "June 2025");
    assert_eq!(summary.employee_count, 1);
    // Gross 60,000 + employer CSG 3,600 + NSF 1,500 + PRGF 2,580 + levy 900.
    assert_eq!(summary.cost_to_company, dec("68580.00"));
    assert_eq!(summary.departments.len(), 1);
    assert_eq!(summary.departments[0].department, "Operations");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_yaml_rate_table_matches_builtin() {
    let loader = ConfigLoader::load("./config/mauritius").expect("config should load");
    let yaml = loader.config();
    let builtin = StatutoryConfig::mauritius_2025();

    assert_eq!(yaml.csg.threshold, builtin.csg.threshold);
    assert_eq!(yaml.csg.employee_low, builtin.csg.employee_low);
    assert_eq!(yaml.nsf.employer, builtin.nsf.employer);
    assert_eq!(yaml.npf.employee, builtin.npf.employee);
    assert_eq!(yaml.prgf.cutover_date, builtin.prgf.cutover_date);
    assert_eq!(yaml.prgf.tiers.len(), builtin.prgf.tiers.len());
    assert_eq!(yaml.paye.annual_threshold, builtin.paye.annual_threshold);
    assert_eq!(yaml.standard_monthly_hours, builtin.standard_monthly_hours);
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    /// Net pay never exceeds gross, and the net identity holds exactly for
    /// any basic salary and allowance level.
    #[test]
    fn prop_net_identity(basic in 10_000u32..250_000, allowances in 0u32..50_000) {
        let emp = employee("EMP001", Decimal::from(basic), "2021-01-01");
        let inputs = PayslipInputs {
            components: payroll_engine::models::SalaryComponents {
                allowances: Decimal::from(allowances),
                deductions: Decimal::ZERO,
            },
            ..PayslipInputs::default()
        };
        let slip = assemble_payslip(
            Uuid::new_v4(),
            june(),
            &emp,
            &inputs,
            &StatutoryConfig::mauritius_2025(),
        );
        prop_assert_eq!(slip.net_salary, slip.total_gross - slip.total_deductions);
        prop_assert!(slip.net_salary <= slip.total_gross);
        prop_assert_eq!(slip.total_gross, Decimal::from(basic + allowances));
    }

    /// CSG tier selection is inclusive-low at the threshold.
    #[test]
    fn prop_csg_tier_boundary(gross in 1u32..100_000) {
        let config = StatutoryConfig::mauritius_2025();
        let csg = calculate_csg(Decimal::from(gross), &config);
        if Decimal::from(gross) <= config.csg.threshold {
            prop_assert_eq!(csg.employee_rate, config.csg.employee_low);
        } else {
            prop_assert_eq!(csg.employee_rate, config.csg.employee_high);
        }
    }

    /// PAYE is monotonic: more taxable income never means less tax.
    #[test]
    fn prop_paye_monotonic(a in 0u32..1_000_000, delta in 0u32..200_000) {
        let config = StatutoryConfig::mauritius_2025();
        let low = calculate_paye(Decimal::from(a), Decimal::ZERO, &config);
        let high = calculate_paye(Decimal::from(a + delta), Decimal::ZERO, &config);
        prop_assert!(high.annual_tax >= low.annual_tax);
        prop_assert!(high.monthly_tax >= low.monthly_tax);
    }
}
