//! Payroll Calculation Engine for Mauritius statutory compensation.
//!
//! This crate computes regulated employee pay under Mauritius law: statutory
//! contributions (CSG, NSF, NPF, PRGF, Training Levy, PAYE), earnings
//! aggregation from attendance and timesheet facts, payslip assembly, and the
//! payroll-cycle state machine that batches, approves and pays a month's run.

#![warn(missing_docs)]

pub mod assembler;
pub mod benefits;
pub mod config;
pub mod cycle;
pub mod earnings;
pub mod error;
pub mod export;
pub mod models;
pub mod repository;
pub mod statutory;
