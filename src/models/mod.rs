//! Core data models for the personnel manager.
//!
//! This module contains the employee kinds and the pay record type.

mod employee;
mod pay_record;

pub use employee::{Employee, EmployeeId, EmployeeProfile, HourlyEmployee, SalariedEmployee};
pub use pay_record::PayRecord;
