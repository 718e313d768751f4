//! Employee registration and queries.
//!
//! This module contains the [`EmployeeService`], the registration rules it
//! enforces, and the [`EmployeeRepository`] collaborator it persists
//! through.

mod collation;
mod employee_service;
mod name_pattern;
mod repository;
mod validation;

pub use employee_service::EmployeeService;
pub use name_pattern::{NAME_PATTERN, is_valid_full_name};
pub use repository::{EmployeeRepository, InMemoryEmployeeStore};
pub use validation::{
    EARLIEST_HIRE_YEAR, HIRE_DATE_MONTHS_AHEAD, Payable, validate_registration,
};
