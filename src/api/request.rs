//! Request types for the personnel manager API.
//!
//! This module defines the JSON bodies accepted by the registration
//! endpoints and the query strings of the lookup endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{HourlyEmployee, SalariedEmployee};

/// Request body for `POST /employees/hourly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterHourlyRequest {
    /// Family name.
    pub name: String,
    /// First name.
    pub first_name: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Gross hourly rate.
    pub hourly_rate: Decimal,
}

/// Request body for `POST /employees/salaried`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSalariedRequest {
    /// Family name.
    pub name: String,
    /// First name.
    pub first_name: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Gross monthly salary.
    pub monthly_salary: Decimal,
}

/// Query string of `GET /employees/hourly`.
#[derive(Debug, Clone, Deserialize)]
pub struct NameQuery {
    /// The exact family name to look for.
    pub name: Option<String>,
}

/// Query string of the pay-record endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthQuery {
    /// Any date within the requested month.
    pub month: NaiveDate,
}

/// Returns the first required name field that is blank, if any.
fn blank_name_field(name: &str, first_name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        Some("name")
    } else if first_name.trim().is_empty() {
        Some("first_name")
    } else {
        None
    }
}

impl RegisterHourlyRequest {
    /// Returns the first required name field that is blank, if any.
    pub fn blank_field(&self) -> Option<&'static str> {
        blank_name_field(&self.name, &self.first_name)
    }
}

impl RegisterSalariedRequest {
    /// Returns the first required name field that is blank, if any.
    pub fn blank_field(&self) -> Option<&'static str> {
        blank_name_field(&self.name, &self.first_name)
    }
}

impl From<RegisterHourlyRequest> for HourlyEmployee {
    fn from(req: RegisterHourlyRequest) -> Self {
        HourlyEmployee::new(req.name, req.first_name, req.hire_date, req.hourly_rate)
    }
}

impl From<RegisterSalariedRequest> for SalariedEmployee {
    fn from(req: RegisterSalariedRequest) -> Self {
        SalariedEmployee::new(req.name, req.first_name, req.hire_date, req.monthly_salary)
    }
}
