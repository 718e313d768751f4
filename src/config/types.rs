//! Roster file types.
//!
//! This module contains the structures deserialized from a roster YAML
//! file.

use serde::Deserialize;

use crate::models::{HourlyEmployee, SalariedEmployee};

/// Employees listed in a roster file.
///
/// ```text
/// hourly:
///   - name: Lucky
///     first_name: Luke
///     hire_date: 2018-08-01
///     hourly_rate: "15"
/// salaried:
///   - name: Boole
///     first_name: Bill
///     hire_date: 2018-08-01
///     monthly_salary: "2050"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Roster {
    /// Hourly workers, in file order.
    #[serde(default)]
    pub hourly: Vec<HourlyEmployee>,
    /// Salaried staff, in file order.
    #[serde(default)]
    pub salaried: Vec<SalariedEmployee>,
}

impl Roster {
    /// Returns the number of employees listed.
    pub fn len(&self) -> usize {
        self.hourly.len() + self.salaried.len()
    }

    /// Returns true if the roster lists no employee.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
