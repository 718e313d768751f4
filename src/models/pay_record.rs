//! Pay record model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// A pay statement for one employee over one period.
///
/// The service exposes queries returning pay records but does not compute
/// them yet, so no code in this crate builds one outside of tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayRecord {
    /// The employee the statement belongs to.
    pub employee_id: EmployeeId,
    /// The first day of the period (inclusive).
    pub period_start: NaiveDate,
    /// The last day of the period (inclusive).
    pub period_end: NaiveDate,
    /// Gross amount paid for the period.
    pub gross_amount: Decimal,
    /// Hours worked in the period, for hourly workers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<Decimal>,
}
