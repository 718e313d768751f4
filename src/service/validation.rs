//! Registration rules shared by both kinds of employee.
//!
//! Checks run in a fixed order and the first failure is reported:
//! pay rate, earliest hire year, latest hire date, then permitted name
//! characters.

use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{BusinessRule, ServiceError, ServiceResult};
use crate::models::{EmployeeProfile, HourlyEmployee, SalariedEmployee};

use super::name_pattern::is_valid_full_name;

/// Hire dates must fall strictly after this year.
pub const EARLIEST_HIRE_YEAR: i32 = 1920;

/// How far ahead of today a hire date may be, in months.
pub const HIRE_DATE_MONTHS_AHEAD: u32 = 3;

/// An employee kind with a pay rate that must be positive.
pub trait Payable: EmployeeProfile {
    /// The rule reported when [`Payable::pay_rate`] is not positive.
    const RATE_RULE: BusinessRule;

    /// The monthly salary or hourly rate.
    fn pay_rate(&self) -> Decimal;
}

impl Payable for SalariedEmployee {
    const RATE_RULE: BusinessRule = BusinessRule::MonthlySalary;

    fn pay_rate(&self) -> Decimal {
        self.monthly_salary
    }
}

impl Payable for HourlyEmployee {
    const RATE_RULE: BusinessRule = BusinessRule::HourlyRate;

    fn pay_rate(&self) -> Decimal {
        self.hourly_rate
    }
}

/// Checks every registration rule against `employee`.
///
/// `today` is the calendar date the latest acceptable hire date is
/// computed from.
///
/// # Examples
///
/// ```
/// use personnel_manager::error::{BusinessRule, ServiceError};
/// use personnel_manager::models::HourlyEmployee;
/// use personnel_manager::service::validate_registration;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2018, 8, 1).unwrap();
/// let ouvrier = HourlyEmployee::new(
///     "Dupont",
///     "Gérard",
///     NaiveDate::from_ymd_opt(1920, 12, 31).unwrap(),
///     Decimal::new(12, 0),
/// );
///
/// assert_eq!(
///     validate_registration(&ouvrier, today),
///     Err(ServiceError::BusinessRuleViolation(BusinessRule::HireDateTooEarly))
/// );
/// ```
pub fn validate_registration<E: Payable>(employee: &E, today: NaiveDate) -> ServiceResult<()> {
    if employee.pay_rate() <= Decimal::ZERO {
        return Err(violation(E::RATE_RULE));
    }

    let hire_date = employee.hire_date();
    if hire_date.year() <= EARLIEST_HIRE_YEAR {
        return Err(violation(BusinessRule::HireDateTooEarly));
    }

    // No upper bound once today + 3 months leaves chrono's range.
    let latest = today.checked_add_months(Months::new(HIRE_DATE_MONTHS_AHEAD));
    if latest.is_some_and(|latest| hire_date > latest) {
        return Err(violation(BusinessRule::HireDateTooLate));
    }

    if !is_valid_full_name(employee.name(), employee.first_name()) {
        return Err(violation(BusinessRule::ForbiddenCharacters));
    }

    Ok(())
}

fn violation(rule: BusinessRule) -> ServiceError {
    ServiceError::BusinessRuleViolation(rule)
}
