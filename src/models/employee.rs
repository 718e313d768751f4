//! Employee models.
//!
//! This module defines the two kinds of employees handled by the service,
//! the [`EmployeeProfile`] capability they share, and the [`Employee`] enum
//! used wherever both kinds appear together.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Identifier assigned to an employee by the persistence collaborator.
pub type EmployeeId = u32;

/// The fields every kind of employee carries.
pub trait EmployeeProfile {
    /// The employee's family name.
    fn name(&self) -> &str;
    /// The employee's first name.
    fn first_name(&self) -> &str;
    /// The date the employee was (or will be) hired.
    fn hire_date(&self) -> NaiveDate;

    /// Checks that the name and first name are not blank.
    ///
    /// # Errors
    ///
    /// `MissingField` naming the first blank field.
    fn check_required(&self) -> Result<(), ModelError> {
        if self.name().trim().is_empty() {
            return Err(ModelError::MissingField { field: "name" });
        }
        if self.first_name().trim().is_empty() {
            return Err(ModelError::MissingField {
                field: "first_name",
            });
        }
        Ok(())
    }
}

/// An employee compensated by a fixed monthly salary.
///
/// Deserialization rejects a blank name or first name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SalariedEmployeeFields")]
pub struct SalariedEmployee {
    /// Identifier assigned on save, `None` before.
    pub id: Option<EmployeeId>,
    /// Family name.
    pub name: String,
    /// First name.
    pub first_name: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Gross monthly salary.
    pub monthly_salary: Decimal,
}

impl SalariedEmployee {
    /// Creates a salaried employee that has not been saved yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use personnel_manager::models::{EmployeeProfile, SalariedEmployee};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let cadre = SalariedEmployee::new(
    ///     "Boole",
    ///     "Bill",
    ///     NaiveDate::from_ymd_opt(2020, 7, 30).unwrap(),
    ///     Decimal::new(2050, 0),
    /// );
    /// assert_eq!(cadre.name(), "Boole");
    /// assert!(cadre.id.is_none());
    /// ```
    pub fn new(
        name: impl Into<String>,
        first_name: impl Into<String>,
        hire_date: NaiveDate,
        monthly_salary: Decimal,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            first_name: first_name.into(),
            hire_date,
            monthly_salary,
        }
    }

    /// Returns a copy carrying the given id.
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Deserialize)]
struct SalariedEmployeeFields {
    #[serde(default)]
    id: Option<EmployeeId>,
    name: String,
    first_name: String,
    hire_date: NaiveDate,
    monthly_salary: Decimal,
}

impl TryFrom<SalariedEmployeeFields> for SalariedEmployee {
    type Error = ModelError;

    fn try_from(fields: SalariedEmployeeFields) -> Result<Self, Self::Error> {
        let employee = Self {
            id: fields.id,
            name: fields.name,
            first_name: fields.first_name,
            hire_date: fields.hire_date,
            monthly_salary: fields.monthly_salary,
        };
        employee.check_required()?;
        Ok(employee)
    }
}

impl EmployeeProfile for SalariedEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }
}

/// An employee compensated by an hourly rate.
///
/// Deserialization rejects a blank name or first name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HourlyEmployeeFields")]
pub struct HourlyEmployee {
    /// Identifier assigned on save, `None` before.
    pub id: Option<EmployeeId>,
    /// Family name.
    pub name: String,
    /// First name.
    pub first_name: String,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Gross hourly rate.
    pub hourly_rate: Decimal,
}

impl HourlyEmployee {
    /// Creates an hourly employee that has not been saved yet.
    pub fn new(
        name: impl Into<String>,
        first_name: impl Into<String>,
        hire_date: NaiveDate,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            first_name: first_name.into(),
            hire_date,
            hourly_rate,
        }
    }

    /// Returns a copy carrying the given id.
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }
}

#[derive(Deserialize)]
struct HourlyEmployeeFields {
    #[serde(default)]
    id: Option<EmployeeId>,
    name: String,
    first_name: String,
    hire_date: NaiveDate,
    hourly_rate: Decimal,
}

impl TryFrom<HourlyEmployeeFields> for HourlyEmployee {
    type Error = ModelError;

    fn try_from(fields: HourlyEmployeeFields) -> Result<Self, Self::Error> {
        let employee = Self {
            id: fields.id,
            name: fields.name,
            first_name: fields.first_name,
            hire_date: fields.hire_date,
            hourly_rate: fields.hourly_rate,
        };
        employee.check_required()?;
        Ok(employee)
    }
}

impl EmployeeProfile for HourlyEmployee {
    fn name(&self) -> &str {
        &self.name
    }

    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }
}

/// Either kind of employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Employee {
    /// An hourly worker.
    Hourly(HourlyEmployee),
    /// A salaried staff member.
    Salaried(SalariedEmployee),
}

impl Employee {
    /// Returns the id assigned by the collaborator, if any.
    pub fn id(&self) -> Option<EmployeeId> {
        match self {
            Self::Hourly(e) => e.id,
            Self::Salaried(e) => e.id,
        }
    }

    /// Returns true if this is an hourly worker.
    pub fn is_hourly(&self) -> bool {
        matches!(self, Self::Hourly(_))
    }
}

impl EmployeeProfile for Employee {
    fn name(&self) -> &str {
        match self {
            Self::Hourly(e) => e.name(),
            Self::Salaried(e) => e.name(),
        }
    }

    fn first_name(&self) -> &str {
        match self {
            Self::Hourly(e) => e.first_name(),
            Self::Salaried(e) => e.first_name(),
        }
    }

    fn hire_date(&self) -> NaiveDate {
        match self {
            Self::Hourly(e) => e.hire_date(),
            Self::Salaried(e) => e.hire_date(),
        }
    }
}

impl From<HourlyEmployee> for Employee {
    fn from(employee: HourlyEmployee) -> Self {
        Self::Hourly(employee)
    }
}

impl From<SalariedEmployee> for Employee {
    fn from(employee: SalariedEmployee) -> Self {
        Self::Salaried(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn hire_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 8, 1).unwrap()
    }

    #[test]
    fn test_deserialize_hourly_employee() {
        let json = r#"{
            "name": "Lucky",
            "first_name": "Luke",
            "hire_date": "2018-08-01",
            "hourly_rate": "15.50"
        }"#;

        let employee: HourlyEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, None);
        assert_eq!(employee.name, "Lucky");
        assert_eq!(employee.first_name, "Luke");
        assert_eq!(employee.hire_date, hire_date());
        assert_eq!(employee.hourly_rate, Decimal::new(1550, 2));
    }

    #[test]
    fn test_deserialize_salaried_employee_with_id() {
        let json = r#"{
            "id": 7,
            "name": "Boole",
            "first_name": "Bill",
            "hire_date": "2018-08-01",
            "monthly_salary": "2050"
        }"#;

        let employee: SalariedEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, Some(7));
        assert_eq!(employee.monthly_salary, Decimal::new(2050, 0));
    }

    #[test]
    fn test_employee_enum_is_tagged_by_kind() {
        let employee: Employee =
            HourlyEmployee::new("Doc", "Brown", hire_date(), Decimal::new(15, 0)).into();
        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["kind"], "hourly");
        assert_eq!(value["name"], "Doc");

        let back: Employee = serde_json::from_value(value).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn test_profile_accessors_dispatch_on_kind() {
        let salaried: Employee =
            SalariedEmployee::new("Marty", "McFly", hire_date(), Decimal::new(2050, 0))
                .with_id(3)
                .into();
        assert_eq!(salaried.name(), "Marty");
        assert_eq!(salaried.first_name(), "McFly");
        assert_eq!(salaried.hire_date(), hire_date());
        assert_eq!(salaried.id(), Some(3));
        assert!(!salaried.is_hourly());
    }

    #[rstest]
    #[case("", "Luke", "name")]
    #[case("Lucky", "", "first_name")]
    #[case("   ", "Luke", "name")]
    #[case("Lucky", "\t", "first_name")]
    #[case("", "", "name")]
    fn test_name_and_first_name_are_required(
        #[case] name: &str,
        #[case] first_name: &str,
        #[case] field: &'static str,
    ) {
        let expected = Err(ModelError::MissingField { field });
        let ouvrier = HourlyEmployee::new(name, first_name, hire_date(), Decimal::ONE);
        let cadre = SalariedEmployee::new(name, first_name, hire_date(), Decimal::ONE);

        assert_eq!(ouvrier.check_required(), expected);
        assert_eq!(cadre.check_required(), expected);
        assert_eq!(Employee::from(cadre).check_required(), expected);
    }

    #[test]
    fn test_present_names_pass_required_check() {
        let ouvrier = HourlyEmployee::new("Lucky", "Luke", hire_date(), Decimal::ONE);
        assert_eq!(ouvrier.check_required(), Ok(()));
    }

    #[test]
    fn test_deserialize_rejects_blank_names() {
        let json = r#"{
            "name": "",
            "first_name": "Luke",
            "hire_date": "2018-08-01",
            "hourly_rate": "15"
        }"#;
        let error = serde_json::from_str::<HourlyEmployee>(json).unwrap_err();
        assert!(error.to_string().contains("name is required"));

        let json = r#"{
            "kind": "salaried",
            "name": "Boole",
            "first_name": " ",
            "hire_date": "2018-08-01",
            "monthly_salary": "2050"
        }"#;
        let error = serde_json::from_str::<Employee>(json).unwrap_err();
        assert!(error.to_string().contains("first_name is required"));
    }
}
