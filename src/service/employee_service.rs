//! The employee service.
//!
//! [`EmployeeService`] validates candidate employees and forwards accepted
//! ones to its [`EmployeeRepository`]. It also offers read-through queries.

use std::sync::Arc;

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};

use crate::error::{ServiceError, ServiceResult};
use crate::models::{
    Employee, EmployeeId, EmployeeProfile, HourlyEmployee, PayRecord, SalariedEmployee,
};

use super::collation::sort_by_full_name;
use super::repository::EmployeeRepository;
use super::validation::validate_registration;

/// Validation gate in front of an employee repository.
///
/// The service holds no mutable state: every operation is one pass over
/// its arguments plus calls to the repository.
pub struct EmployeeService<R: ?Sized> {
    repository: Arc<R>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl<R: ?Sized> Clone for EmployeeService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    /// Creates a service using the system clock.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use personnel_manager::service::{EmployeeService, InMemoryEmployeeStore};
    ///
    /// let service = EmployeeService::new(Arc::new(InMemoryEmployeeStore::new()));
    /// assert!(service.list_all_employees()?.is_empty());
    /// # Ok::<(), personnel_manager::error::ServiceError>(())
    /// ```
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_clock(repository, Arc::new(DefaultClock))
    }

    /// Creates a service reading "today" from `clock`.
    pub fn with_clock(repository: Arc<R>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { repository, clock }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }

    /// Returns the first hourly employee whose name is exactly `name`.
    pub fn find_hourly_by_name(&self, name: &str) -> ServiceResult<Option<HourlyEmployee>> {
        Ok(self
            .repository
            .find_all_hourly()?
            .into_iter()
            .find(|e| e.name == name))
    }

    /// Fetches an hourly employee by id.
    pub fn find_hourly_by_id(&self, id: EmployeeId) -> ServiceResult<Option<HourlyEmployee>> {
        Ok(self.repository.find_hourly_by_id(id)?)
    }

    /// Fetches a salaried employee by id.
    pub fn find_salaried_by_id(&self, id: EmployeeId) -> ServiceResult<Option<SalariedEmployee>> {
        Ok(self.repository.find_salaried_by_id(id)?)
    }

    /// Validates and saves a salaried employee.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `employee` is `None` or its name or first name
    ///   is blank.
    /// - `BusinessRuleViolation` for the first rule the employee breaks.
    /// - `Repository` if saving fails.
    pub fn register_salaried(&self, employee: Option<SalariedEmployee>) -> ServiceResult<()> {
        let employee = employee.ok_or(ServiceError::InvalidArgument {
            argument: "employee",
        })?;
        employee.check_required()?;
        validate_registration(&employee, self.today())?;
        self.repository.save_salaried(employee)?;
        Ok(())
    }

    /// Validates and saves an hourly employee.
    ///
    /// Same rules and errors as [`EmployeeService::register_salaried`],
    /// checking the hourly rate instead of the monthly salary.
    pub fn register_hourly(&self, employee: Option<HourlyEmployee>) -> ServiceResult<()> {
        let employee = employee.ok_or(ServiceError::InvalidArgument {
            argument: "employee",
        })?;
        employee.check_required()?;
        validate_registration(&employee, self.today())?;
        self.repository.save_hourly(employee)?;
        Ok(())
    }

    /// Lists every employee, sorted by name and then first name.
    ///
    /// Names compare in French collation order, so accents and case do not
    /// push a name past `Z`. Hourly employees are gathered before salaried
    /// ones and the sort is stable, so exact ties keep that order.
    pub fn list_all_employees(&self) -> ServiceResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self
            .repository
            .find_all_hourly()?
            .into_iter()
            .map(Employee::from)
            .collect();
        employees.extend(
            self.repository
                .find_all_salaried()?
                .into_iter()
                .map(Employee::from),
        );

        sort_by_full_name(&mut employees);
        Ok(employees)
    }

    /// Pay records of an hourly employee for the month containing `month`.
    ///
    /// Always empty: pay is not computed yet.
    // TODO: compute hourly pay records once hours worked are tracked per month.
    pub fn hourly_pay_records(&self, _id: EmployeeId, _month: NaiveDate) -> Vec<PayRecord> {
        Vec::new()
    }

    /// Pay records of a salaried employee for the month containing `month`.
    ///
    /// Always empty: pay is not computed yet.
    pub fn salaried_pay_records(&self, _id: EmployeeId, _month: NaiveDate) -> Vec<PayRecord> {
        Vec::new()
    }
}
