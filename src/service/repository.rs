//! Persistence collaborator for the employee service.
//!
//! [`EmployeeRepository`] is the contract the service consumes. Storage is
//! out of scope for this crate apart from [`InMemoryEmployeeStore`], which
//! hosts the service in the HTTP layer and in tests.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::RepositoryError;
use crate::models::{EmployeeId, HourlyEmployee, SalariedEmployee};

/// Port for employee storage and retrieval.
///
/// Lists are returned in the store's own order; the service relies on that
/// order when several employees share a name.
#[cfg_attr(test, mockall::automock)]
pub trait EmployeeRepository: Send + Sync {
    /// Returns every hourly employee.
    fn find_all_hourly(&self) -> Result<Vec<HourlyEmployee>, RepositoryError>;

    /// Returns every salaried employee.
    fn find_all_salaried(&self) -> Result<Vec<SalariedEmployee>, RepositoryError>;

    /// Fetches one hourly employee, `None` if the id is unknown.
    fn find_hourly_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<HourlyEmployee>, RepositoryError>;

    /// Fetches one salaried employee, `None` if the id is unknown.
    fn find_salaried_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<SalariedEmployee>, RepositoryError>;

    /// Stores an hourly employee.
    fn save_hourly(&self, employee: HourlyEmployee) -> Result<(), RepositoryError>;

    /// Stores a salaried employee.
    fn save_salaried(&self, employee: SalariedEmployee) -> Result<(), RepositoryError>;
}

#[derive(Debug, Default)]
struct Tables {
    next_id: EmployeeId,
    hourly: Vec<HourlyEmployee>,
    salaried: Vec<SalariedEmployee>,
}

impl Tables {
    fn holds_hourly(&self, id: EmployeeId) -> bool {
        self.hourly.iter().any(|e| e.id == Some(id))
    }

    fn holds_salaried(&self, id: EmployeeId) -> bool {
        self.salaried.iter().any(|e| e.id == Some(id))
    }

    fn allocate_id(
        &mut self,
        requested: Option<EmployeeId>,
    ) -> Result<EmployeeId, RepositoryError> {
        let id = match requested {
            Some(id) => id,
            None => self
                .next_id
                .checked_add(1)
                .ok_or(RepositoryError::IdsExhausted)?,
        };
        self.next_id = self.next_id.max(id);
        Ok(id)
    }
}

/// Process-local employee store.
///
/// Ids are shared by both kinds of employee and allocated sequentially from
/// 1. Saving an employee whose id is already taken by the same kind replaces
/// the stored entry; otherwise entries are appended in save order. An
/// explicit id held by the other kind is refused with `IdConflict`, and
/// allocation past `u32::MAX` fails with `IdsExhausted`.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    tables: RwLock<Tables>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, RepositoryError> {
        self.tables.read().map_err(|_| poisoned())
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, RepositoryError> {
        self.tables.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable {
        message: "store lock poisoned".to_string(),
    }
}

impl EmployeeRepository for InMemoryEmployeeStore {
    fn find_all_hourly(&self) -> Result<Vec<HourlyEmployee>, RepositoryError> {
        Ok(self.read()?.hourly.clone())
    }

    fn find_all_salaried(&self) -> Result<Vec<SalariedEmployee>, RepositoryError> {
        Ok(self.read()?.salaried.clone())
    }

    fn find_hourly_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<HourlyEmployee>, RepositoryError> {
        Ok(self
            .read()?
            .hourly
            .iter()
            .find(|e| e.id == Some(id))
            .cloned())
    }

    fn find_salaried_by_id(
        &self,
        id: EmployeeId,
    ) -> Result<Option<SalariedEmployee>, RepositoryError> {
        Ok(self
            .read()?
            .salaried
            .iter()
            .find(|e| e.id == Some(id))
            .cloned())
    }

    fn save_hourly(&self, mut employee: HourlyEmployee) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        if let Some(id) = employee.id {
            if tables.holds_salaried(id) {
                return Err(RepositoryError::IdConflict { id });
            }
        }
        let id = tables.allocate_id(employee.id)?;
        employee.id = Some(id);
        match tables.hourly.iter().position(|e| e.id == Some(id)) {
            Some(index) => tables.hourly[index] = employee,
            None => tables.hourly.push(employee),
        }
        Ok(())
    }

    fn save_salaried(&self, mut employee: SalariedEmployee) -> Result<(), RepositoryError> {
        let mut tables = self.write()?;
        if let Some(id) = employee.id {
            if tables.holds_hourly(id) {
                return Err(RepositoryError::IdConflict { id });
            }
        }
        let id = tables.allocate_id(employee.id)?;
        employee.id = Some(id);
        match tables.salaried.iter().position(|e| e.id == Some(id)) {
            Some(index) => tables.salaried[index] = employee,
            None => tables.salaried.push(employee),
        }
        Ok(())
    }
}
