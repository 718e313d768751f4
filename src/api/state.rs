//! Application state for the personnel manager API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::{EmployeeRepository, EmployeeService};

/// Shared application state.
///
/// Holds the employee service every handler delegates to.
#[derive(Clone)]
pub struct AppState {
    service: EmployeeService<dyn EmployeeRepository>,
}

impl AppState {
    /// Creates application state over `repository`, using the system clock.
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self::from_service(EmployeeService::new(repository))
    }

    /// Creates application state around an existing service.
    pub fn from_service(service: EmployeeService<dyn EmployeeRepository>) -> Self {
        Self { service }
    }

    /// Returns the employee service.
    pub fn service(&self) -> &EmployeeService<dyn EmployeeRepository> {
        &self.service
    }
}
