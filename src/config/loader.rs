//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type for reading a roster YAML
//! file and seeding an employee repository with it.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::service::EmployeeRepository;

use super::types::Roster;

/// Loads a roster file and seeds repositories from it.
///
/// Seeding bypasses the registration rules: roster entries are trusted
/// existing records, some of which predate the current rules. Blank names
/// are still refused when the roster is parsed.
///
/// # Example
///
/// ```no_run
/// use personnel_manager::config::RosterLoader;
/// use personnel_manager::service::InMemoryEmployeeStore;
///
/// let loader = RosterLoader::load("./config/roster.yaml")?;
/// let store = InMemoryEmployeeStore::new();
/// loader.seed(&store)?;
/// # Ok::<(), personnel_manager::error::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RosterLoader {
    roster: Roster,
}

impl RosterLoader {
    /// Loads a roster from the YAML file at `path`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the file cannot be read.
    /// - `Parse` if the file is not a valid roster.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses a roster from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document is an empty roster.
        if content.trim().is_empty() {
            return Ok(Self {
                roster: Roster::default(),
            });
        }

        let roster = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { roster })
    }

    /// Returns the loaded roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Saves every roster entry into `repository`, hourly workers first.
    ///
    /// Returns the number of employees saved.
    pub fn seed<R>(&self, repository: &R) -> Result<usize, ConfigError>
    where
        R: EmployeeRepository + ?Sized,
    {
        for employee in &self.roster.hourly {
            repository.save_hourly(employee.clone())?;
        }
        for employee in &self.roster.salaried {
            repository.save_salaried(employee.clone())?;
        }
        Ok(self.roster.len())
    }
}
