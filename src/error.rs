//! Error types for the personnel manager.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the service and its collaborator can report.

use std::fmt;

use thiserror::Error;

use crate::models::EmployeeId;

/// A business rule checked before an employee is registered.
///
/// The `Display` output is the user-facing message for the rule and must
/// not be reworded: callers surface it verbatim.
///
/// # Example
///
/// ```
/// use personnel_manager::error::BusinessRule;
///
/// assert_eq!(BusinessRule::MonthlySalary.to_string(), "Salaire mensuel invalide");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessRule {
    /// The monthly salary of a salaried employee must be positive.
    MonthlySalary,
    /// The hourly rate of an hourly employee must be positive.
    HourlyRate,
    /// The hire date must fall after 1920.
    HireDateTooEarly,
    /// The hire date must be at most three months from today.
    HireDateTooLate,
    /// The concatenated name contains forbidden characters.
    ForbiddenCharacters,
}

impl BusinessRule {
    /// Returns the fixed message reported when this rule is violated.
    pub fn message(self) -> &'static str {
        match self {
            Self::MonthlySalary => "Salaire mensuel invalide",
            Self::HourlyRate => "Taux horaire invalide",
            Self::HireDateTooEarly => "La date d'embauche doit être > 1920",
            Self::HireDateTooLate => {
                "La date d'embauche doit être inférieure à 3 mois à partir d'aujourdhui"
            }
            Self::ForbiddenCharacters => "Entrée invalide caractères spéciaux interdits",
        }
    }
}

impl fmt::Display for BusinessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Errors raised by [`EmployeeRepository`](crate::service::EmployeeRepository)
/// implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store could not be reached or its state is unusable.
    #[error("employee store unavailable: {message}")]
    Unavailable {
        /// A description of the failure.
        message: String,
    },

    /// Every id has been handed out.
    #[error("employee id space exhausted")]
    IdsExhausted,

    /// An explicit id already belongs to an employee of the other kind.
    #[error("employee id {id} is already in use")]
    IdConflict {
        /// The conflicting id.
        id: EmployeeId,
    },
}

/// Errors raised when an employee record is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A required text field is empty or only whitespace.
    #[error("{field} is required")]
    MissingField {
        /// The name of the blank field.
        field: &'static str,
    },
}

/// Errors raised while loading a roster file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Roster file was not found at the specified path.
    #[error("Roster file not found: {path}")]
    NotFound {
        /// The path that was not found.
        path: String,
    },

    /// Roster file could not be parsed.
    #[error("Failed to parse roster file '{path}': {message}")]
    Parse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Seeding the store from the roster failed.
    #[error("Failed to seed roster: {0}")]
    Seed(#[from] RepositoryError),
}

/// The main error type of the employee service.
///
/// # Example
///
/// ```
/// use personnel_manager::error::{BusinessRule, ServiceError};
///
/// let error = ServiceError::BusinessRuleViolation(BusinessRule::HourlyRate);
/// assert_eq!(error.to_string(), "Taux horaire invalide");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A required argument was absent, or a required field of it was blank.
    /// This is a defect at the call site.
    #[error("Invalid argument: {argument} must be provided")]
    InvalidArgument {
        /// The name of the missing argument.
        argument: &'static str,
    },

    /// The input was well formed but rejected by a business rule.
    #[error("{0}")]
    BusinessRuleViolation(BusinessRule),

    /// The persistence collaborator failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// Returns the violated rule, if this is a business rule violation.
    pub fn business_rule(&self) -> Option<BusinessRule> {
        match self {
            Self::BusinessRuleViolation(rule) => Some(*rule),
            _ => None,
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::MissingField { field } => Self::InvalidArgument { argument: field },
        }
    }
}

/// A type alias for Results that return ServiceError.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_messages() {
        assert_eq!(
            BusinessRule::MonthlySalary.to_string(),
            "Salaire mensuel invalide"
        );
        assert_eq!(BusinessRule::HourlyRate.to_string(), "Taux horaire invalide");
    }

    #[test]
    fn test_hire_date_messages() {
        assert_eq!(
            BusinessRule::HireDateTooEarly.to_string(),
            "La date d'embauche doit être > 1920"
        );
        assert_eq!(
            BusinessRule::HireDateTooLate.to_string(),
            "La date d'embauche doit être inférieure à 3 mois à partir d'aujourdhui"
        );
    }

    #[test]
    fn test_business_rule_violation_displays_rule_message() {
        let error = ServiceError::BusinessRuleViolation(BusinessRule::ForbiddenCharacters);
        assert_eq!(
            error.to_string(),
            "Entrée invalide caractères spéciaux interdits"
        );
        assert_eq!(
            error.business_rule(),
            Some(BusinessRule::ForbiddenCharacters)
        );
    }

    #[test]
    fn test_invalid_argument_displays_argument() {
        let error = ServiceError::InvalidArgument {
            argument: "employee",
        };
        assert_eq!(
            error.to_string(),
            "Invalid argument: employee must be provided"
        );
        assert_eq!(error.business_rule(), None);
    }

    #[test]
    fn test_repository_error_is_transparent() {
        let error: ServiceError = RepositoryError::Unavailable {
            message: "lock poisoned".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "employee store unavailable: lock poisoned");
    }

    #[test]
    fn test_missing_field_becomes_invalid_argument() {
        let error = ModelError::MissingField { field: "first_name" };
        assert_eq!(error.to_string(), "first_name is required");

        let error: ServiceError = error.into();
        assert_eq!(
            error,
            ServiceError::InvalidArgument {
                argument: "first_name"
            }
        );
    }

    #[test]
    fn test_id_errors_display() {
        assert_eq!(
            RepositoryError::IdsExhausted.to_string(),
            "employee id space exhausted"
        );
        assert_eq!(
            RepositoryError::IdConflict { id: 1 }.to_string(),
            "employee id 1 is already in use"
        );
    }

    #[test]
    fn test_config_errors_display_path() {
        let error = ConfigError::NotFound {
            path: "/missing/roster.yaml".to_string(),
        };
        assert_eq!(error.to_string(), "Roster file not found: /missing/roster.yaml");

        let error = ConfigError::Parse {
            path: "/config/roster.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse roster file '/config/roster.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ServiceError>();
        assert_error::<RepositoryError>();
        assert_error::<ConfigError>();
        assert_error::<ModelError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_repository_error() -> Result<(), RepositoryError> {
            Err(RepositoryError::Unavailable {
                message: "offline".to_string(),
            })
        }

        fn propagates_error() -> ServiceResult<()> {
            returns_repository_error()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(ServiceError::Repository(_))
        ));
    }
}
