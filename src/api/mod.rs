//! HTTP API module for the personnel manager.
//!
//! This module exposes the employee service as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MonthQuery, NameQuery, RegisterHourlyRequest, RegisterSalariedRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
