//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for calculating a business day's
//! salaries and summarizing payroll over a period.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PeriodRequest, SalaryRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
