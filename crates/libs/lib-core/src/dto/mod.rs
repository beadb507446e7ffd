//! # Data Transfer Objects (DTOs)
//!
//! Request and response bodies of the REST API, plus the [`Validate`] rule
//! each request body must pass before it reaches the service layer.

pub mod auth;
pub mod company;

pub use auth::*;
pub use company::*;

use serde::{Deserialize, Serialize};

/// Field-level checks on a decoded request body.
pub trait Validate {
    /// Returns a human-readable description of the first failing rule.
    fn validate(&self) -> Result<(), String>;
}

/// Standard error response for all API endpoints.
///
/// `code` repeats the HTTP status of the response.
///
/// ```json
/// { "code": 400, "message": "name cannot be empty" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}
