//! # Centralized Error Handling
//!
//! This module defines the application-wide error type [`AppError`] used by the
//! service layer and handlers. Each domain operation has its own error kind so
//! callers can tell which step failed; the attached string is the underlying
//! cause and is only ever logged.
//!
//! ## HTTP Mapping
//!
//! - [`InvalidInput`](AppError::InvalidInput) → 400 Bad Request
//! - [`FindOneUser`](AppError::FindOneUser), [`WrongPassword`](AppError::WrongPassword) → 401 Unauthorized
//! - [`CompanyNotFound`](AppError::CompanyNotFound) → 404 Not Found
//! - everything else → 500 Internal Server Error
//!
//! Error bodies have the shape `{"code": <status>, "message": <text>}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::dto::ErrorResponse;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error during startup or environment loading.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("error with creating company due a database issue: {0}")]
    CreateCompany(String),

    #[error("error with getting company due a database issue: {0}")]
    GetCompany(String),

    #[error("error with updating company due a database issue: {0}")]
    UpdateCompany(String),

    #[error("error with deleting company due a database issue: {0}")]
    DeleteCompany(String),

    /// No company row exists for the id.
    #[error("company {0} not found")]
    CompanyNotFound(Uuid),

    #[error("error with creating user: {0}")]
    CreateUser(String),

    /// User lookup during login failed (unknown name or store failure).
    #[error("error with finding user: {0}")]
    FindOneUser(String),

    #[error("error with using wrong password")]
    WrongPassword,

    #[error("error with creation of JWT token of user: {0}")]
    CreateJwtToken(String),

    /// Malformed or invalid request data.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal server error (unexpected failures).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::FindOneUser(_) | AppError::WrongPassword => StatusCode::UNAUTHORIZED,
            AppError::CompanyNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::CreateCompany(_)
            | AppError::GetCompany(_)
            | AppError::UpdateCompany(_)
            | AppError::DeleteCompany(_)
            | AppError::CreateUser(_)
            | AppError::CreateJwtToken(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-facing error message.
    ///
    /// Underlying causes stay in the server logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg) => msg.clone(),
            AppError::CompanyNotFound(id) => format!("company {id} not found"),
            AppError::CreateCompany(_) => {
                "error with creating company due a database issue".to_string()
            }
            AppError::GetCompany(_) => "error with getting company due a database issue".to_string(),
            AppError::UpdateCompany(_) => {
                "error with updating company due a database issue".to_string()
            }
            AppError::DeleteCompany(_) => {
                "error with deleting company due a database issue".to_string()
            }
            AppError::CreateUser(_) => "error with creating user".to_string(),
            AppError::FindOneUser(_) => "error with finding user".to_string(),
            AppError::WrongPassword => "error with using wrong password".to_string(),
            AppError::CreateJwtToken(_) => "error with creation of JWT token of user".to_string(),
            AppError::Config(_) | AppError::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

/// Implement Axum's `IntoResponse` for automatic error handling.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Server error: {}", self);
        } else {
            tracing::debug!("Client error: {}", self);
        }

        let body = Json(ErrorResponse {
            code: status.as_u16(),
            message: self.user_message(),
        });

        (status, body).into_response()
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
