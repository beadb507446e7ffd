//! # HTTP Request Handlers
//!
//! Axum handlers, grouped by resource. Handlers decode and validate input,
//! call [`CompanyService`](crate::services::CompanyService), and turn the
//! result into a response. Errors are [`AppError`](lib_core::AppError)s and
//! render as `{"code", "message"}` JSON.
//!
//! - **[`company`]**
//!   - `GET    /v1/companies/{id}` - fetch one company
//!   - `POST   /v1/companies` - create a company *(token)*
//!   - `PUT    /v1/companies` - replace a company, id in the body *(token)*
//!   - `DELETE /v1/companies/{id}` - delete a company *(token)*
//! - **[`users`]**
//!   - `POST /v1/users` - register
//!   - `POST /v1/login` - exchange credentials for a bearer token
//! - **[`health`]**
//!   - `GET /health`

pub mod company;
pub mod users;

/// Liveness probe.
pub async fn health() -> &'static str {
    "OK"
}
