//! # Services Layer
//!
//! Business logic between the HTTP handlers and the [`Repository`] port:
//!
//! ```text
//! Handlers (HTTP) → CompanyService → Repository (SQLite)
//! ```
//!
//! Services return `Result<T, AppError>`. Lower-level failures are logged
//! here and wrapped into the error kind of the operation that failed.
//!
//! [`Repository`]: lib_core::Repository

pub mod company;

pub use company::CompanyService;
