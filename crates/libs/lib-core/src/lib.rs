//! # Core Library
//!
//! Core models, database, configuration, and error types for the company API.

pub mod config;
pub mod error;
pub mod model;
pub mod dto;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use model::store::{create_pool, run_migrations, DbPool, Repository, SqliteStore, StoreError};
