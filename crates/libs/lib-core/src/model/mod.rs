//! # Model Layer
//!
//! Persistent records and their store.

pub mod store;

pub use store::models::{Company, CompanyForCreate, CompanyType, User, UserForCreate};
