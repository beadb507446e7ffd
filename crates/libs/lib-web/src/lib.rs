//! # Web Library
//!
//! HTTP handlers, middleware, the company service, and server startup.

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod server;

#[cfg(test)]
pub(crate) mod test_utils;

pub use server::{create_router, start_server, AppState};
