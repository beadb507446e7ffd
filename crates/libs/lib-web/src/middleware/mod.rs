//! # Middleware
//!
//! Axum middleware applied by [`crate::server::create_router`].
//!
//! ## Modules
//!
//! - **[`mw_auth`]**: bearer token check for company mutations
//! - **[`mw_logging`]**: method, URI, status and latency of every request
//! - **[`mw_panic`]**: turns handler panics into plain 500 responses
//! - **[`mw_req_stamp`]**: request id stamping (`X-Request-ID`)

// region: --- Modules
pub mod mw_auth;
pub mod mw_logging;
pub mod mw_panic;
pub mod mw_req_stamp;
// endregion: --- Modules

// region: --- Re-exports
pub use mw_auth::require_auth;
pub use mw_logging::log_requests;
pub use mw_panic::handle_panic;
pub use mw_req_stamp::{stamp_req, RequestStamp};
// endregion: --- Re-exports
