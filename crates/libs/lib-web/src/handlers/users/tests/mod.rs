//! # User Handler Tests
//!
//! Registration and login through the full router.
