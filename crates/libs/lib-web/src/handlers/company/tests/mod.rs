//! # Company Handler Tests
//!
//! Exercised through the full router, so the auth gate and error mapping
//! are covered too.
