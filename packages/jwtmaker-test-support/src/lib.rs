//! Test support for the jwtmaker workspace
//!
//! Provides unified logging initialization and the RSA/EC key fixtures used
//! by both unit tests and integration tests.

pub mod fixtures;
pub mod logging;
