//! Tests for connection resolution.
//!
//! Responsibilities:
//! - Test builder validation and defaulting.
//! - Test connection URL parsing and its error ordering.
//! - Test environment variable handling.
//! - Test `.env` loading.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.

use std::sync::Mutex;

pub mod url_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
