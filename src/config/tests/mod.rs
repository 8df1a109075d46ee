//! Config module tests
//!
//! Contains test suites for config discovery:
//! - Search path construction from the environment
//! - Locating explicit and discovered config files

#[cfg(test)]
mod locator_tests;
