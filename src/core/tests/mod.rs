//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Binding line parsing
//! - Availability lookup
//! - Key catalog resolution

#[cfg(test)]
mod availability_tests;
