//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Menu path splitting tests
//! - Tree resolution tests
//! - Type tests (Command, Icon, MenuItem, etc.)

#[cfg(test)]
mod path_tests;
