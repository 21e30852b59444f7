//! Window module tests
//!
//! Contains test suites for the embedding surface:
//! - Builder operation tests (menus, items, separators)
//! - Toolbar mirroring and toggle lookup tests
//! - Outline snapshot tests

#[cfg(test)]
mod outline_tests;
#[cfg(test)]
mod toolbar_tests;
