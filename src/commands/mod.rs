//! Command implementations
//!
//! Each command is a host for the session core or a thin wrapper around it.

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_guess};
pub use simple::{SimpleSummary, run_simple};
