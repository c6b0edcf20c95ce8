//! Common utilities and shared types for the ARGM workspace.
//!
//! This crate provides node identifiers, search configuration, and the common
//! test cases used across the matching crates.

mod config;
mod node;
mod test_cases;

pub use crate::config::*;
pub use crate::node::*;
pub use crate::test_cases::*;
