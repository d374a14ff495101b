//! Shared utilities used across the codebase
//!
//! - [`list`] - List formatting, dedup and sorting

pub mod list;
