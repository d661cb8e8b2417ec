//! Common test imports and utilities for binary JSON tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{
    boxed::Box,
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

// External crates commonly used in tests
pub use rstest::rstest;
pub use serde_json::json;
