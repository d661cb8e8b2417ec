//! Common test imports and utilities for PKM tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::pkm::parse_pkm::PKM_MAGIC;

/// Builds a PKM header. All multi-byte fields are big-endian.
pub fn pkm_header(version: &[u8; 2], texture_type: u16, padded: (u16, u16), size: (u16, u16)) -> Vec<u8> {
    let mut data = Vec::with_capacity(16);
    data.extend_from_slice(PKM_MAGIC);
    data.extend_from_slice(version);
    for field in [texture_type, padded.0, padded.1, size.0, size.1] {
        data.extend_from_slice(&field.to_be_bytes());
    }
    data
}

/// A PKM header followed by `payload_len` pattern bytes.
pub fn pkm_file(version: &[u8; 2], texture_type: u16, padded: (u16, u16), payload_len: usize) -> Vec<u8> {
    let mut data = pkm_header(version, texture_type, padded, padded);
    data.extend((0..payload_len).map(|x| (x % 256) as u8));
    data
}
