//! Common test imports and utilities for HDR tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

pub use crate::hdr::rgbe::Rgbe;
use crate::hdr::parse_hdr::HDR_SIGNATURE;

pub const FORMAT_LINE: &str = "FORMAT=32-bit_rle_rgbe\n";

/// Assembles a Radiance file: signature, `header_lines`, the blank line,
/// the resolution line and `body`.
pub fn hdr_file(header_lines: &str, resolution: &str, body: &[u8]) -> Vec<u8> {
    let mut data = HDR_SIGNATURE.to_vec();
    data.extend_from_slice(header_lines.as_bytes());
    data.push(b'\n');
    data.extend_from_slice(resolution.as_bytes());
    data.push(b'\n');
    data.extend_from_slice(body);
    data
}

/// Encodes a scanline with the per-channel scheme: runs for 3 or more equal
/// bytes, literal spans otherwise.
pub fn encode_channel_runs(row: &[Rgbe]) -> Vec<u8> {
    let width = row.len();
    let mut out = vec![2, 2, (width >> 8) as u8, width as u8];

    for channel in 0..4 {
        let values: Vec<u8> = row.iter().map(|pixel| pixel[channel]).collect();
        let mut x = 0;
        while x < width {
            let run = values[x..]
                .iter()
                .take(127)
                .take_while(|&&v| v == values[x])
                .count();
            if run >= 3 {
                out.push(0x80 | run as u8);
                out.push(values[x]);
                x += run;
            } else {
                let start = x;
                while x < width
                    && x - start < 128
                    && !(x + 2 < width && values[x] == values[x + 1] && values[x] == values[x + 2])
                {
                    x += 1;
                }
                if x == start {
                    continue;
                }
                out.push((x - start) as u8);
                out.extend_from_slice(&values[start..x]);
            }
        }
    }
    out
}
