//! Radiance RGBE (`.hdr`) support for the texcodec texture readers.
//!
//! Both the "new" (per-channel) and "old" (repeat previous pixel) run-length
//! encodings are read. Pixels are expanded to RGBA32F with alpha fixed at 1.0
//! and rows are flipped from the file's top-down `-Y` order into bottom-up order.
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod hdr;

pub use hdr::decode_hdr;
