//! Radiance HDR parsing and decoding.

pub mod decode_hdr;
pub mod parse_hdr;
pub mod rgbe;
pub mod scanline;

pub use decode_hdr::decode_hdr;
