//! KTX 1.1 parsing and decoding.

pub mod constants;
pub mod decode_ktx;
pub mod parse_ktx;

pub use decode_ktx::decode_ktx;
pub use parse_ktx::likely_ktx;
