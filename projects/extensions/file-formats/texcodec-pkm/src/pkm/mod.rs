//! PKM parsing and decoding.

pub mod decode_pkm;
pub mod parse_pkm;

pub use decode_pkm::decode_pkm;
pub use parse_pkm::likely_pkm;
