//! DirectDraw Surface parsing and decoding.

pub mod constants;
pub mod decode_dds;
pub mod format_tables;
mod likely_dds;
pub mod parse_dds;

pub use decode_dds::decode_dds;
pub use likely_dds::likely_dds;
