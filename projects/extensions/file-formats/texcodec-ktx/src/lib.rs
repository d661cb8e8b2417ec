//! Khronos KTX 1.1 (`.ktx`) support for the texcodec texture readers.
//!
//! Only block compressed 2D and cube map textures are read. The payload is
//! returned with the per-level `imageSize` fields still in place, which is
//! signalled through
//! [`TextureDescriptor::level_size_prefixed`](texcodec_texture_common::TextureDescriptor::level_size_prefixed).
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod ktx;

pub use ktx::{decode_ktx, likely_ktx};
