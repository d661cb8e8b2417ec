//! DirectDraw Surface (`.dds`) support for the texcodec texture readers.
//!
//! Both legacy headers (FourCC codes and channel masks) and the DX10 extension
//! header are understood. The decoder validates the header, resolves the format
//! and hands back the raw payload with its layout described by a
//! [`DecodedTexture`](texcodec_texture_common::DecodedTexture).
//!
//! ```no_run
//! use texcodec_dds::decode_dds;
//! use texcodec_texture_common::SliceSource;
//!
//! let bytes = std::fs::read("texture.dds").unwrap();
//! let output = decode_dds(&mut SliceSource::new(&bytes)).unwrap();
//! println!("{}x{}", output.texture.width(), output.texture.height());
//! ```
#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod dds;

pub use dds::{decode_dds, likely_dds};
