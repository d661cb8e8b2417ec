//! Shared building blocks for the texcodec texture container readers.
//!
//! This crate holds everything the individual format crates (DDS, KTX, PKM, HDR)
//! agree on:
//!
//! - [`DecodedTexture`]: the uniform description of a decoded texture plus its payload.
//! - [`TextureFormat`], [`PixelFormat`], [`PixelType`] and [`FormatInfo`]: the format vocabulary.
//! - [`TextureSource`]: the byte stream the decoders pull from.
//! - [`DecodeError`] / [`DecodeWarning`]: how decoding fails, or succeeds with caveats.
//!
//! # Example
//!
//! ```
//! use texcodec_texture_common::{SliceSource, TextureSource};
//!
//! let mut source = SliceSource::new(&[1, 2, 3]);
//! assert_eq!(source.read_bytes(2).unwrap(), vec![1, 2]);
//! assert!(!source.at_end().unwrap());
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod block_size;
pub mod error;
pub mod format;
pub mod source;
pub mod texture;

#[cfg(test)]
pub mod test_prelude;

pub use block_size::block_size_for_texture_format;
pub use error::{DecodeError, DecodeResult, DecodeWarning};
pub use format::{FormatInfo, PixelFormat, PixelType, Target, TextureFormat};
pub use source::{read_exact_or_truncated, read_header, warn_on_trailing_data, SliceSource, TextureSource};
pub use texture::{DecodeOutput, DecodedTexture, TextureDescriptor};

#[cfg(feature = "std")]
pub use source::ReadSource;
