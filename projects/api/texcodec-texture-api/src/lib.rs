//! High-level texture loading for texcodec.
//!
//! This crate ties the container readers together:
//!
//! - [`ImageFormat`] picks a reader from a file suffix.
//! - [`load_texture`] runs it over any [`TextureSource`], falling back to a
//!   caller supplied [`GenericImageDecoder`] for formats without a dedicated reader.
//! - `load_texture_from_path` (feature `file-io`) does the same for a file on disk.
//!
//! # Example
//!
//! ```
//! use texcodec_texture_api::{load_texture, GenericImage, LoadOptions};
//! use texcodec_texture_common::SliceSource;
//!
//! // A stand-in for a real PNG decoder.
//! let png = |bytes: &[u8], _suffix: &str| {
//!     Some(GenericImage { width: 1, height: 1, rgba8: bytes.get(..4)?.to_vec() })
//! };
//!
//! let output = load_texture(&mut SliceSource::new(&[1, 2, 3, 4]), "png", &LoadOptions::default(), Some(&png)).unwrap();
//! assert_eq!(output.texture.width(), 1);
//! ```
//!
//! [`TextureSource`]: texcodec_texture_common::TextureSource

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod generic;
pub mod image_format;
pub mod load;
pub mod options;

#[cfg(feature = "file-io")]
pub mod file_io;

#[cfg(test)]
pub mod test_prelude;

pub use generic::{generic_image_to_texture, GenericImage, GenericImageDecoder};
pub use image_format::ImageFormat;
pub use load::{load_texture, LoadedTexture};
pub use options::LoadOptions;

#[cfg(feature = "file-io")]
pub use file_io::{load_texture_from_path, FileIoError, FileOperationError, FileOperationResult};
