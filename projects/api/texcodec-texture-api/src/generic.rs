//! Fallback for formats without a dedicated container reader.

use alloc::vec::Vec;
use texcodec_texture_common::{
    DecodeError, DecodeResult, DecodedTexture, PixelFormat, PixelType, Target, TextureDescriptor,
    TextureFormat,
};

/// Bytes per RGBA8 texel.
const RGBA8_BLOCK_SIZE: usize = 4;

/// An image decoded by a [`GenericImageDecoder`]: tightly packed RGBA8 rows, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericImage {
    pub width: u32,
    pub height: u32,
    pub rgba8: Vec<u8>,
}

/// Decoder for image formats (PNG, JPEG, ...) the container readers do not handle.
///
/// Implemented by the embedding application, which usually already has an image codec.
pub trait GenericImageDecoder {
    /// Decodes `bytes`, using `suffix` (lowercase, no dot) as a format hint.
    ///
    /// Returns [`None`] if the data could not be decoded.
    fn decode(&self, bytes: &[u8], suffix: &str) -> Option<GenericImage>;
}

impl<F> GenericImageDecoder for F
where
    F: Fn(&[u8], &str) -> Option<GenericImage>,
{
    fn decode(&self, bytes: &[u8], suffix: &str) -> Option<GenericImage> {
        self(bytes, suffix)
    }
}

/// Wraps a generic image as an uncompressed 2D RGBA8 texture.
///
/// # Errors
///
/// [`DecodeError::UnexpectedDataSize`] if the pixel buffer does not match the dimensions.
pub fn generic_image_to_texture(image: GenericImage, mirrored: bool) -> DecodeResult<DecodedTexture> {
    let row_bytes = (image.width as usize).saturating_mul(RGBA8_BLOCK_SIZE);
    let expected = row_bytes.saturating_mul(image.height as usize);
    if image.width == 0 || image.height == 0 || image.rgba8.len() != expected {
        return Err(DecodeError::UnexpectedDataSize {
            expected,
            actual: image.rgba8.len(),
        });
    }

    let mut payload = image.rgba8;
    if mirrored {
        mirror_rows(&mut payload, row_bytes);
    }

    let desc = TextureDescriptor {
        target: Target::Target2D,
        format: TextureFormat::Rgba8Unorm,
        pixel_format: PixelFormat::Rgba,
        pixel_type: PixelType::UInt8,
        width: image.width,
        height: image.height,
        depth: 1,
        layers: 1,
        faces: 1,
        mip_levels: 1,
        block_size: RGBA8_BLOCK_SIZE as u32,
        compressed: false,
        level_size_prefixed: false,
    };
    Ok(DecodedTexture::new(desc, payload))
}

/// Flips the image vertically.
fn mirror_rows(pixels: &mut [u8], row_bytes: usize) {
    let rows = pixels.len() / row_bytes;
    for y in 0..rows / 2 {
        let (top, bottom) = pixels.split_at_mut((rows - 1 - y) * row_bytes);
        top[y * row_bytes..(y + 1) * row_bytes].swap_with_slice(&mut bottom[..row_bytes]);
    }
}
