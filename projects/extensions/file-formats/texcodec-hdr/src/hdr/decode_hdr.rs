use super::{parse_hdr::*, rgbe::rgbe_to_rgba32f, scanline::*};
use alloc::vec::Vec;
use likely_stable::unlikely;
use texcodec_texture_common::{
    read_header, DecodeError, DecodeOutput, DecodeResult, DecodedTexture, PixelFormat, PixelType,
    Target, TextureDescriptor, TextureFormat, TextureSource,
};

/// Bytes per decoded RGBA32F texel.
pub const HDR_BLOCK_SIZE: usize = 4 * core::mem::size_of::<f32>();

/// Largest image the decoder allocates for, in texels (1 GiB of RGBA32F).
pub const MAX_HDR_TEXELS: usize = 1 << 26;

/// Smallest encoded scanline: one RGBE pixel or the channel-run marker.
const MIN_SCANLINE_SIZE: usize = 4;

/// Decodes a Radiance RGBE image from `source` into RGBA32F texels.
///
/// Floats are stored in native byte order. Row 0 of the payload is the last
/// scanline of the file.
///
/// # Errors
///
/// - [`DecodeError::MalformedHeader`] for a bad signature, an unterminated
///   header, an invalid resolution line or more than [`MAX_HDR_TEXELS`] texels.
/// - [`DecodeError::UnsupportedFormat`] (without a code) if `FORMAT=` names
///   anything but `32-bit_rle_rgbe`.
/// - [`DecodeError::UnsupportedFeature`] for orientations other than `-Y h +X w`.
/// - [`DecodeError::TruncatedData`] if the body is too short for the declared
///   number of scanlines, or ends inside one.
/// - [`DecodeError::CorruptData`] for bad scanlines, or if the output cannot
///   be allocated.
pub fn decode_hdr<S>(source: &mut S) -> DecodeResult<DecodeOutput>
where
    S: TextureSource + ?Sized,
{
    let signature = read_header::<HDR_SIGNATURE_SIZE, _>(source, "HDR signature is too short")?;
    if &signature != HDR_SIGNATURE {
        return Err(DecodeError::MalformedHeader("missing '#?RADIANCE' signature"));
    }

    let data = source.read_to_end()?;
    let (header, header_len) = parse_hdr_header(&data)?;
    let (width, height) = (header.width as usize, header.height as usize);

    width
        .checked_mul(height)
        .filter(|&texels| texels <= MAX_HDR_TEXELS)
        .ok_or(DecodeError::MalformedHeader("HDR resolution is too large"))?;
    let row_bytes = width * HDR_BLOCK_SIZE;

    let body = &data[header_len..];
    let minimum = height * MIN_SCANLINE_SIZE;
    if unlikely(body.len() < minimum) {
        return Err(DecodeError::TruncatedData {
            expected: minimum,
            actual: body.len(),
        });
    }

    let mut reader = ScanlineReader::new(body);
    let mut row = Vec::new();
    let mut payload = Vec::new();
    for y in 0..height {
        decode_scanline(&mut reader, width, &mut row).inspect_err(|e| {
            log::warn!("Failed to decode HDR scanline {y}: {e}");
        })?;

        payload
            .try_reserve(row_bytes)
            .map_err(|_| DecodeError::CorruptData("HDR image does not fit in memory"))?;
        for &pixel in &row {
            for channel in rgbe_to_rgba32f(pixel) {
                payload.extend_from_slice(&channel.to_ne_bytes());
            }
        }
    }
    flip_rows(&mut payload, row_bytes);

    let desc = TextureDescriptor {
        target: Target::Target2D,
        format: TextureFormat::Rgba32F,
        pixel_format: PixelFormat::Rgba,
        pixel_type: PixelType::Float32,
        width: header.width,
        height: header.height,
        depth: 1,
        layers: 1,
        faces: 1,
        mip_levels: 1,
        block_size: HDR_BLOCK_SIZE as u32,
        compressed: false,
        level_size_prefixed: false,
    };

    log::debug!("Decoded HDR {}x{}", header.width, header.height);
    Ok(DecodeOutput::new(DecodedTexture::new(desc, payload)))
}

/// Reverses the order of the `row_bytes`-sized rows in `payload`.
fn flip_rows(payload: &mut [u8], row_bytes: usize) {
    if row_bytes == 0 {
        return;
    }
    let rows = payload.len() / row_bytes;
    for y in 0..rows / 2 {
        let (top, bottom) = payload.split_at_mut((rows - 1 - y) * row_bytes);
        top[y * row_bytes..(y + 1) * row_bytes].swap_with_slice(&mut bottom[..row_bytes]);
    }
}
