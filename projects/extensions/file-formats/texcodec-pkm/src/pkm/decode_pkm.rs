use super::parse_pkm::*;
use texcodec_texture_common::{
    read_header, DecodeError, DecodeOutput, DecodeResult, DecodedTexture, Target,
    TextureDescriptor, TextureSource,
};

/// Decodes a PKM texture from `source`.
///
/// The whole rest of the stream is the payload, and it must be exactly one
/// level of blocks covering the padded dimensions. The returned texture
/// reports the padded width and height.
///
/// # Errors
///
/// - [`DecodeError::MalformedHeader`] for a short header, bad magic, or padded
///   dimensions that are zero or not multiples of 4.
/// - [`DecodeError::UnsupportedFormat`] for an unknown version "20" texture type.
/// - [`DecodeError::UnexpectedDataSize`] if the payload length is not exact.
pub fn decode_pkm<S>(source: &mut S) -> DecodeResult<DecodeOutput>
where
    S: TextureSource + ?Sized,
{
    let header_bytes = read_header::<PKM_HEADER_SIZE, _>(source, "PKM header is too short")?;
    let header = parse_pkm_header(&header_bytes)
        .ok_or(DecodeError::MalformedHeader("missing 'PKM ' magic"))?;

    let info = header.format().ok_or_else(|| {
        log::warn!("Unrecognized PKM texture type {}", header.texture_type);
        DecodeError::UnsupportedFormat {
            container: "PKM",
            code: Some(u32::from(header.texture_type)),
        }
    })?;

    let (width, height) = (header.padded_width, header.padded_height);
    if width == 0 || height == 0 || width % 4 != 0 || height % 4 != 0 {
        return Err(DecodeError::MalformedHeader(
            "PKM padded dimensions must be non-zero multiples of 4",
        ));
    }

    let expected = (width as usize / 4) * (height as usize / 4) * info.components as usize;
    let payload = source.read_to_end()?;
    if payload.len() != expected {
        log::warn!(
            "Unexpected PKM data size, expected {expected} bytes, got {}",
            payload.len()
        );
        return Err(DecodeError::UnexpectedDataSize {
            expected,
            actual: payload.len(),
        });
    }

    let desc = TextureDescriptor {
        target: Target::Target2D,
        format: info.texture_format,
        pixel_format: info.pixel_format,
        pixel_type: info.pixel_type,
        width: u32::from(width),
        height: u32::from(height),
        depth: 1,
        layers: 1,
        faces: 1,
        mip_levels: 1,
        block_size: info.components,
        compressed: true,
        level_size_prefixed: false,
    };

    log::debug!("Decoded PKM {width}x{height} as {:?}", desc.format);
    Ok(DecodeOutput::new(DecodedTexture::new(desc, payload)))
}
