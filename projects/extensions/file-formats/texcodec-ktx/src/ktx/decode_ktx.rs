use super::{constants::*, parse_ktx::*};
use texcodec_texture_common::{
    block_size_for_texture_format, read_exact_or_truncated, read_header, warn_on_trailing_data,
    DecodeError, DecodeOutput, DecodeResult, DecodedTexture, PixelFormat, PixelType, Target,
    TextureDescriptor, TextureFormat, TextureSource,
};

/// Decodes a block compressed 2D or cube map KTX 1.1 texture from `source`.
///
/// The returned payload keeps the 4-byte `imageSize` field in front of each mip level.
///
/// # Errors
///
/// - [`DecodeError::MalformedHeader`] for a short header, bad identifier, bad
///   endianness marker or a face count other than 1 or 6.
/// - [`DecodeError::UnsupportedFeature`] for uncompressed, array or 3D textures.
/// - [`DecodeError::UnsupportedFormat`] if `glInternalFormat` is unknown.
/// - [`DecodeError::TruncatedData`] if the key/value data or the payload is cut short.
pub fn decode_ktx<S>(source: &mut S) -> DecodeResult<DecodeOutput>
where
    S: TextureSource + ?Sized,
{
    let header_bytes = read_header::<KTX_HEADER_SIZE, _>(source, "KTX header is too short")?;
    let header = parse_ktx_header(&header_bytes)
        .ok_or(DecodeError::MalformedHeader("bad KTX identifier or endianness"))?;

    check_supported(&header)?;

    // Key/value metadata is not interpreted.
    read_exact_or_truncated(source, header.bytes_of_key_value_data as usize)?;

    let format = TextureFormat::from_gl(header.gl_internal_format).ok_or_else(|| {
        log::warn!(
            "Unrecognized KTX glInternalFormat {:#x}",
            header.gl_internal_format
        );
        DecodeError::UnsupportedFormat {
            container: "KTX",
            code: Some(header.gl_internal_format),
        }
    })?;

    let desc = TextureDescriptor {
        target: if header.number_of_faces == CUBE_FACE_COUNT {
            Target::CubeMap
        } else {
            Target::Target2D
        },
        format,
        pixel_format: PixelFormat::NoSourceFormat,
        pixel_type: PixelType::NoPixelType,
        width: header.pixel_width,
        height: header.pixel_height,
        depth: 1,
        layers: 1,
        faces: header.number_of_faces,
        mip_levels: header.mip_levels(),
        block_size: block_size_for_texture_format(format),
        compressed: true,
        level_size_prefixed: true,
    };

    let data_size = desc.payload_size().ok_or(DecodeError::TruncatedData {
        expected: usize::MAX,
        actual: 0,
    })?;
    let payload = read_exact_or_truncated(source, data_size).inspect_err(|_| {
        log::warn!("Unexpected end of KTX data, expected {data_size} payload bytes");
    })?;

    let mut output = DecodeOutput::new(DecodedTexture::new(desc, payload));
    warn_on_trailing_data(source, "KTX", &mut output.warnings)?;

    log::debug!(
        "Decoded KTX {:?} {}x{} ({} faces, {} levels) as {:?}",
        desc.target,
        desc.width,
        desc.height,
        desc.faces,
        desc.mip_levels,
        desc.format
    );
    Ok(output)
}

fn check_supported(header: &KtxHeader) -> DecodeResult<()> {
    if !header.is_compressed() {
        log::warn!("Uncompressed KTX texture data is not supported");
        return Err(DecodeError::UnsupportedFeature("uncompressed KTX data"));
    }
    if header.number_of_array_elements != 0 {
        log::warn!("Array KTX textures are not supported");
        return Err(DecodeError::UnsupportedFeature("KTX array textures"));
    }
    if header.pixel_depth != 0 {
        log::warn!("Only 2D and cube KTX textures are supported");
        return Err(DecodeError::UnsupportedFeature("3D KTX textures"));
    }
    if header.number_of_faces != 1 && header.number_of_faces != CUBE_FACE_COUNT {
        return Err(DecodeError::MalformedHeader("KTX face count must be 1 or 6"));
    }
    Ok(())
}
