use super::{constants::*, format_tables::*, parse_dds::*};
use texcodec_texture_common::{
    read_exact_or_truncated, read_header, warn_on_trailing_data, DecodeError, DecodeOutput,
    DecodeResult, DecodedTexture, FormatInfo, Target, TextureDescriptor, TextureSource,
};

/// Decodes a DDS texture (legacy or DX10 header) from `source`.
///
/// # Errors
///
/// - [`DecodeError::MalformedHeader`] if the header (or DX10 header) is short or the magic is wrong.
/// - [`DecodeError::UnsupportedFormat`] if no format table entry matches.
/// - [`DecodeError::TruncatedData`] if the stream ends before the payload does.
///
/// Bytes left after the payload produce a [`DecodeWarning::TrailingData`].
///
/// [`DecodeWarning::TrailingData`]: texcodec_texture_common::DecodeWarning::TrailingData
pub fn decode_dds<S>(source: &mut S) -> DecodeResult<DecodeOutput>
where
    S: TextureSource + ?Sized,
{
    let header_bytes = read_header::<DDS_HEADER_SIZE, _>(source, "DDS header is too short")?;
    let header = parse_dds_header(&header_bytes)
        .ok_or(DecodeError::MalformedHeader("missing 'DDS ' magic"))?;

    let (info, layers) = resolve_format(source, &header)?;
    let desc = describe_texture(&header, info, layers);

    let Some(data_size) = desc.payload_size() else {
        // No stream can hold a payload whose size overflows usize.
        let available = source.read_to_end()?.len();
        return Err(DecodeError::TruncatedData {
            expected: usize::MAX,
            actual: available,
        });
    };

    let payload = read_exact_or_truncated(source, data_size).inspect_err(|_| {
        log::warn!("Unexpected end of DDS data, expected {data_size} payload bytes");
    })?;

    let mut output = DecodeOutput::new(DecodedTexture::new(desc, payload));
    warn_on_trailing_data(source, "DDS", &mut output.warnings)?;

    log::debug!(
        "Decoded DDS {:?} {}x{}x{} ({} layers, {} faces, {} levels) as {:?}",
        desc.target,
        desc.width,
        desc.height,
        desc.depth,
        desc.layers,
        desc.faces,
        desc.mip_levels,
        desc.format
    );
    Ok(output)
}

/// Resolves the pixel format, reading the DX10 header when one is announced.
///
/// Returns the matched table entry and the number of array layers.
fn resolve_format<S>(source: &mut S, header: &DdsHeader) -> DecodeResult<(&'static FormatInfo, u32)>
where
    S: TextureSource + ?Sized,
{
    let pixel_format = &header.pixel_format;

    if pixel_format.has_dx10_header() {
        let dx10_bytes = read_header::<DX10_HEADER_SIZE, _>(source, "DX10 header is too short")?;
        let dx10 = parse_dx10_header(&dx10_bytes);
        let info = find_dxgi_format(dx10.dxgi_format)
            .ok_or_else(|| unsupported_format(dx10.dxgi_format))?;
        return Ok((info, dx10.array_size.max(1)));
    }

    let info = if pixel_format.has_fourcc() {
        find_fourcc_format(pixel_format.fourcc).ok_or_else(|| unsupported_format(pixel_format.fourcc))?
    } else {
        find_rgba_format(
            pixel_format.rgb_bit_count,
            pixel_format.red_mask,
            pixel_format.green_mask,
            pixel_format.blue_mask,
            pixel_format.alpha_mask,
        )
        .ok_or_else(|| {
            log::warn!(
                "Unrecognized DDS pixel masks: {} bits, r={:#010x} g={:#010x} b={:#010x} a={:#010x}",
                pixel_format.rgb_bit_count,
                pixel_format.red_mask,
                pixel_format.green_mask,
                pixel_format.blue_mask,
                pixel_format.alpha_mask
            );
            DecodeError::UnsupportedFormat {
                container: "DDS",
                code: Some(pixel_format.rgb_bit_count),
            }
        })?
    };

    Ok((info, 1))
}

fn unsupported_format(code: u32) -> DecodeError {
    log::warn!("Unrecognized DDS pixel format code {code:#x}");
    DecodeError::UnsupportedFormat {
        container: "DDS",
        code: Some(code),
    }
}

/// Derives the texture shape from the header flags.
fn describe_texture(header: &DdsHeader, info: &FormatInfo, layers: u32) -> TextureDescriptor {
    let (target, depth, faces) = if header.is_volume() {
        (Target::Target3D, header.depth.max(1), 1)
    } else if header.is_cubemap() {
        let target = if layers > 1 {
            Target::CubeMapArray
        } else {
            Target::CubeMap
        };
        (target, 1, header.cube_face_count())
    } else {
        let target = if layers > 1 {
            Target::Target2DArray
        } else {
            Target::Target2D
        };
        (target, 1, 1)
    };

    TextureDescriptor {
        target,
        format: info.texture_format,
        pixel_format: info.pixel_format,
        pixel_type: info.pixel_type,
        width: header.width,
        height: header.height,
        depth,
        layers,
        faces,
        mip_levels: header.mip_levels(),
        block_size: info.components,
        compressed: info.compressed,
        level_size_prefixed: false,
    }
}
