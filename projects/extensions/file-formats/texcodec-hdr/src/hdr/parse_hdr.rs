use texcodec_texture_common::{DecodeError, DecodeResult};

/// First line of every Radiance file.
pub const HDR_SIGNATURE: &[u8; HDR_SIGNATURE_SIZE] = b"#?RADIANCE\n";
pub const HDR_SIGNATURE_SIZE: usize = 11;

/// The only pixel format Radiance files are written in.
pub const HDR_FORMAT_RGBE: &[u8] = b"32-bit_rle_rgbe";

/// Image size taken from the resolution line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HdrHeader {
    pub width: u32,
    pub height: u32,
}

/// Parses the text header that follows the signature: variable lines up to an
/// empty line, then the resolution line.
///
/// Returns the header and the number of bytes consumed from `data`.
pub fn parse_hdr_header(data: &[u8]) -> DecodeResult<(HdrHeader, usize)> {
    let mut pos = 0;
    loop {
        let line = next_line(data, &mut pos).ok_or(DecodeError::MalformedHeader(
            "HDR header is not terminated by an empty line",
        ))?;
        if line.is_empty() {
            break;
        }

        if let Some(format) = line.strip_prefix(b"FORMAT=") {
            let format = format.trim_ascii();
            if format != HDR_FORMAT_RGBE {
                log::warn!(
                    "HDR format '{}' is not supported",
                    core::str::from_utf8(format).unwrap_or("<binary>")
                );
                return Err(DecodeError::UnsupportedFormat {
                    container: "HDR",
                    code: None,
                });
            }
        }
    }

    let line = next_line(data, &mut pos).ok_or(DecodeError::MalformedHeader(
        "HDR resolution line is not terminated",
    ))?;
    let (width, height) = parse_resolution(line)?;
    Ok((HdrHeader { width, height }, pos))
}

/// Returns the line starting at `pos` (without its `\n`) and moves past it.
fn next_line<'a>(data: &'a [u8], pos: &mut usize) -> Option<&'a [u8]> {
    let rest = data.get(*pos..)?;
    let len = rest.iter().position(|&b| b == b'\n')?;
    *pos += len + 1;
    Some(&rest[..len])
}

/// Parses `-Y <height> +X <width>`, the standard top-down orientation.
fn parse_resolution(line: &[u8]) -> DecodeResult<(u32, u32)> {
    let text = core::str::from_utf8(line)
        .map_err(|_| DecodeError::MalformedHeader("HDR resolution line is not text"))?;

    let mut fields = text.split_ascii_whitespace();
    let (Some(y_axis), Some(height), Some(x_axis), Some(width), None) = (
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
        fields.next(),
    ) else {
        return Err(DecodeError::MalformedHeader(
            "HDR resolution line must have 4 fields",
        ));
    };

    if y_axis != "-Y" || x_axis != "+X" {
        log::warn!("Unsupported HDR resolution string '{text}'");
        return Err(DecodeError::UnsupportedFeature("HDR orientation other than -Y +X"));
    }

    let dimension = |value: &str| {
        value
            .parse::<i32>()
            .ok()
            .filter(|&v| v > 0)
            .map(|v| v as u32)
            .ok_or(DecodeError::MalformedHeader("invalid HDR resolution"))
    };
    Ok((dimension(width)?, dimension(height)?))
}
