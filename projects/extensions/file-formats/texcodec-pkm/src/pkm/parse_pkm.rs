use texcodec_texture_common::{FormatInfo, TextureFormat as TF};

pub const PKM_MAGIC: &[u8; 4] = b"PKM ";
pub const PKM_HEADER_SIZE: usize = 16;

/// Version string of the ETC2-capable header revision.
pub const PKM_VERSION_2: &[u8; 2] = b"20";

/// `etcpack` texture type codes understood in version "20" files.
pub static PKM_V2_FORMATS: [(u16, FormatInfo); 8] = [
    (0, FormatInfo::compressed(TF::Rgb8Etc1, 8)),
    (1, FormatInfo::compressed(TF::Rgb8Etc2, 8)),
    (3, FormatInfo::compressed(TF::Rgba8Etc2Eac, 16)),
    (4, FormatInfo::compressed(TF::Rgb8PunchThroughAlpha1Etc2, 8)),
    (5, FormatInfo::compressed(TF::R11EacUnorm, 8)),
    (6, FormatInfo::compressed(TF::Rg11EacUnorm, 16)),
    (7, FormatInfo::compressed(TF::R11EacSnorm, 8)),
    (8, FormatInfo::compressed(TF::Rg11EacSnorm, 16)),
];

/// Format of every file whose version is not "20".
pub static PKM_V1_FORMAT: FormatInfo = FormatInfo::compressed(TF::Rgb8Etc1, 8);

/// The 16-byte PKM header. Numeric fields are stored big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PkmHeader {
    pub version: [u8; 2],
    pub texture_type: u16,
    /// Width rounded up to a multiple of 4.
    pub padded_width: u16,
    /// Height rounded up to a multiple of 4.
    pub padded_height: u16,
    pub width: u16,
    pub height: u16,
}

impl PkmHeader {
    /// Resolves the texture type. Files other than version "20" are always ETC1.
    pub fn format(&self) -> Option<&'static FormatInfo> {
        if &self.version != PKM_VERSION_2 {
            return Some(&PKM_V1_FORMAT);
        }

        PKM_V2_FORMATS
            .iter()
            .find(|(code, _)| *code == self.texture_type)
            .map(|(_, info)| info)
    }
}

/// Determines if the given data starts with the `PKM ` magic.
#[inline(always)]
pub fn likely_pkm(data: &[u8]) -> bool {
    data.len() >= PKM_HEADER_SIZE && data.starts_with(PKM_MAGIC)
}

/// Parses the 16-byte PKM header.
///
/// # Return
///
/// `None` if the magic does not match.
pub fn parse_pkm_header(data: &[u8; PKM_HEADER_SIZE]) -> Option<PkmHeader> {
    if !likely_pkm(data) {
        return None;
    }

    let be16 = |offset: usize| u16::from_be_bytes([data[offset], data[offset + 1]]);
    Some(PkmHeader {
        version: [data[4], data[5]],
        texture_type: be16(6),
        padded_width: be16(8),
        padded_height: be16(10),
        width: be16(12),
        height: be16(14),
    })
}
