//! Block size classification for formats identified only by their [`TextureFormat`].

use crate::format::TextureFormat;

/// Returns the number of bytes per 4x4 block for a compressed [`TextureFormat`].
///
/// The 8 byte formats are ETC1, ETC2 RGB (linear and sRGB), ETC2 punch-through
/// alpha (linear and sRGB), single channel R11 EAC (unorm and snorm) and RGB DXT1.
/// Every other format is treated as 16 bytes per block.
///
/// Note that only the RGB flavour of DXT1 is classified as 8 bytes here;
/// [`TextureFormat::RgbaDxt1`] and the sRGB DXT1 variants fall into the 16 byte default.
#[inline]
pub const fn block_size_for_texture_format(format: TextureFormat) -> u32 {
    match format {
        TextureFormat::Rgb8Etc1
        | TextureFormat::Rgb8Etc2
        | TextureFormat::Srgb8Etc2
        | TextureFormat::Rgb8PunchThroughAlpha1Etc2
        | TextureFormat::Srgb8PunchThroughAlpha1Etc2
        | TextureFormat::R11EacUnorm
        | TextureFormat::R11EacSnorm
        | TextureFormat::RgbDxt1 => 8,
        _ => 16,
    }
}
