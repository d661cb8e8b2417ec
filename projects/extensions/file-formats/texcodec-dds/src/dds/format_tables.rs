//! Static lookup tables mapping raw DDS pixel format descriptions to [`FormatInfo`].
//!
//! All tables are scanned linearly and the first match wins, so entry order matters.

use super::constants::*;
use texcodec_texture_common::format::{FormatInfo, PixelFormat, PixelType, TextureFormat};

/// An uncompressed legacy format, identified by its channel bit masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbaMaskFormat {
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
    pub info: FormatInfo,
}

/// A legacy format identified by the FourCC field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FourCcFormat {
    pub fourcc: u32,
    pub info: FormatInfo,
}

/// A DX10 format identified by its `DXGI_FORMAT` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DxgiFormat {
    pub dxgi_format: u32,
    pub info: FormatInfo,
}

const fn mask(r: u32, g: u32, b: u32, a: u32, info: FormatInfo) -> RgbaMaskFormat {
    RgbaMaskFormat {
        red_mask: r,
        green_mask: g,
        blue_mask: b,
        alpha_mask: a,
        info,
    }
}

const fn plain(pixel_format: PixelFormat, format: TextureFormat, pixel_type: PixelType, components: u32) -> FormatInfo {
    FormatInfo::uncompressed(pixel_format, format, pixel_type, components)
}

const fn dxgi(dxgi_format: u32, info: FormatInfo) -> DxgiFormat {
    DxgiFormat { dxgi_format, info }
}

use PixelFormat as PF;
use PixelType as PT;
use TextureFormat as TF;

/// Uncompressed formats matched by `(components * 8 == rgbBitCount, r, g, b, a)`.
pub static RGBA_FORMATS: &[RgbaMaskFormat] = &[
    // unorm formats
    mask(0x000000ff, 0x0000ff00, 0x00ff0000, 0xff000000, plain(PF::Rgba, TF::Rgba8Unorm, PT::UInt8, 4)),
    mask(0x00ff0000, 0x0000ff00, 0x000000ff, 0xff000000, plain(PF::Bgra, TF::Rgba8Unorm, PT::UInt8, 4)),
    mask(0x000000ff, 0x0000ff00, 0x00ff0000, 0x00000000, plain(PF::Rgba, TF::Rgba8Unorm, PT::UInt8, 4)),
    mask(0x00ff0000, 0x0000ff00, 0x000000ff, 0x00000000, plain(PF::Bgra, TF::Rgba8Unorm, PT::UInt8, 4)),
    mask(0x000000ff, 0x0000ff00, 0x00ff0000, 0x00000000, plain(PF::Rgb, TF::Rgb8Unorm, PT::UInt8, 3)),
    mask(0x00ff0000, 0x0000ff00, 0x000000ff, 0x00000000, plain(PF::Bgr, TF::Rgb8Unorm, PT::UInt8, 3)),
    // packed formats
    mask(0x0000f800, 0x000007e0, 0x0000001f, 0x00000000, plain(PF::Rgb, TF::R5G6B5, PT::UInt16R5G6B5, 2)),
    mask(0x00007c00, 0x000003e0, 0x0000001f, 0x00008000, plain(PF::Rgba, TF::Rgb5A1, PT::UInt16Rgb5A1, 2)),
    mask(0x00000f00, 0x000000f0, 0x0000000f, 0x0000f000, plain(PF::Rgba, TF::Rgba4, PT::UInt16Rgba4, 2)),
    mask(0x000000e0, 0x0000001c, 0x00000003, 0x00000000, plain(PF::Rgb, TF::Rg3B2, PT::UInt8Rg3B2, 1)),
    mask(0x3ff00000, 0x000ffc00, 0x000003ff, 0xc0000000, plain(PF::Rgba, TF::Rgb10A2, PT::UInt32Rgb10A2, 4)),
    // luminance / luminance-alpha
    mask(0x000000ff, 0x000000ff, 0x000000ff, 0x00000000, plain(PF::Red, TF::R8Unorm, PT::UInt8, 1)),
    mask(0x000000ff, 0x00000000, 0x00000000, 0x00000000, plain(PF::Red, TF::R8Unorm, PT::UInt8, 1)),
    mask(0x000000ff, 0x000000ff, 0x000000ff, 0x0000ff00, plain(PF::Rg, TF::Rg8Unorm, PT::UInt8, 2)),
    mask(0x000000ff, 0x00000000, 0x00000000, 0x0000ff00, plain(PF::Rg, TF::Rg8Unorm, PT::UInt8, 2)),
];

/// Legacy FourCC formats, including the D3DFMT float codes stored in the FourCC field.
pub static FOURCC_FORMATS: &[FourCcFormat] = &[
    FourCcFormat { fourcc: FOURCC_DXT1, info: FormatInfo::compressed(TF::RgbaDxt1, 8) },
    FourCcFormat { fourcc: FOURCC_DXT3, info: FormatInfo::compressed(TF::RgbaDxt3, 16) },
    FourCcFormat { fourcc: FOURCC_DXT5, info: FormatInfo::compressed(TF::RgbaDxt5, 16) },
    FourCcFormat { fourcc: FOURCC_ATI1, info: FormatInfo::compressed(TF::RAti1nUnorm, 8) },
    FourCcFormat { fourcc: FOURCC_ATI2, info: FormatInfo::compressed(TF::RgAti2nUnorm, 16) },
    FourCcFormat { fourcc: D3DFMT_R16F, info: plain(PF::Red, TF::R16F, PT::Float16, 2) },
    FourCcFormat { fourcc: D3DFMT_G16R16F, info: plain(PF::Rg, TF::Rg16F, PT::Float16, 4) },
    FourCcFormat { fourcc: D3DFMT_A16B16G16R16F, info: plain(PF::Rgba, TF::Rgba16F, PT::Float16, 8) },
    FourCcFormat { fourcc: D3DFMT_R32F, info: plain(PF::Red, TF::R32F, PT::Float32, 4) },
    FourCcFormat { fourcc: D3DFMT_G32R32F, info: plain(PF::Rg, TF::Rg32F, PT::Float32, 8) },
    FourCcFormat { fourcc: D3DFMT_A32B32G32R32F, info: plain(PF::Rgba, TF::Rgba32F, PT::Float32, 16) },
];

/// Formats addressable through the DX10 extension header.
pub static DX10_FORMATS: &[DxgiFormat] = &[
    // unorm formats
    dxgi(DXGI_FORMAT_R8_UNORM, plain(PF::Red, TF::R8Unorm, PT::UInt8, 1)),
    dxgi(DXGI_FORMAT_R8G8_UNORM, plain(PF::Rg, TF::Rg8Unorm, PT::UInt8, 2)),
    dxgi(DXGI_FORMAT_R8G8B8A8_UNORM, plain(PF::Rgba, TF::Rgba8Unorm, PT::UInt8, 4)),
    dxgi(DXGI_FORMAT_R16_UNORM, plain(PF::Red, TF::R16Unorm, PT::UInt16, 2)),
    dxgi(DXGI_FORMAT_R16G16_UNORM, plain(PF::Rg, TF::Rg16Unorm, PT::UInt16, 4)),
    dxgi(DXGI_FORMAT_R16G16B16A16_UNORM, plain(PF::Rgba, TF::Rgba16Unorm, PT::UInt16, 8)),
    // snorm formats
    dxgi(DXGI_FORMAT_R8_SNORM, plain(PF::Red, TF::R8Snorm, PT::Int8, 1)),
    dxgi(DXGI_FORMAT_R8G8_SNORM, plain(PF::Rg, TF::Rg8Snorm, PT::Int8, 2)),
    dxgi(DXGI_FORMAT_R8G8B8A8_SNORM, plain(PF::Rgba, TF::Rgba8Snorm, PT::Int8, 4)),
    dxgi(DXGI_FORMAT_R16_SNORM, plain(PF::Red, TF::R16Snorm, PT::Int16, 2)),
    dxgi(DXGI_FORMAT_R16G16_SNORM, plain(PF::Rg, TF::Rg16Snorm, PT::Int16, 4)),
    dxgi(DXGI_FORMAT_R16G16B16A16_SNORM, plain(PF::Rgba, TF::Rgba16Snorm, PT::Int16, 8)),
    // unsigned integer formats
    dxgi(DXGI_FORMAT_R8_UINT, plain(PF::RedInteger, TF::R8U, PT::UInt8, 1)),
    dxgi(DXGI_FORMAT_R8G8_UINT, plain(PF::RgInteger, TF::Rg8U, PT::UInt8, 2)),
    dxgi(DXGI_FORMAT_R8G8B8A8_UINT, plain(PF::RgbaInteger, TF::Rgba8U, PT::UInt8, 4)),
    dxgi(DXGI_FORMAT_R16_UINT, plain(PF::RedInteger, TF::R16U, PT::UInt16, 2)),
    dxgi(DXGI_FORMAT_R16G16_UINT, plain(PF::RgInteger, TF::Rg16U, PT::UInt16, 4)),
    dxgi(DXGI_FORMAT_R16G16B16A16_UINT, plain(PF::RgbaInteger, TF::Rgba16U, PT::UInt16, 8)),
    dxgi(DXGI_FORMAT_R32_UINT, plain(PF::RedInteger, TF::R32U, PT::UInt32, 4)),
    dxgi(DXGI_FORMAT_R32G32_UINT, plain(PF::RgInteger, TF::Rg32U, PT::UInt32, 8)),
    dxgi(DXGI_FORMAT_R32G32B32_UINT, plain(PF::RgbInteger, TF::Rgb32U, PT::UInt32, 12)),
    dxgi(DXGI_FORMAT_R32G32B32A32_UINT, plain(PF::RgbaInteger, TF::Rgba32U, PT::UInt32, 16)),
    // signed integer formats
    dxgi(DXGI_FORMAT_R8_SINT, plain(PF::RedInteger, TF::R8I, PT::Int8, 1)),
    dxgi(DXGI_FORMAT_R8G8_SINT, plain(PF::RgInteger, TF::Rg8I, PT::Int8, 2)),
    dxgi(DXGI_FORMAT_R8G8B8A8_SINT, plain(PF::RgbaInteger, TF::Rgba8I, PT::Int8, 4)),
    dxgi(DXGI_FORMAT_R16_SINT, plain(PF::RedInteger, TF::R16I, PT::Int16, 2)),
    dxgi(DXGI_FORMAT_R16G16_SINT, plain(PF::RgInteger, TF::Rg16I, PT::Int16, 4)),
    dxgi(DXGI_FORMAT_R16G16B16A16_SINT, plain(PF::RgbaInteger, TF::Rgba16I, PT::Int16, 8)),
    dxgi(DXGI_FORMAT_R32_SINT, plain(PF::RedInteger, TF::R32I, PT::Int32, 4)),
    dxgi(DXGI_FORMAT_R32G32_SINT, plain(PF::RgInteger, TF::Rg32I, PT::Int32, 8)),
    dxgi(DXGI_FORMAT_R32G32B32_SINT, plain(PF::RgbInteger, TF::Rgb32I, PT::Int32, 12)),
    dxgi(DXGI_FORMAT_R32G32B32A32_SINT, plain(PF::RgbaInteger, TF::Rgba32I, PT::Int32, 16)),
    // floating formats
    dxgi(DXGI_FORMAT_R16_FLOAT, plain(PF::Red, TF::R16F, PT::Float16, 2)),
    dxgi(DXGI_FORMAT_R16G16_FLOAT, plain(PF::Rg, TF::Rg16F, PT::Float16, 4)),
    dxgi(DXGI_FORMAT_R16G16B16A16_FLOAT, plain(PF::Rgba, TF::Rgba16F, PT::Float16, 8)),
    dxgi(DXGI_FORMAT_R32_FLOAT, plain(PF::Red, TF::R32F, PT::Float32, 4)),
    dxgi(DXGI_FORMAT_R32G32_FLOAT, plain(PF::Rg, TF::Rg32F, PT::Float32, 8)),
    dxgi(DXGI_FORMAT_R32G32B32_FLOAT, plain(PF::Rgb, TF::Rgb32F, PT::Float32, 12)),
    dxgi(DXGI_FORMAT_R32G32B32A32_FLOAT, plain(PF::Rgba, TF::Rgba32F, PT::Float32, 16)),
    // sRGB formats
    dxgi(DXGI_FORMAT_B8G8R8X8_UNORM_SRGB, plain(PF::Rgb, TF::Srgb8, PT::UInt8, 4)),
    dxgi(DXGI_FORMAT_R8G8B8A8_UNORM_SRGB, plain(PF::Rgba, TF::Srgb8Alpha8, PT::UInt8, 4)),
    // packed formats
    dxgi(DXGI_FORMAT_R10G10B10A2_UINT, plain(PF::RgbaInteger, TF::Rgb10A2, PT::UInt32Rgb10A2, 4)),
    dxgi(DXGI_FORMAT_R9G9B9E5_SHAREDEXP, plain(PF::Rgb, TF::Rgb9E5, PT::UInt32Rgb9E5, 4)),
    dxgi(DXGI_FORMAT_R11G11B10_FLOAT, plain(PF::Rgb, TF::Rg11B10F, PT::UInt32Rg11B10F, 4)),
    dxgi(DXGI_FORMAT_B5G6R5_UNORM, plain(PF::Rgb, TF::R5G6B5, PT::UInt16R5G6B5, 2)),
    dxgi(DXGI_FORMAT_B5G5R5A1_UNORM, plain(PF::Rgba, TF::Rgb5A1, PT::UInt16Rgb5A1, 2)),
    dxgi(DXGI_FORMAT_B4G4R4A4_UNORM, plain(PF::Rgba, TF::Rgba4, PT::UInt16Rgba4, 2)),
    // swizzle formats
    dxgi(DXGI_FORMAT_B8G8R8X8_UNORM, plain(PF::Bgra, TF::Rgb8Unorm, PT::UInt8, 4)),
    dxgi(DXGI_FORMAT_B8G8R8A8_UNORM, plain(PF::Bgra, TF::Rgba8Unorm, PT::UInt8, 4)),
    dxgi(DXGI_FORMAT_B8G8R8A8_UNORM_SRGB, plain(PF::Bgra, TF::Srgb8Alpha8, PT::UInt8, 4)),
    // depth formats
    dxgi(DXGI_FORMAT_D16_UNORM, plain(PF::Depth, TF::D16, PT::NoPixelType, 2)),
    dxgi(DXGI_FORMAT_D24_UNORM_S8_UINT, plain(PF::DepthStencil, TF::D24S8, PT::NoPixelType, 4)),
    dxgi(DXGI_FORMAT_D32_FLOAT, plain(PF::Depth, TF::D32F, PT::NoPixelType, 4)),
    dxgi(DXGI_FORMAT_D32_FLOAT_S8X24_UINT, plain(PF::DepthStencil, TF::D32FS8X24, PT::NoPixelType, 8)),
    // compressed formats
    dxgi(DXGI_FORMAT_BC1_UNORM, FormatInfo::compressed(TF::RgbaDxt1, 8)),
    dxgi(DXGI_FORMAT_BC2_UNORM, FormatInfo::compressed(TF::RgbaDxt3, 16)),
    dxgi(DXGI_FORMAT_BC3_UNORM, FormatInfo::compressed(TF::RgbaDxt5, 16)),
    dxgi(DXGI_FORMAT_BC4_UNORM, FormatInfo::compressed(TF::RAti1nUnorm, 8)),
    dxgi(DXGI_FORMAT_BC4_SNORM, FormatInfo::compressed(TF::RAti1nSnorm, 8)),
    dxgi(DXGI_FORMAT_BC5_UNORM, FormatInfo::compressed(TF::RgAti2nUnorm, 16)),
    dxgi(DXGI_FORMAT_BC5_SNORM, FormatInfo::compressed(TF::RgAti2nSnorm, 16)),
    dxgi(DXGI_FORMAT_BC6H_UF16, FormatInfo::compressed(TF::RgbBpUnsignedFloat, 16)),
    dxgi(DXGI_FORMAT_BC6H_SF16, FormatInfo::compressed(TF::RgbBpSignedFloat, 16)),
    dxgi(DXGI_FORMAT_BC7_UNORM, FormatInfo::compressed(TF::RgbBpUnorm, 16)),
    // compressed sRGB formats
    dxgi(DXGI_FORMAT_BC1_UNORM_SRGB, FormatInfo::compressed(TF::SrgbDxt1, 8)),
    dxgi(DXGI_FORMAT_BC2_UNORM_SRGB, FormatInfo::compressed(TF::SrgbAlphaDxt3, 16)),
    dxgi(DXGI_FORMAT_BC3_UNORM_SRGB, FormatInfo::compressed(TF::SrgbAlphaDxt5, 16)),
    dxgi(DXGI_FORMAT_BC7_UNORM_SRGB, FormatInfo::compressed(TF::SrgbBpUnorm, 16)),
];

/// Finds the first uncompressed format whose bit count and masks match exactly.
pub fn find_rgba_format(
    rgb_bit_count: u32,
    red_mask: u32,
    green_mask: u32,
    blue_mask: u32,
    alpha_mask: u32,
) -> Option<&'static FormatInfo> {
    RGBA_FORMATS
        .iter()
        .find(|entry| {
            entry.info.components.checked_mul(8) == Some(rgb_bit_count)
                && entry.red_mask == red_mask
                && entry.green_mask == green_mask
                && entry.blue_mask == blue_mask
                && entry.alpha_mask == alpha_mask
        })
        .map(|entry| &entry.info)
}

/// Finds the format stored under a legacy FourCC code.
pub fn find_fourcc_format(fourcc: u32) -> Option<&'static FormatInfo> {
    FOURCC_FORMATS
        .iter()
        .find(|entry| entry.fourcc == fourcc)
        .map(|entry| &entry.info)
}

/// Finds the format for a `DXGI_FORMAT` value from a DX10 header.
pub fn find_dxgi_format(dxgi_format: u32) -> Option<&'static FormatInfo> {
    DX10_FORMATS
        .iter()
        .find(|entry| entry.dxgi_format == dxgi_format)
        .map(|entry| &entry.info)
}
