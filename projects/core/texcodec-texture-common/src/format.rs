//! Format vocabulary shared by all texture decoders.
//!
//! [`TextureFormat`] discriminants are the OpenGL internal format enum values. KTX
//! stores those values verbatim, so [`TextureFormat::from_gl`] doubles as the KTX
//! format lookup.

use derive_enum_all_values::AllValues;

/// Logical internal format of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
#[repr(u32)]
pub enum TextureFormat {
    // Unsigned normalized
    R8Unorm = 0x8229,
    Rg8Unorm = 0x822B,
    Rgb8Unorm = 0x8051,
    Rgba8Unorm = 0x8058,
    R16Unorm = 0x822A,
    Rg16Unorm = 0x822C,
    Rgba16Unorm = 0x805B,

    // Signed normalized
    R8Snorm = 0x8F94,
    Rg8Snorm = 0x8F95,
    Rgba8Snorm = 0x8F97,
    R16Snorm = 0x8F98,
    Rg16Snorm = 0x8F99,
    Rgba16Snorm = 0x8F9B,

    // Unsigned integer
    R8U = 0x8232,
    Rg8U = 0x8238,
    Rgba8U = 0x8D7C,
    R16U = 0x8234,
    Rg16U = 0x823A,
    Rgba16U = 0x8D76,
    R32U = 0x8236,
    Rg32U = 0x823C,
    Rgb32U = 0x8D71,
    Rgba32U = 0x8D70,

    // Signed integer
    R8I = 0x8231,
    Rg8I = 0x8237,
    Rgba8I = 0x8D8E,
    R16I = 0x8233,
    Rg16I = 0x8239,
    Rgba16I = 0x8D88,
    R32I = 0x8235,
    Rg32I = 0x823B,
    Rgb32I = 0x8D83,
    Rgba32I = 0x8D82,

    // Floating point
    R16F = 0x822D,
    Rg16F = 0x822F,
    Rgba16F = 0x881A,
    R32F = 0x822E,
    Rg32F = 0x8230,
    Rgb32F = 0x8815,
    Rgba32F = 0x8814,

    // Packed
    Rgb9E5 = 0x8C3D,
    Rg11B10F = 0x8C3A,
    Rg3B2 = 0x2A10,
    R5G6B5 = 0x8D62,
    Rgb5A1 = 0x8057,
    Rgba4 = 0x8056,
    Rgb10A2 = 0x906F,

    // Depth
    D16 = 0x81A5,
    D24S8 = 0x88F0,
    D32F = 0x8CAC,
    D32FS8X24 = 0x8CAD,

    // sRGB
    Srgb8 = 0x8C41,
    Srgb8Alpha8 = 0x8C43,

    // S3TC / DXT
    RgbDxt1 = 0x83F0,
    RgbaDxt1 = 0x83F1,
    RgbaDxt3 = 0x83F2,
    RgbaDxt5 = 0x83F3,
    SrgbDxt1 = 0x8C4C,
    SrgbAlphaDxt1 = 0x8C4D,
    SrgbAlphaDxt3 = 0x8C4E,
    SrgbAlphaDxt5 = 0x8C4F,

    // RGTC (ATI1N / ATI2N)
    RAti1nUnorm = 0x8DBB,
    RAti1nSnorm = 0x8DBC,
    RgAti2nUnorm = 0x8DBD,
    RgAti2nSnorm = 0x8DBE,

    // BPTC (BC6H / BC7)
    RgbBpUnsignedFloat = 0x8E8F,
    RgbBpSignedFloat = 0x8E8E,
    RgbBpUnorm = 0x8E8C,
    SrgbBpUnorm = 0x8E8D,

    // ETC / EAC
    Rgb8Etc1 = 0x8D64,
    Rgb8Etc2 = 0x9274,
    Srgb8Etc2 = 0x9275,
    Rgb8PunchThroughAlpha1Etc2 = 0x9276,
    Srgb8PunchThroughAlpha1Etc2 = 0x9277,
    Rgba8Etc2Eac = 0x9278,
    Srgb8Alpha8Etc2Eac = 0x9279,
    R11EacUnorm = 0x9270,
    R11EacSnorm = 0x9271,
    Rg11EacUnorm = 0x9272,
    Rg11EacSnorm = 0x9273,
}

impl TextureFormat {
    /// Resolves a raw OpenGL internal format value.
    ///
    /// Returns [`None`] for values outside the known format list.
    pub fn from_gl(value: u32) -> Option<Self> {
        Self::all_values()
            .iter()
            .copied()
            .find(|format| format.gl_value() == value)
    }

    /// The OpenGL internal format enum value.
    #[inline(always)]
    pub const fn gl_value(self) -> u32 {
        self as u32
    }

    /// Whether the format stores sRGB encoded colour.
    pub const fn is_srgb(self) -> bool {
        matches!(
            self,
            Self::Srgb8
                | Self::Srgb8Alpha8
                | Self::SrgbDxt1
                | Self::SrgbAlphaDxt1
                | Self::SrgbAlphaDxt3
                | Self::SrgbAlphaDxt5
                | Self::SrgbBpUnorm
                | Self::Srgb8Etc2
                | Self::Srgb8PunchThroughAlpha1Etc2
                | Self::Srgb8Alpha8Etc2Eac
        )
    }
}

/// Channel layout of uncompressed source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    /// Compressed data, the layout is implied by the [`TextureFormat`].
    #[default]
    NoSourceFormat,
    Red,
    Rg,
    Rgb,
    Bgr,
    Rgba,
    Bgra,
    RedInteger,
    RgInteger,
    RgbInteger,
    RgbaInteger,
    Depth,
    DepthStencil,
}

/// Component type of uncompressed source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelType {
    /// Compressed data, or a depth format whose layout is implied by the [`TextureFormat`].
    #[default]
    NoPixelType,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Float16,
    Float32,
    UInt8Rg3B2,
    UInt16R5G6B5,
    UInt16Rgb5A1,
    UInt16Rgba4,
    UInt32Rgb10A2,
    UInt32Rgb9E5,
    UInt32Rg11B10F,
}

/// Shape of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    Target1D,
    Target1DArray,
    #[default]
    Target2D,
    Target2DArray,
    Target3D,
    CubeMap,
    CubeMapArray,
}

impl Target {
    /// Whether the target samples six faces per layer.
    #[inline(always)]
    pub const fn is_cube(self) -> bool {
        matches!(self, Self::CubeMap | Self::CubeMapArray)
    }
}

/// A resolved pixel format, as found in the per-container format tables.
///
/// `components` is the number of bytes per texel for uncompressed formats, and the
/// number of bytes per 4x4 block for compressed ones; it is used directly as the
/// block size of the decoded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormatInfo {
    pub pixel_format: PixelFormat,
    pub texture_format: TextureFormat,
    pub pixel_type: PixelType,
    pub components: u32,
    pub compressed: bool,
}

impl FormatInfo {
    /// Creates an entry for an uncompressed format.
    pub const fn uncompressed(
        pixel_format: PixelFormat,
        texture_format: TextureFormat,
        pixel_type: PixelType,
        components: u32,
    ) -> Self {
        Self {
            pixel_format,
            texture_format,
            pixel_type,
            components,
            compressed: false,
        }
    }

    /// Creates an entry for a block compressed format with `block_size` bytes per 4x4 block.
    pub const fn compressed(texture_format: TextureFormat, block_size: u32) -> Self {
        Self {
            pixel_format: PixelFormat::NoSourceFormat,
            texture_format,
            pixel_type: PixelType::NoPixelType,
            components: block_size,
            compressed: true,
        }
    }
}
