use super::{constants::*, likely_dds};
use endian_writer::{EndianReader, LittleEndianReader};

/// The `DDS_PIXELFORMAT` structure embedded in the DDS header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DdsPixelFormat {
    pub flags: u32,
    pub fourcc: u32,
    pub rgb_bit_count: u32,
    pub red_mask: u32,
    pub green_mask: u32,
    pub blue_mask: u32,
    pub alpha_mask: u32,
}

impl DdsPixelFormat {
    /// Whether the format is described by the FourCC field rather than masks.
    #[inline(always)]
    pub fn has_fourcc(&self) -> bool {
        (self.flags & DDPF_FOURCC) == DDPF_FOURCC
    }

    /// Whether a DX10 extension header follows the main header.
    #[inline(always)]
    pub fn has_dx10_header(&self) -> bool {
        self.has_fourcc() && self.fourcc == FOURCC_DX10
    }
}

/// The fields of the 128-byte DDS header (magic included) that decoding needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DdsHeader {
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mipmap_count: u32,
    pub pixel_format: DdsPixelFormat,
    pub caps: u32,
    pub caps2: u32,
}

impl DdsHeader {
    /// Number of mip levels, clamped to at least 1.
    ///
    /// The header's count is only honoured when `DDSD_MIPMAPCOUNT` is set.
    #[inline]
    pub fn mip_levels(&self) -> u32 {
        if (self.flags & DDSD_MIPMAPCOUNT) == DDSD_MIPMAPCOUNT {
            self.mipmap_count.max(1)
        } else {
            1
        }
    }

    #[inline(always)]
    pub fn is_volume(&self) -> bool {
        (self.caps2 & DDSCAPS2_VOLUME) == DDSCAPS2_VOLUME
    }

    #[inline(always)]
    pub fn is_cubemap(&self) -> bool {
        (self.caps2 & DDSCAPS2_CUBEMAP) == DDSCAPS2_CUBEMAP
    }

    /// Number of cube faces flagged as present.
    #[inline(always)]
    pub fn cube_face_count(&self) -> u32 {
        (self.caps2 & DDSCAPS2_CUBEMAP_ALLFACES).count_ones()
    }
}

/// The DX10 extension header (`DDS_HEADER_DXT10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dx10Header {
    pub dxgi_format: u32,
    pub resource_dimension: u32,
    pub misc_flag: u32,
    pub array_size: u32,
    pub misc_flags2: u32,
}

/// Parses the 128-byte DDS header.
///
/// # Return
///
/// `None` if the data does not start with the `DDS ` magic.
#[inline]
pub fn parse_dds_header(data: &[u8; DDS_HEADER_SIZE]) -> Option<DdsHeader> {
    if !likely_dds(data) {
        return None;
    }

    // SAFETY: `data` is exactly DDS_HEADER_SIZE (128) bytes, every offset below + 4 is within it.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    unsafe {
        Some(DdsHeader {
            flags: reader.read_u32_at(DDS_FLAGS_OFFSET as isize),
            height: reader.read_u32_at(DDS_HEIGHT_OFFSET as isize),
            width: reader.read_u32_at(DDS_WIDTH_OFFSET as isize),
            pitch_or_linear_size: reader.read_u32_at(DDS_PITCH_OR_LINEAR_SIZE_OFFSET as isize),
            depth: reader.read_u32_at(DDS_DEPTH_OFFSET as isize),
            mipmap_count: reader.read_u32_at(DDS_MIPMAP_COUNT_OFFSET as isize),
            pixel_format: DdsPixelFormat {
                flags: reader.read_u32_at(DDS_PIXELFORMAT_FLAGS_OFFSET as isize),
                fourcc: reader.read_u32_at(FOURCC_OFFSET as isize),
                rgb_bit_count: reader.read_u32_at(DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize),
                red_mask: reader.read_u32_at(DDS_PIXELFORMAT_RBITMASK_OFFSET as isize),
                green_mask: reader.read_u32_at(DDS_PIXELFORMAT_GBITMASK_OFFSET as isize),
                blue_mask: reader.read_u32_at(DDS_PIXELFORMAT_BBITMASK_OFFSET as isize),
                alpha_mask: reader.read_u32_at(DDS_PIXELFORMAT_ABITMASK_OFFSET as isize),
            },
            caps: reader.read_u32_at(DDS_CAPS_OFFSET as isize),
            caps2: reader.read_u32_at(DDS_CAPS2_OFFSET as isize),
        })
    }
}

/// Parses the 20-byte DX10 extension header.
#[inline]
pub fn parse_dx10_header(data: &[u8; DX10_HEADER_SIZE]) -> Dx10Header {
    // SAFETY: `data` is exactly DX10_HEADER_SIZE (20) bytes, every offset below + 4 is within it.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    unsafe {
        Dx10Header {
            dxgi_format: reader.read_u32_at(DX10_DXGI_FORMAT_OFFSET as isize),
            resource_dimension: reader.read_u32_at(DX10_RESOURCE_DIMENSION_OFFSET as isize),
            misc_flag: reader.read_u32_at(DX10_MISC_FLAG_OFFSET as isize),
            array_size: reader.read_u32_at(DX10_ARRAY_SIZE_OFFSET as isize),
            misc_flags2: reader.read_u32_at(DX10_MISC_FLAGS2_OFFSET as isize),
        }
    }
}
