use super::constants::*;
use endian_writer::{EndianReader, LittleEndianReader};

/// The fixed 64-byte KTX header, with every field already in native byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KtxHeader {
    pub gl_type: u32,
    pub gl_type_size: u32,
    pub gl_format: u32,
    pub gl_internal_format: u32,
    pub gl_base_internal_format: u32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub pixel_depth: u32,
    pub number_of_array_elements: u32,
    pub number_of_faces: u32,
    pub number_of_mipmap_levels: u32,
    pub bytes_of_key_value_data: u32,
}

impl KtxHeader {
    /// Block compressed data is marked by `glType == 0`, `glFormat == 0` and `glTypeSize == 1`.
    #[inline(always)]
    pub fn is_compressed(&self) -> bool {
        self.gl_type == 0 && self.gl_format == 0 && self.gl_type_size == 1
    }

    /// Number of mip levels; 0 in the file means a single level.
    #[inline(always)]
    pub fn mip_levels(&self) -> u32 {
        self.number_of_mipmap_levels.max(1)
    }
}

/// Determines if the given data starts with the KTX 1.1 identifier.
#[inline(always)]
pub fn likely_ktx(data: &[u8]) -> bool {
    data.len() >= KTX_HEADER_SIZE && data[..KTX_IDENTIFIER.len()] == KTX_IDENTIFIER
}

/// Parses the 64-byte KTX header, byte swapping the fields when the
/// endianness marker says the file was written with the opposite byte order.
///
/// # Return
///
/// `None` if the identifier or the endianness marker is invalid.
pub fn parse_ktx_header(data: &[u8; KTX_HEADER_SIZE]) -> Option<KtxHeader> {
    if !likely_ktx(data) {
        return None;
    }

    // SAFETY: `data` is exactly KTX_HEADER_SIZE (64) bytes, every offset below + 4 is within it.
    let mut reader = unsafe { LittleEndianReader::new(data.as_ptr()) };
    let swap = match unsafe { reader.read_u32_at(KTX_ENDIANNESS_OFFSET as isize) } {
        ENDIAN_NATIVE => false,
        ENDIAN_SWAPPED => true,
        _ => return None,
    };

    let mut field = |offset: usize| {
        let value = unsafe { reader.read_u32_at(offset as isize) };
        if swap {
            value.swap_bytes()
        } else {
            value
        }
    };

    Some(KtxHeader {
        gl_type: field(KTX_GL_TYPE_OFFSET),
        gl_type_size: field(KTX_GL_TYPE_SIZE_OFFSET),
        gl_format: field(KTX_GL_FORMAT_OFFSET),
        gl_internal_format: field(KTX_GL_INTERNAL_FORMAT_OFFSET),
        gl_base_internal_format: field(KTX_GL_BASE_INTERNAL_FORMAT_OFFSET),
        pixel_width: field(KTX_PIXEL_WIDTH_OFFSET),
        pixel_height: field(KTX_PIXEL_HEIGHT_OFFSET),
        pixel_depth: field(KTX_PIXEL_DEPTH_OFFSET),
        number_of_array_elements: field(KTX_ARRAY_ELEMENTS_OFFSET),
        number_of_faces: field(KTX_FACES_OFFSET),
        number_of_mipmap_levels: field(KTX_MIPMAP_LEVELS_OFFSET),
        bytes_of_key_value_data: field(KTX_KEY_VALUE_BYTES_OFFSET),
    })
}
