//! KTX 1.1 format constants
#![allow(dead_code)]

/// The 12-byte file identifier, `«KTX 11»\r\n\x1A\n`.
pub const KTX_IDENTIFIER: [u8; 12] = [
    0xAB, 0x4B, 0x54, 0x58, 0x20, 0x31, 0x31, 0xBB, 0x0D, 0x0A, 0x1A, 0x0A,
];

/// Endianness marker as read by a reader with the writer's byte order.
pub const ENDIAN_NATIVE: u32 = 0x04030201;
/// Endianness marker as read when the file was written with the opposite byte order.
pub const ENDIAN_SWAPPED: u32 = 0x01020304;

pub(crate) const KTX_HEADER_SIZE: usize = 64;

// Header field offsets
pub(crate) const KTX_ENDIANNESS_OFFSET: usize = 12;
pub(crate) const KTX_GL_TYPE_OFFSET: usize = 16;
pub(crate) const KTX_GL_TYPE_SIZE_OFFSET: usize = 20;
pub(crate) const KTX_GL_FORMAT_OFFSET: usize = 24;
pub(crate) const KTX_GL_INTERNAL_FORMAT_OFFSET: usize = 28;
pub(crate) const KTX_GL_BASE_INTERNAL_FORMAT_OFFSET: usize = 32;
pub(crate) const KTX_PIXEL_WIDTH_OFFSET: usize = 36;
pub(crate) const KTX_PIXEL_HEIGHT_OFFSET: usize = 40;
pub(crate) const KTX_PIXEL_DEPTH_OFFSET: usize = 44;
pub(crate) const KTX_ARRAY_ELEMENTS_OFFSET: usize = 48;
pub(crate) const KTX_FACES_OFFSET: usize = 52;
pub(crate) const KTX_MIPMAP_LEVELS_OFFSET: usize = 56;
pub(crate) const KTX_KEY_VALUE_BYTES_OFFSET: usize = 60;

pub(crate) const CUBE_FACE_COUNT: u32 = 6;
