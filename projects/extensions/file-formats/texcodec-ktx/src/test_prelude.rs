//! Common test imports and utilities for KTX tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

use crate::ktx::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};
use texcodec_texture_common::{block_size_for_texture_format, TextureFormat};

pub const GL_COMPRESSED_RGB8_ETC2: u32 = 0x9274;
pub const GL_COMPRESSED_RGBA8_ETC2_EAC: u32 = 0x9278;
pub const GL_COMPRESSED_RGBA_S3TC_DXT5: u32 = 0x83F3;

/// Assembles KTX files for tests.
///
/// [`KtxBuilder::build`] appends a payload with correct `imageSize` prefixes
/// for the configured dimensions.
#[derive(Debug, Clone)]
pub struct KtxBuilder {
    gl_internal_format: u32,
    gl_type: u32,
    gl_format: u32,
    gl_type_size: u32,
    width: u32,
    height: u32,
    depth: u32,
    array_elements: u32,
    faces: u32,
    mip_levels: u32,
    key_value_data: Vec<u8>,
    big_endian: bool,
}

impl KtxBuilder {
    pub fn new(gl_internal_format: u32, width: u32, height: u32) -> Self {
        Self {
            gl_internal_format,
            gl_type: 0,
            gl_format: 0,
            gl_type_size: 1,
            width,
            height,
            depth: 0,
            array_elements: 0,
            faces: 1,
            mip_levels: 1,
            key_value_data: Vec::new(),
            big_endian: false,
        }
    }

    /// Marks the data as uncompressed `GL_RGBA` / `GL_UNSIGNED_BYTE`.
    pub fn uncompressed(mut self) -> Self {
        self.gl_type = 0x1401;
        self.gl_format = 0x1908;
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    pub fn array_elements(mut self, count: u32) -> Self {
        self.array_elements = count;
        self
    }

    pub fn faces(mut self, faces: u32) -> Self {
        self.faces = faces;
        self
    }

    pub fn mip_levels(mut self, levels: u32) -> Self {
        self.mip_levels = levels;
        self
    }

    pub fn key_value_data(mut self, data: &[u8]) -> Self {
        self.key_value_data = data.to_vec();
        self
    }

    pub fn big_endian(mut self, big_endian: bool) -> Self {
        self.big_endian = big_endian;
        self
    }

    fn encode(&self, value: u32) -> u32 {
        if self.big_endian {
            value.swap_bytes()
        } else {
            value
        }
    }

    fn level_size(&self, level: u32) -> usize {
        let block_size = TextureFormat::from_gl(self.gl_internal_format)
            .map(block_size_for_texture_format)
            .unwrap_or(16) as usize;
        let w = (self.width >> level).max(1) as usize;
        let h = (self.height >> level).max(1) as usize;
        w.div_ceil(4) * h.div_ceil(4) * block_size
    }

    /// Size of the payload [`KtxBuilder::build`] appends.
    pub fn payload_len(&self) -> usize {
        (0..self.mip_levels.max(1))
            .map(|level| self.level_size(level) * self.faces as usize + 4)
            .sum()
    }

    /// Builds the 64-byte header followed by the key/value data.
    pub fn build_header(&self) -> Vec<u8> {
        let mut data = vec![0u8; KTX_HEADER_SIZE];
        data[..KTX_IDENTIFIER.len()].copy_from_slice(&KTX_IDENTIFIER);

        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };
        let fields = [
            (KTX_ENDIANNESS_OFFSET, ENDIAN_NATIVE),
            (KTX_GL_TYPE_OFFSET, self.gl_type),
            (KTX_GL_TYPE_SIZE_OFFSET, self.gl_type_size),
            (KTX_GL_FORMAT_OFFSET, self.gl_format),
            (KTX_GL_INTERNAL_FORMAT_OFFSET, self.gl_internal_format),
            (KTX_PIXEL_WIDTH_OFFSET, self.width),
            (KTX_PIXEL_HEIGHT_OFFSET, self.height),
            (KTX_PIXEL_DEPTH_OFFSET, self.depth),
            (KTX_ARRAY_ELEMENTS_OFFSET, self.array_elements),
            (KTX_FACES_OFFSET, self.faces),
            (KTX_MIPMAP_LEVELS_OFFSET, self.mip_levels),
            (KTX_KEY_VALUE_BYTES_OFFSET, self.key_value_data.len() as u32),
        ];
        for (offset, value) in fields {
            unsafe { writer.write_u32_at(self.encode(value), offset as isize) };
        }

        data.extend_from_slice(&self.key_value_data);
        data
    }

    /// Builds the header, key/value data and a payload of pattern bytes.
    pub fn build(&self) -> Vec<u8> {
        let mut data = self.build_header();
        for level in 0..self.mip_levels.max(1) {
            let image_size = self.level_size(level);
            data.extend_from_slice(&(image_size as u32).to_le_bytes());
            data.extend((0..image_size * self.faces as usize).map(|x| (x % 251) as u8));
        }
        data
    }
}
