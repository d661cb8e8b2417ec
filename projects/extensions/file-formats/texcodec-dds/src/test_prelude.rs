//! Common test imports and utilities for DDS tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.
#![allow(unused_imports)]

// Re-export commonly used alloc types for tests
pub use alloc::{boxed::Box, format, string::String, vec, vec::Vec};

// External crates commonly used in tests
pub use rstest::rstest;

// Common DDS test data helpers
use crate::dds::constants::*;
use endian_writer::{EndianWriter, LittleEndianWriter};

/// Total size of DDS header + DX10 header (used in tests)
pub const DDS_DX10_TOTAL_HEADER_SIZE: usize = DDS_HEADER_SIZE + DX10_HEADER_SIZE;

#[derive(Debug, Clone, Copy)]
enum PixelLayout {
    FourCc(u32),
    Dx10(u32),
    Masks {
        bit_count: u32,
        masks: [u32; 4],
    },
}

/// Assembles DDS files for tests.
///
/// The payload is filled with a repeating byte pattern.
#[derive(Debug, Clone)]
pub struct DdsBuilder {
    layout: PixelLayout,
    width: u32,
    height: u32,
    depth: u32,
    mip_levels: u32,
    caps2: u32,
    array_size: u32,
    payload_len: usize,
}

impl DdsBuilder {
    fn new(layout: PixelLayout, width: u32, height: u32) -> Self {
        Self {
            layout,
            width,
            height,
            depth: 0,
            mip_levels: 1,
            caps2: 0,
            array_size: 1,
            payload_len: 0,
        }
    }

    /// A legacy header whose format is given by a FourCC code.
    pub fn fourcc(code: &[u8; 4], width: u32, height: u32) -> Self {
        Self::new(PixelLayout::FourCc(fourcc(code)), width, height)
    }

    /// A header followed by a DX10 extension header.
    pub fn dx10(dxgi_format: u32, width: u32, height: u32) -> Self {
        Self::new(PixelLayout::Dx10(dxgi_format), width, height)
    }

    /// A legacy header describing an uncompressed format through channel masks.
    pub fn rgba(bit_count: u32, r: u32, g: u32, b: u32, a: u32, width: u32, height: u32) -> Self {
        Self::new(
            PixelLayout::Masks {
                bit_count,
                masks: [r, g, b, a],
            },
            width,
            height,
        )
    }

    /// Sets the mip count. Values above 1 also set `DDSD_MIPMAPCOUNT`.
    pub fn mip_levels(mut self, levels: u32) -> Self {
        self.mip_levels = levels;
        self
    }

    pub fn caps2(mut self, caps2: u32) -> Self {
        self.caps2 = caps2;
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Array size written to the DX10 header. Ignored for legacy headers.
    pub fn array_size(mut self, array_size: u32) -> Self {
        self.array_size = array_size;
        self
    }

    pub fn payload_len(mut self, len: usize) -> Self {
        self.payload_len = len;
        self
    }

    /// Builds only the header bytes, including the DX10 header when present.
    pub fn build_header(&self) -> Vec<u8> {
        let header_size = match self.layout {
            PixelLayout::Dx10(_) => DDS_DX10_TOTAL_HEADER_SIZE,
            _ => DDS_HEADER_SIZE,
        };
        let mut data = vec![0u8; header_size];
        let mut writer = unsafe { LittleEndianWriter::new(data.as_mut_ptr()) };

        let mut flags = DDSD_CAPS | DDSD_HEIGHT | DDSD_WIDTH | DDSD_PIXELFORMAT;
        if self.mip_levels > 1 {
            flags |= DDSD_MIPMAPCOUNT;
        }
        if self.depth > 0 {
            flags |= DDSD_DEPTH;
        }

        unsafe {
            writer.write_u32_at(DDS_MAGIC, 0);
            // dwSize
            writer.write_u32_at(124, 4);
            writer.write_u32_at(flags, DDS_FLAGS_OFFSET as isize);
            writer.write_u32_at(self.height, DDS_HEIGHT_OFFSET as isize);
            writer.write_u32_at(self.width, DDS_WIDTH_OFFSET as isize);
            writer.write_u32_at(self.depth, DDS_DEPTH_OFFSET as isize);
            if self.mip_levels > 1 {
                writer.write_u32_at(self.mip_levels, DDS_MIPMAP_COUNT_OFFSET as isize);
            }
            // dwSize of DDS_PIXELFORMAT
            writer.write_u32_at(32, DDS_PIXELFORMAT_OFFSET as isize);
            writer.write_u32_at(self.caps2, DDS_CAPS2_OFFSET as isize);

            match self.layout {
                PixelLayout::FourCc(code) => {
                    writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
                    writer.write_u32_at(code, FOURCC_OFFSET as isize);
                }
                PixelLayout::Dx10(dxgi_format) => {
                    writer.write_u32_at(DDPF_FOURCC, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
                    writer.write_u32_at(FOURCC_DX10, FOURCC_OFFSET as isize);
                    let dx10 = DDS_HEADER_SIZE as isize;
                    writer.write_u32_at(dxgi_format, dx10 + DX10_DXGI_FORMAT_OFFSET as isize);
                    // D3D10_RESOURCE_DIMENSION_TEXTURE2D
                    writer.write_u32_at(3, dx10 + DX10_RESOURCE_DIMENSION_OFFSET as isize);
                    writer.write_u32_at(self.array_size, dx10 + DX10_ARRAY_SIZE_OFFSET as isize);
                }
                PixelLayout::Masks { bit_count, masks } => {
                    let mut pf_flags = DDPF_RGB;
                    if masks[3] != 0 {
                        pf_flags |= DDPF_ALPHAPIXELS;
                    }
                    writer.write_u32_at(pf_flags, DDS_PIXELFORMAT_FLAGS_OFFSET as isize);
                    writer.write_u32_at(bit_count, DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET as isize);
                    writer.write_u32_at(masks[0], DDS_PIXELFORMAT_RBITMASK_OFFSET as isize);
                    writer.write_u32_at(masks[1], DDS_PIXELFORMAT_GBITMASK_OFFSET as isize);
                    writer.write_u32_at(masks[2], DDS_PIXELFORMAT_BBITMASK_OFFSET as isize);
                    writer.write_u32_at(masks[3], DDS_PIXELFORMAT_ABITMASK_OFFSET as isize);
                }
            }
        }

        data
    }

    /// Builds the header followed by `payload_len` bytes of pattern data.
    pub fn build(&self) -> Vec<u8> {
        let mut data = self.build_header();
        data.extend((0..self.payload_len).map(|x| (x % 256) as u8));
        data
    }
}
