//! DDS format constants and definitions
#![allow(dead_code)]

/// Builds a little-endian FourCC code, as stored in DDS headers.
pub const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_le_bytes(*code)
}

/// Magic header for DDS files
pub(crate) const DDS_MAGIC: u32 = fourcc(b"DDS ");

pub(crate) const FOURCC_DXT1: u32 = fourcc(b"DXT1");
pub(crate) const FOURCC_DXT3: u32 = fourcc(b"DXT3");
pub(crate) const FOURCC_DXT5: u32 = fourcc(b"DXT5");
pub(crate) const FOURCC_ATI1: u32 = fourcc(b"ATI1");
pub(crate) const FOURCC_ATI2: u32 = fourcc(b"ATI2");
pub(crate) const FOURCC_DX10: u32 = fourcc(b"DX10");

// D3DFMT float codes stored directly in the FourCC field
pub(crate) const D3DFMT_R16F: u32 = 111;
pub(crate) const D3DFMT_G16R16F: u32 = 112;
pub(crate) const D3DFMT_A16B16G16R16F: u32 = 113;
pub(crate) const D3DFMT_R32F: u32 = 114;
pub(crate) const D3DFMT_G32R32F: u32 = 115;
pub(crate) const D3DFMT_A32B32G32R32F: u32 = 116;

// Size of the regular DDS header (including magic)
pub(crate) const DDS_HEADER_SIZE: usize = 0x80;
pub(crate) const DX10_HEADER_SIZE: usize = 20;

// DDS header field offsets
pub(crate) const DDS_FLAGS_OFFSET: usize = 0x08;
pub(crate) const DDS_HEIGHT_OFFSET: usize = 0x0C;
pub(crate) const DDS_WIDTH_OFFSET: usize = 0x10;
pub(crate) const DDS_PITCH_OR_LINEAR_SIZE_OFFSET: usize = 0x14;
pub(crate) const DDS_DEPTH_OFFSET: usize = 0x18;
pub(crate) const DDS_MIPMAP_COUNT_OFFSET: usize = 0x1C;

// DDS pixel format offsets (within the 32-byte DDSPIXELFORMAT structure at offset 0x4C)
pub(crate) const DDS_PIXELFORMAT_OFFSET: usize = 0x4C;
pub(crate) const DDS_PIXELFORMAT_FLAGS_OFFSET: usize = 0x50;
pub(crate) const FOURCC_OFFSET: usize = 0x54;
pub(crate) const DDS_PIXELFORMAT_RGBBITCOUNT_OFFSET: usize = 0x58;
pub(crate) const DDS_PIXELFORMAT_RBITMASK_OFFSET: usize = 0x5C;
pub(crate) const DDS_PIXELFORMAT_GBITMASK_OFFSET: usize = 0x60;
pub(crate) const DDS_PIXELFORMAT_BBITMASK_OFFSET: usize = 0x64;
pub(crate) const DDS_PIXELFORMAT_ABITMASK_OFFSET: usize = 0x68;

// Capability offsets
pub(crate) const DDS_CAPS_OFFSET: usize = 0x6C;
pub(crate) const DDS_CAPS2_OFFSET: usize = 0x70;

// DX10 header field offsets (relative to the start of the DX10 header)
pub(crate) const DX10_DXGI_FORMAT_OFFSET: usize = 0x00;
pub(crate) const DX10_RESOURCE_DIMENSION_OFFSET: usize = 0x04;
pub(crate) const DX10_MISC_FLAG_OFFSET: usize = 0x08;
pub(crate) const DX10_ARRAY_SIZE_OFFSET: usize = 0x0C;
pub(crate) const DX10_MISC_FLAGS2_OFFSET: usize = 0x10;

// DDS header flags
pub(crate) const DDSD_CAPS: u32 = 0x1;
pub(crate) const DDSD_HEIGHT: u32 = 0x2;
pub(crate) const DDSD_WIDTH: u32 = 0x4;
pub(crate) const DDSD_PITCH: u32 = 0x8;
pub(crate) const DDSD_PIXELFORMAT: u32 = 0x1000;
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x20000;
pub(crate) const DDSD_LINEARSIZE: u32 = 0x80000;
pub(crate) const DDSD_DEPTH: u32 = 0x800000;

// DDS pixel format flags
pub(crate) const DDPF_ALPHAPIXELS: u32 = 0x1;
pub(crate) const DDPF_ALPHA: u32 = 0x2;
pub(crate) const DDPF_FOURCC: u32 = 0x4;
pub(crate) const DDPF_RGB: u32 = 0x40;
pub(crate) const DDPF_YUV: u32 = 0x200;
pub(crate) const DDPF_LUMINANCE: u32 = 0x20000;

// DDS caps2 flags
pub(crate) const DDSCAPS2_CUBEMAP: u32 = 0x200;
pub(crate) const DDSCAPS2_CUBEMAP_POSITIVEX: u32 = 0x400;
pub(crate) const DDSCAPS2_CUBEMAP_NEGATIVEX: u32 = 0x800;
pub(crate) const DDSCAPS2_CUBEMAP_POSITIVEY: u32 = 0x1000;
pub(crate) const DDSCAPS2_CUBEMAP_NEGATIVEY: u32 = 0x2000;
pub(crate) const DDSCAPS2_CUBEMAP_POSITIVEZ: u32 = 0x4000;
pub(crate) const DDSCAPS2_CUBEMAP_NEGATIVEZ: u32 = 0x8000;
pub(crate) const DDSCAPS2_CUBEMAP_ALLFACES: u32 = DDSCAPS2_CUBEMAP_POSITIVEX
    | DDSCAPS2_CUBEMAP_NEGATIVEX
    | DDSCAPS2_CUBEMAP_POSITIVEY
    | DDSCAPS2_CUBEMAP_NEGATIVEY
    | DDSCAPS2_CUBEMAP_POSITIVEZ
    | DDSCAPS2_CUBEMAP_NEGATIVEZ;
pub(crate) const DDSCAPS2_VOLUME: u32 = 0x200000;

// DXGI format constants for the DX10 header
pub(crate) const DXGI_FORMAT_R32G32B32A32_FLOAT: u32 = 2;
pub(crate) const DXGI_FORMAT_R32G32B32A32_UINT: u32 = 3;
pub(crate) const DXGI_FORMAT_R32G32B32A32_SINT: u32 = 4;
pub(crate) const DXGI_FORMAT_R32G32B32_FLOAT: u32 = 6;
pub(crate) const DXGI_FORMAT_R32G32B32_UINT: u32 = 7;
pub(crate) const DXGI_FORMAT_R32G32B32_SINT: u32 = 8;
pub(crate) const DXGI_FORMAT_R16G16B16A16_FLOAT: u32 = 10;
pub(crate) const DXGI_FORMAT_R16G16B16A16_UNORM: u32 = 11;
pub(crate) const DXGI_FORMAT_R16G16B16A16_UINT: u32 = 12;
pub(crate) const DXGI_FORMAT_R16G16B16A16_SNORM: u32 = 13;
pub(crate) const DXGI_FORMAT_R16G16B16A16_SINT: u32 = 14;
pub(crate) const DXGI_FORMAT_R32G32_FLOAT: u32 = 16;
pub(crate) const DXGI_FORMAT_R32G32_UINT: u32 = 17;
pub(crate) const DXGI_FORMAT_R32G32_SINT: u32 = 18;
pub(crate) const DXGI_FORMAT_D32_FLOAT_S8X24_UINT: u32 = 20;
pub(crate) const DXGI_FORMAT_R10G10B10A2_UINT: u32 = 25;
pub(crate) const DXGI_FORMAT_R11G11B10_FLOAT: u32 = 26;
pub(crate) const DXGI_FORMAT_R8G8B8A8_UNORM: u32 = 28;
pub(crate) const DXGI_FORMAT_R8G8B8A8_UNORM_SRGB: u32 = 29;
pub(crate) const DXGI_FORMAT_R8G8B8A8_UINT: u32 = 30;
pub(crate) const DXGI_FORMAT_R8G8B8A8_SNORM: u32 = 31;
pub(crate) const DXGI_FORMAT_R8G8B8A8_SINT: u32 = 32;
pub(crate) const DXGI_FORMAT_R16G16_FLOAT: u32 = 34;
pub(crate) const DXGI_FORMAT_R16G16_UNORM: u32 = 35;
pub(crate) const DXGI_FORMAT_R16G16_UINT: u32 = 36;
pub(crate) const DXGI_FORMAT_R16G16_SNORM: u32 = 37;
pub(crate) const DXGI_FORMAT_R16G16_SINT: u32 = 38;
pub(crate) const DXGI_FORMAT_D32_FLOAT: u32 = 40;
pub(crate) const DXGI_FORMAT_R32_FLOAT: u32 = 41;
pub(crate) const DXGI_FORMAT_R32_UINT: u32 = 42;
pub(crate) const DXGI_FORMAT_R32_SINT: u32 = 43;
pub(crate) const DXGI_FORMAT_D24_UNORM_S8_UINT: u32 = 45;
pub(crate) const DXGI_FORMAT_R8G8_UNORM: u32 = 49;
pub(crate) const DXGI_FORMAT_R8G8_UINT: u32 = 50;
pub(crate) const DXGI_FORMAT_R8G8_SNORM: u32 = 51;
pub(crate) const DXGI_FORMAT_R8G8_SINT: u32 = 52;
pub(crate) const DXGI_FORMAT_R16_FLOAT: u32 = 54;
pub(crate) const DXGI_FORMAT_D16_UNORM: u32 = 55;
pub(crate) const DXGI_FORMAT_R16_UNORM: u32 = 56;
pub(crate) const DXGI_FORMAT_R16_UINT: u32 = 57;
pub(crate) const DXGI_FORMAT_R16_SNORM: u32 = 58;
pub(crate) const DXGI_FORMAT_R16_SINT: u32 = 59;
pub(crate) const DXGI_FORMAT_R8_UNORM: u32 = 61;
pub(crate) const DXGI_FORMAT_R8_UINT: u32 = 62;
pub(crate) const DXGI_FORMAT_R8_SNORM: u32 = 63;
pub(crate) const DXGI_FORMAT_R8_SINT: u32 = 64;
pub(crate) const DXGI_FORMAT_R9G9B9E5_SHAREDEXP: u32 = 67;
pub(crate) const DXGI_FORMAT_BC1_UNORM: u32 = 71;
pub(crate) const DXGI_FORMAT_BC1_UNORM_SRGB: u32 = 72;
pub(crate) const DXGI_FORMAT_BC2_UNORM: u32 = 74;
pub(crate) const DXGI_FORMAT_BC2_UNORM_SRGB: u32 = 75;
pub(crate) const DXGI_FORMAT_BC3_UNORM: u32 = 77;
pub(crate) const DXGI_FORMAT_BC3_UNORM_SRGB: u32 = 78;
pub(crate) const DXGI_FORMAT_BC4_UNORM: u32 = 80;
pub(crate) const DXGI_FORMAT_BC4_SNORM: u32 = 81;
pub(crate) const DXGI_FORMAT_BC5_UNORM: u32 = 83;
pub(crate) const DXGI_FORMAT_BC5_SNORM: u32 = 84;
pub(crate) const DXGI_FORMAT_B5G6R5_UNORM: u32 = 85;
pub(crate) const DXGI_FORMAT_B5G5R5A1_UNORM: u32 = 86;
pub(crate) const DXGI_FORMAT_B8G8R8A8_UNORM: u32 = 87;
pub(crate) const DXGI_FORMAT_B8G8R8X8_UNORM: u32 = 88;
pub(crate) const DXGI_FORMAT_B8G8R8A8_UNORM_SRGB: u32 = 91;
pub(crate) const DXGI_FORMAT_B8G8R8X8_UNORM_SRGB: u32 = 93;
pub(crate) const DXGI_FORMAT_BC6H_UF16: u32 = 95;
pub(crate) const DXGI_FORMAT_BC6H_SF16: u32 = 96;
pub(crate) const DXGI_FORMAT_BC7_UNORM: u32 = 98;
pub(crate) const DXGI_FORMAT_BC7_UNORM_SRGB: u32 = 99;
pub(crate) const DXGI_FORMAT_B4G4R4A4_UNORM: u32 = 115;
