//! The uniform in-memory result of decoding any texture container.

use crate::error::DecodeWarning;
use crate::format::{PixelFormat, PixelType, Target, TextureFormat};
use alloc::vec::Vec;

/// Size of the `imageSize` field that precedes every mip level in a KTX payload.
pub const LEVEL_SIZE_PREFIX: usize = 4;

/// Everything known about a texture except its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureDescriptor {
    pub target: Target,
    pub format: TextureFormat,
    pub pixel_format: PixelFormat,
    pub pixel_type: PixelType,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
    pub layers: u32,
    /// 1, or the number of cube faces present (6 for complete cube maps).
    pub faces: u32,
    pub mip_levels: u32,
    /// Bytes per 4x4 block when `compressed`, bytes per texel otherwise.
    pub block_size: u32,
    pub compressed: bool,
    /// Every mip level in the payload starts with a 4-byte size field (KTX layout).
    pub level_size_prefixed: bool,
}

impl TextureDescriptor {
    /// Size in bytes of one image (one face of one layer) at `level`.
    ///
    /// Returns [`None`] if the size does not fit in a `usize`.
    pub fn level_size(&self, level: u32) -> Option<usize> {
        let shift = |dim: u32| dim.checked_shr(level).unwrap_or(0).max(1) as usize;
        let (w, h, d) = (shift(self.width), shift(self.height), shift(self.depth));
        let block_size = self.block_size as usize;

        let texels = if self.compressed {
            w.div_ceil(4).checked_mul(h.div_ceil(4))?
        } else {
            w.checked_mul(h)?
        };
        texels.checked_mul(block_size)?.checked_mul(d)
    }

    /// Combined size of all mip levels of one face of one layer.
    pub fn face_size(&self) -> Option<usize> {
        (0..self.mip_levels).try_fold(0usize, |total, level| {
            total.checked_add(self.level_size(level)?)
        })
    }

    /// Number of payload bytes this descriptor requires.
    pub fn payload_size(&self) -> Option<usize> {
        let images = (self.faces as usize).checked_mul(self.layers as usize)?;
        if self.level_size_prefixed {
            // level -> size prefix -> faces
            (0..self.mip_levels).try_fold(0usize, |total, level| {
                let level_bytes = self.level_size(level)?.checked_mul(images)?;
                total
                    .checked_add(level_bytes)?
                    .checked_add(LEVEL_SIZE_PREFIX)
            })
        } else {
            self.face_size()?.checked_mul(images)
        }
    }

    /// Byte offset of one image inside the payload.
    fn level_offset(&self, layer: u32, face: u32, level: u32) -> Option<usize> {
        if layer >= self.layers || face >= self.faces || level >= self.mip_levels {
            return None;
        }

        if self.level_size_prefixed {
            let images = (self.faces as usize).checked_mul(self.layers as usize)?;
            let mut offset = 0usize;
            for previous in 0..level {
                offset = offset
                    .checked_add(LEVEL_SIZE_PREFIX)?
                    .checked_add(self.level_size(previous)?.checked_mul(images)?)?;
            }
            let image_index = (layer as usize) * (self.faces as usize) + face as usize;
            offset
                .checked_add(LEVEL_SIZE_PREFIX)?
                .checked_add(self.level_size(level)?.checked_mul(image_index)?)
        } else {
            let image_index = (layer as usize) * (self.faces as usize) + face as usize;
            let mut offset = self.face_size()?.checked_mul(image_index)?;
            for previous in 0..level {
                offset = offset.checked_add(self.level_size(previous)?)?;
            }
            Some(offset)
        }
    }
}

/// A decoded texture: descriptor plus the raw payload bytes.
///
/// The payload is laid out exactly as the container stores it:
/// - DDS, PKM, HDR, generic: layer -> face -> mip level.
/// - KTX: mip level -> 4-byte size prefix -> face.
///
/// Invariant: the payload holds at least [`TextureDescriptor::payload_size`] bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTexture {
    desc: TextureDescriptor,
    payload: Vec<u8>,
}

impl DecodedTexture {
    /// Pairs a descriptor with its payload.
    ///
    /// Decoders construct this only after verifying the payload length.
    pub fn new(desc: TextureDescriptor, payload: Vec<u8>) -> Self {
        debug_assert!(desc.payload_size().is_some_and(|size| payload.len() >= size));
        Self { desc, payload }
    }

    #[inline(always)]
    pub fn descriptor(&self) -> &TextureDescriptor {
        &self.desc
    }
    #[inline(always)]
    pub fn target(&self) -> Target {
        self.desc.target
    }
    #[inline(always)]
    pub fn format(&self) -> TextureFormat {
        self.desc.format
    }
    #[inline(always)]
    pub fn pixel_format(&self) -> PixelFormat {
        self.desc.pixel_format
    }
    #[inline(always)]
    pub fn pixel_type(&self) -> PixelType {
        self.desc.pixel_type
    }
    #[inline(always)]
    pub fn width(&self) -> u32 {
        self.desc.width
    }
    #[inline(always)]
    pub fn height(&self) -> u32 {
        self.desc.height
    }
    #[inline(always)]
    pub fn depth(&self) -> u32 {
        self.desc.depth
    }
    #[inline(always)]
    pub fn layers(&self) -> u32 {
        self.desc.layers
    }
    #[inline(always)]
    pub fn faces(&self) -> u32 {
        self.desc.faces
    }
    #[inline(always)]
    pub fn mip_levels(&self) -> u32 {
        self.desc.mip_levels
    }
    #[inline(always)]
    pub fn block_size(&self) -> u32 {
        self.desc.block_size
    }
    #[inline(always)]
    pub fn is_compressed(&self) -> bool {
        self.desc.compressed
    }
    #[inline(always)]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }

    /// Size in bytes of one image at `level`, see [`TextureDescriptor::level_size`].
    pub fn level_size(&self, level: u32) -> Option<usize> {
        if level >= self.desc.mip_levels {
            return None;
        }
        self.desc.level_size(level)
    }

    /// The bytes of a single image, or [`None`] if any index is out of range.
    pub fn level_data(&self, layer: u32, face: u32, level: u32) -> Option<&[u8]> {
        let offset = self.desc.level_offset(layer, face, level)?;
        let size = self.desc.level_size(level)?;
        self.payload.get(offset..offset.checked_add(size)?)
    }
}

/// A successfully decoded texture plus any non-fatal conditions noticed on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeOutput {
    pub texture: DecodedTexture,
    pub warnings: Vec<DecodeWarning>,
}

impl DecodeOutput {
    pub fn new(texture: DecodedTexture) -> Self {
        Self {
            texture,
            warnings: Vec::new(),
        }
    }
}
