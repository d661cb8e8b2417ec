//! Byte layout constants and bounds-checked little-endian accessors.
//!
//! Every multi-byte field in a document is little-endian. Reads past the end
//! of a buffer return zero rather than panicking, so views over unvalidated
//! bytes stay memory safe; validation is what makes the values meaningful.

/// `"qbjs"` read as a little-endian `u32`.
pub const BINARY_FORMAT_TAG: u32 = u32::from_le_bytes(*b"qbjs");

/// The only format version.
pub const FORMAT_VERSION: u32 = 1;

/// Size of the document header (tag + version).
pub const HEADER_SIZE: usize = 8;

/// Size of a container header (size, packed length word, table offset).
pub const BASE_SIZE: usize = 12;

/// Size of a value cell, and of one offset table slot.
pub const CELL_SIZE: usize = 4;

/// Largest size in bytes a container may reach. Offsets are 27-bit.
pub const MAX_SIZE: usize = (1 << 27) - 1;

/// Deepest container nesting accepted by validation.
pub const MAX_NESTING_DEPTH: usize = 1024;

pub(crate) const SIZE_OFFSET: usize = 0;
pub(crate) const LENGTH_WORD_OFFSET: usize = 4;
pub(crate) const TABLE_OFFSET_OFFSET: usize = 8;

/// Rounds `size` up to the next multiple of 4.
#[inline(always)]
pub(crate) const fn aligned_size(size: usize) -> usize {
    (size + 3) & !3
}

#[inline]
fn field<const N: usize>(bytes: &[u8], offset: usize) -> [u8; N] {
    let mut out = [0u8; N];
    if let Some(src) = offset.checked_add(N).and_then(|end| bytes.get(offset..end)) {
        out.copy_from_slice(src);
    }
    out
}

#[inline]
pub(crate) fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes(field(bytes, offset))
}

#[inline]
pub(crate) fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes(field(bytes, offset))
}

#[inline]
pub(crate) fn read_f64(bytes: &[u8], offset: usize) -> f64 {
    f64::from_le_bytes(field(bytes, offset))
}

/// Writes `value` at `offset`. The caller guarantees the range is in bounds.
#[inline]
pub(crate) fn write_u32(bytes: &mut [u8], offset: usize, value: u32) {
    bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Appends zero bytes until `out.len()` is a multiple of 4.
#[inline]
pub(crate) fn pad_to_alignment(out: &mut alloc::vec::Vec<u8>) {
    out.resize(aligned_size(out.len()), 0);
}

/// Appends a document header.
pub(crate) fn push_header(out: &mut alloc::vec::Vec<u8>) {
    out.extend_from_slice(&BINARY_FORMAT_TAG.to_le_bytes());
    out.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
}
