//! String regions: the stored form of string values and object keys.
//!
//! Two encodings exist:
//!
//! - Full: `u32` length in UTF-16 code units, then the code units.
//! - Latin-1: `u16` length in bytes, then one byte per character.
//!
//! Both are zero padded to a multiple of 4 bytes. A string is stored as
//! Latin-1 when it is shorter than `0x8000` code units and every code unit
//! is below 256.

use crate::layout::{aligned_size, pad_to_alignment, read_u16, read_u32};
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

const LATIN1_MAX_LEN: usize = 0x8000;

/// Whether `s` can be stored with the Latin-1 encoding.
pub fn use_latin1(s: &str) -> bool {
    let mut len = 0;
    for unit in s.encode_utf16() {
        if unit >= 0x100 {
            return false;
        }
        len += 1;
    }
    len < LATIN1_MAX_LEN
}

/// Bytes taken by `s` in the given encoding, padding included.
pub fn string_storage(s: &str, latin1: bool) -> usize {
    let units = s.encode_utf16().count();
    if latin1 {
        aligned_size(2 + units)
    } else {
        aligned_size(4 + 2 * units)
    }
}

/// Appends the stored form of `s` to `out`.
///
/// `latin1` must only be set when [`use_latin1`] accepts `s`.
pub(crate) fn push_string(out: &mut Vec<u8>, s: &str, latin1: bool) {
    let start = out.len();
    if latin1 {
        let len = s.encode_utf16().count() as u16;
        out.extend_from_slice(&len.to_le_bytes());
        out.extend(s.chars().map(|c| c as u32 as u8));
    } else {
        let len = s.encode_utf16().count() as u32;
        out.extend_from_slice(&len.to_le_bytes());
        for unit in s.encode_utf16() {
            out.extend_from_slice(&unit.to_le_bytes());
        }
    }
    pad_to_alignment(out);
    debug_assert_eq!(out.len() - start, string_storage(s, latin1));
}

/// A view of a stored string.
#[derive(Clone, Copy)]
pub struct StringRef<'a> {
    bytes: &'a [u8],
    offset: usize,
    latin1: bool,
}

impl<'a> StringRef<'a> {
    pub(crate) fn new(bytes: &'a [u8], offset: usize, latin1: bool) -> Self {
        Self {
            bytes,
            offset,
            latin1,
        }
    }

    /// Whether the string uses the Latin-1 encoding.
    pub fn is_latin1(&self) -> bool {
        self.latin1
    }

    /// Length in code units (Latin-1 bytes or UTF-16 units) as declared by the header.
    pub fn len(&self) -> usize {
        if self.latin1 {
            read_u16(self.bytes, self.offset) as usize
        } else {
            read_u32(self.bytes, self.offset) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the length header plus the content, without padding.
    pub(crate) fn byte_size(&self) -> usize {
        if self.latin1 {
            2 + self.len()
        } else {
            4 + 2 * self.len()
        }
    }

    /// The content bytes, or an empty slice if they run past the buffer.
    fn content(&self) -> &'a [u8] {
        let (header, unit) = if self.latin1 { (2, 1) } else { (4, 2) };
        let start = self.offset.saturating_add(header);
        self.len()
            .checked_mul(unit)
            .and_then(|len| start.checked_add(len))
            .and_then(|end| self.bytes.get(start..end))
            .unwrap_or(&[])
    }

    /// The string as UTF-16 code units.
    pub fn units(&self) -> impl Iterator<Item = u16> + 'a {
        let latin1 = self.latin1;
        let step = if latin1 { 1 } else { 2 };
        self.content().chunks_exact(step).map(move |unit| {
            if latin1 {
                unit[0] as u16
            } else {
                u16::from_le_bytes([unit[0], unit[1]])
            }
        })
    }

    /// Compares against `other` by UTF-16 code unit.
    pub fn cmp_str(&self, other: &str) -> Ordering {
        self.units().cmp(other.encode_utf16())
    }

    /// Appends the stored form, in its current encoding, to `out`.
    pub(crate) fn push_raw(&self, out: &mut Vec<u8>) {
        let content = self.content();
        if self.latin1 {
            out.extend_from_slice(&(content.len() as u16).to_le_bytes());
        } else {
            out.extend_from_slice(&((content.len() / 2) as u32).to_le_bytes());
        }
        out.extend_from_slice(content);
        pad_to_alignment(out);
    }
}

impl PartialEq for StringRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.units().eq(other.units())
    }
}

impl PartialEq<str> for StringRef<'_> {
    fn eq(&self, other: &str) -> bool {
        self.cmp_str(other) == Ordering::Equal
    }
}

impl PartialEq<&str> for StringRef<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.cmp_str(other) == Ordering::Equal
    }
}

/// Unpaired surrogates are shown as U+FFFD.
impl fmt::Display for StringRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;
        for c in char::decode_utf16(self.units()) {
            f.write_char(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl fmt::Debug for StringRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&alloc::string::ToString::to_string(self), f)
    }
}
