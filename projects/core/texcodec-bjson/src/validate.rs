//! Structural validation of untrusted document bytes.
//!
//! After a buffer passes, every offset reachable from the root points inside
//! the container that owns it, so reads through [`ContainerRef`] always see
//! the data the writer intended. Items of one container never share bytes,
//! so walking a validated tree touches each byte at most once. Any failed
//! check rejects the whole buffer.

use crate::container::{ContainerRef, ValueRef};
use crate::error::InvalidReason;
use crate::layout::*;
use crate::string::StringRef;
use crate::value::{Cell, ValueType};
use alloc::vec::Vec;
use core::ops::Range;

/// Checks a complete document: header, then the root container and
/// everything below it.
pub(crate) fn validate_document(bytes: &[u8]) -> Result<(), InvalidReason> {
    check_header(bytes)?;
    validate_container(bytes, HEADER_SIZE, bytes.len() - HEADER_SIZE, true, 0)
}

/// Checks the tag, version and that the root container's declared size fits.
///
/// Returns the root size. This is the part of validation that is never skipped.
pub(crate) fn check_header(bytes: &[u8]) -> Result<usize, InvalidReason> {
    if bytes.len() < HEADER_SIZE + BASE_SIZE {
        return Err(InvalidReason::TooShort);
    }
    let tag = read_u32(bytes, 0);
    if tag != BINARY_FORMAT_TAG {
        return Err(InvalidReason::BadTag(tag));
    }
    let version = read_u32(bytes, 4);
    if version != FORMAT_VERSION {
        return Err(InvalidReason::BadVersion(version));
    }
    let size = ContainerRef::new(bytes, HEADER_SIZE).size() as usize;
    if size < BASE_SIZE || size > bytes.len() - HEADER_SIZE || size > MAX_SIZE {
        return Err(InvalidReason::ContainerOutOfBounds);
    }
    Ok(size)
}

/// Checks that the root container's table fits, so in-place edits can move it.
pub(crate) fn check_root_table(bytes: &[u8]) -> Result<(), InvalidReason> {
    let root = ContainerRef::new(bytes, HEADER_SIZE);
    table_fits(root, root.size() as usize)
}

fn table_fits(container: ContainerRef<'_>, size: usize) -> Result<(), InvalidReason> {
    let table_offset = container.table_offset() as usize;
    let table_end = (container.len() as u64) * CELL_SIZE as u64 + table_offset as u64;
    if table_offset < BASE_SIZE || table_end > size as u64 {
        return Err(InvalidReason::TableOutOfBounds);
    }
    Ok(())
}

fn validate_container(
    bytes: &[u8],
    base: usize,
    available: usize,
    expect_object: bool,
    depth: usize,
) -> Result<(), InvalidReason> {
    if depth > MAX_NESTING_DEPTH {
        return Err(InvalidReason::TooDeep);
    }
    if available < BASE_SIZE {
        return Err(InvalidReason::ContainerOutOfBounds);
    }

    let container = ContainerRef::new(bytes, base);
    let size = container.size() as usize;
    if size < BASE_SIZE || size > available {
        return Err(InvalidReason::ContainerOutOfBounds);
    }
    if depth > 0 && container.is_object() != expect_object {
        return Err(InvalidReason::KindMismatch);
    }
    table_fits(container, size)?;

    let table_offset = container.table_offset() as usize;
    let mut spans = Vec::with_capacity(container.len());
    let mut nested = Vec::new();
    if container.is_object() {
        let mut previous: Option<StringRef<'_>> = None;
        for i in 0..container.len() {
            let entry = container.table_slot(i) as usize;
            // A cell plus at least part of a key must fit before the table.
            if entry < BASE_SIZE || entry + CELL_SIZE >= table_offset {
                return Err(InvalidReason::EntryOutOfBounds);
            }
            let key = container.entry_key(i);
            let key_room = table_offset - entry - CELL_SIZE;
            if !string_fits(key, key_room) {
                return Err(InvalidReason::EntryOutOfBounds);
            }
            if let Some(previous) = previous {
                if previous.units().cmp(key.units()).is_gt() {
                    return Err(InvalidReason::KeyOutOfOrder);
                }
            }
            spans.push(entry..entry + CELL_SIZE + key.byte_size());
            check_value(container, container.cell_at(i), table_offset, &mut spans, &mut nested)?;
            previous = Some(key);
        }
    } else {
        for i in 0..container.len() {
            check_value(container, container.cell_at(i), table_offset, &mut spans, &mut nested)?;
        }
    }

    // Items own disjoint bytes, so every byte is visited at most once below.
    spans.sort_unstable_by_key(|span| span.start);
    if spans.windows(2).any(|pair| pair[1].start < pair[0].end) {
        return Err(InvalidReason::OverlappingData);
    }

    for child in nested {
        validate_container(bytes, child.base, child.room, child.is_object, depth + 1)?;
    }
    Ok(())
}

fn string_fits(s: StringRef<'_>, room: usize) -> bool {
    let header = if s.is_latin1() { 2 } else { 4 };
    room >= header && s.byte_size() <= room
}

/// A nested container found while checking its parent, validated afterwards.
struct NestedContainer {
    base: usize,
    room: usize,
    is_object: bool,
}

/// Checks that the data `cell` points at fits before the table, recording
/// the bytes it occupies in `spans`.
fn check_value(
    container: ContainerRef<'_>,
    cell: Cell,
    table_offset: usize,
    spans: &mut Vec<Range<usize>>,
    nested: &mut Vec<NestedContainer>,
) -> Result<(), InvalidReason> {
    let value_type = cell.value_type().ok_or(InvalidReason::UnknownType(cell.tag()))?;
    match value_type {
        ValueType::Null | ValueType::Bool => return Ok(()),
        ValueType::Double if cell.latin_or_int() => return Ok(()),
        _ => {}
    }

    let offset = cell.offset() as usize;
    if offset < BASE_SIZE || offset + CELL_SIZE > table_offset {
        return Err(InvalidReason::ValueOutOfBounds);
    }
    let room = table_offset - offset;

    let used = match container.value_of(cell) {
        ValueRef::Double(_) if room < 8 => return Err(InvalidReason::ValueOutOfBounds),
        ValueRef::Double(_) => 8,
        ValueRef::String(s) if !string_fits(s, room) => return Err(InvalidReason::ValueOutOfBounds),
        ValueRef::String(s) => s.byte_size(),
        ValueRef::Array(child) | ValueRef::Object(child) => {
            let size = child.size() as usize;
            if size < BASE_SIZE || size > room {
                return Err(InvalidReason::ContainerOutOfBounds);
            }
            nested.push(NestedContainer {
                base: child.base(),
                room,
                is_object: value_type == ValueType::Object,
            });
            size
        }
        _ => return Ok(()),
    };
    spans.push(offset..offset + used);
    Ok(())
}
