//! Rewriting containers without the bytes that edits left behind.

use crate::container::{write_container_header, ContainerRef, ValueRef};
use crate::layout::*;
use crate::value::{Cell, ValueType};
use crate::walk::{can_descend, Walk};
use alloc::vec::Vec;

/// Appends a compacted copy of `container` to `out`.
///
/// Items keep their order and encoding; nested containers are compacted too.
/// The copy holds exactly the header, the live item data and the table.
/// Reading follows the limits of [`Walk`], so a copy of an unvalidated
/// container stays within the size that container claims.
pub(crate) fn push_compacted(container: ContainerRef<'_>, out: &mut Vec<u8>) {
    let mut walk = Walk::new(container);
    let affordable = walk.charge(BASE_SIZE);
    push_container(container, out, &mut walk, 0, affordable);
}

fn push_container(container: ContainerRef<'_>, out: &mut Vec<u8>, walk: &mut Walk, depth: usize, items: bool) {
    let start = out.len();
    out.resize(start + BASE_SIZE, 0);

    let length = if items { container.len() } else { 0 };
    let mut table = Vec::new();
    if container.is_object() {
        for i in 0..length {
            let key = container.entry_key(i);
            if !walk.charge(2 * CELL_SIZE + key.byte_size()) {
                break;
            }
            let entry = out.len() - start;
            out.extend_from_slice(&[0; CELL_SIZE]);
            key.push_raw(out);

            let mut cell = push_value_data(container, container.cell_at(i), out, start, walk, depth);
            cell.set_latin_key(key.is_latin1());
            write_u32(out, start + entry, cell.0);
            table.push(entry as u32);
        }
    } else {
        for i in 0..length {
            if !walk.charge(CELL_SIZE) {
                break;
            }
            let cell = push_value_data(container, container.cell_at(i), out, start, walk, depth);
            table.push(cell.0);
        }
    }

    let table_offset = out.len() - start;
    let written = table.len();
    for slot in table {
        out.extend_from_slice(&slot.to_le_bytes());
    }
    let size = out.len() - start;
    write_container_header(out, start, size, container.is_object(), written, table_offset);
}

/// Appends the data `cell` points at and returns the cell rewritten to point
/// at the copy. Cells with unknown tags, and values the walk cannot afford,
/// come back as null.
fn push_value_data(
    container: ContainerRef<'_>,
    mut cell: Cell,
    out: &mut Vec<u8>,
    start: usize,
    walk: &mut Walk,
    depth: usize,
) -> Cell {
    let offset = (out.len() - start) as u32;
    match container.value_of(cell) {
        ValueRef::Double(d) if !cell.latin_or_int() && walk.charge(8) => {
            out.extend_from_slice(&d.to_le_bytes());
            cell.set_offset(offset);
        }
        ValueRef::String(s) if walk.charge(s.byte_size()) => {
            s.push_raw(out);
            cell.set_offset(offset);
        }
        ValueRef::Array(nested) | ValueRef::Object(nested) if can_descend(depth) && walk.charge(BASE_SIZE) => {
            push_container(nested, out, walk, depth + 1, true);
            cell.set_offset(offset);
        }
        ValueRef::Bool(_) => {}
        ValueRef::Double(_) if cell.latin_or_int() => {}
        _ => cell = Cell::new(ValueType::Null),
    }
    cell
}
