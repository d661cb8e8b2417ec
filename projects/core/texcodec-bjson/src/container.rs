//! Views over containers, and the in-place edits documents are built from.
//!
//! A container starts with a 12-byte header:
//!
//! | Offset | Field |
//! |---|---|
//! | 0 | `size`: total bytes, header included |
//! | 4 | bit 0: `is_object`, bits 1-31: `length` |
//! | 8 | `table_offset`: start of the offset table |
//!
//! Item data follows the header; the table sits at the end. An array's table
//! holds its value [`Cell`]s. An object's table holds the offsets of its
//! entries (a cell followed by the key), sorted by key.

use crate::error::{DocumentError, DocumentResult};
use crate::layout::*;
use crate::string::StringRef;
use crate::value::{Cell, ValueType};
use bitfield::bitfield;
use core::fmt;

bitfield! {
    /// The packed second word of a container header.
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub(crate) struct LengthWord(u32);
    impl Debug;

    pub is_object, set_is_object: 0;
    pub u32, length, set_length: 31, 1;
}

/// A value read in place from a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValueRef<'a> {
    Null,
    Bool(bool),
    Double(f64),
    String(StringRef<'a>),
    Array(ContainerRef<'a>),
    Object(ContainerRef<'a>),
}

impl<'a> ValueRef<'a> {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Bool(_) => ValueType::Bool,
            Self::Double(_) => ValueType::Double,
            Self::String(_) => ValueType::String,
            Self::Array(_) => ValueType::Array,
            Self::Object(_) => ValueType::Object,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<StringRef<'a>> {
        match self {
            Self::String(s) => Some(*s),
            _ => None,
        }
    }

    pub fn as_container(&self) -> Option<ContainerRef<'a>> {
        match self {
            Self::Array(c) | Self::Object(c) => Some(*c),
            _ => None,
        }
    }
}

/// A read-only view of one container inside a document buffer.
///
/// Views never read outside `bytes`; on buffers that skipped validation,
/// inconsistent offsets just yield meaningless values.
#[derive(Clone, Copy)]
pub struct ContainerRef<'a> {
    bytes: &'a [u8],
    base: usize,
}

impl<'a> ContainerRef<'a> {
    pub(crate) fn new(bytes: &'a [u8], base: usize) -> Self {
        Self { bytes, base }
    }

    /// The whole buffer this container lives in.
    pub(crate) fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Offset of the container header within the buffer.
    pub(crate) fn base(&self) -> usize {
        self.base
    }

    /// Total size in bytes, header and table included.
    pub fn size(&self) -> u32 {
        read_u32(self.bytes, self.base + SIZE_OFFSET)
    }

    fn length_word(&self) -> LengthWord {
        LengthWord(read_u32(self.bytes, self.base + LENGTH_WORD_OFFSET))
    }

    pub(crate) fn table_offset(&self) -> u32 {
        read_u32(self.bytes, self.base + TABLE_OFFSET_OFFSET)
    }

    pub fn is_object(&self) -> bool {
        self.length_word().is_object()
    }

    pub fn is_array(&self) -> bool {
        !self.is_object()
    }

    /// Number of items (array values or object entries).
    pub fn len(&self) -> usize {
        self.length_word().length() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw table slot `i`: a cell for arrays, an entry offset for objects.
    pub(crate) fn table_slot(&self, i: usize) -> u32 {
        read_u32(
            self.bytes,
            self.base + self.table_offset() as usize + i * CELL_SIZE,
        )
    }

    /// The cell of item `i`, wherever the container kind keeps it.
    pub(crate) fn cell_at(&self, i: usize) -> Cell {
        if self.is_object() {
            Cell(read_u32(self.bytes, self.base + self.table_slot(i) as usize))
        } else {
            Cell(self.table_slot(i))
        }
    }

    /// Key of object entry `i` (no bounds check on `i`).
    pub(crate) fn entry_key(&self, i: usize) -> StringRef<'a> {
        let entry = self.base + self.table_slot(i) as usize;
        let latin1 = Cell(read_u32(self.bytes, entry)).latin_key();
        StringRef::new(self.bytes, entry + CELL_SIZE, latin1)
    }

    /// Interprets `cell` as a value of this container.
    pub(crate) fn value_of(&self, cell: Cell) -> ValueRef<'a> {
        let data = self.base + cell.offset() as usize;
        match cell.value_type() {
            None | Some(ValueType::Null) => ValueRef::Null,
            Some(ValueType::Bool) => ValueRef::Bool(cell.offset() != 0),
            Some(ValueType::Double) if cell.latin_or_int() => ValueRef::Double(cell.int_value() as f64),
            Some(ValueType::Double) => ValueRef::Double(read_f64(self.bytes, data)),
            Some(ValueType::String) => ValueRef::String(StringRef::new(self.bytes, data, cell.latin_or_int())),
            // Nested containers always live after the parent's header; anything
            // else could only loop back on itself.
            Some(ValueType::Array | ValueType::Object) if (cell.offset() as usize) < BASE_SIZE => {
                ValueRef::Null
            }
            Some(ValueType::Array) => ValueRef::Array(ContainerRef::new(self.bytes, data)),
            Some(ValueType::Object) => ValueRef::Object(ContainerRef::new(self.bytes, data)),
        }
    }

    /// Value at position `i`. For objects this is the `i`th entry in key order.
    pub fn at(&self, i: usize) -> Option<ValueRef<'a>> {
        (i < self.len()).then(|| self.value_of(self.cell_at(i)))
    }

    /// Key at position `i`, for objects.
    pub fn key_at(&self, i: usize) -> Option<StringRef<'a>> {
        (self.is_object() && i < self.len()).then(|| self.entry_key(i))
    }

    /// Binary search for `key`.
    ///
    /// Returns the index of the first entry whose key is not less than `key`,
    /// and whether that entry's key equals it. Keys compare by UTF-16 code unit.
    pub fn index_of(&self, key: &str) -> (usize, bool) {
        let mut min = 0;
        let mut n = self.len();
        while n > 0 {
            let half = n >> 1;
            let middle = min + half;
            if self.entry_key(middle).cmp_str(key).is_ge() {
                n = half;
            } else {
                min = middle + 1;
                n -= half + 1;
            }
        }
        let found = min < self.len() && self.entry_key(min).cmp_str(key).is_eq();
        (min, found)
    }

    /// Value stored under `key`, for objects.
    pub fn get(&self, key: &str) -> Option<ValueRef<'a>> {
        if !self.is_object() {
            return None;
        }
        match self.index_of(key) {
            (index, true) => self.at(index),
            _ => None,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.is_object() && self.index_of(key).1
    }

    /// Values in order (array order, or key order for objects).
    pub fn values(&self) -> impl Iterator<Item = ValueRef<'a>> + 'a {
        let this = *self;
        (0..self.len()).map(move |i| this.value_of(this.cell_at(i)))
    }

    /// Key/value pairs in key order. Empty for arrays.
    pub fn entries(&self) -> impl Iterator<Item = (StringRef<'a>, ValueRef<'a>)> + 'a {
        let this = *self;
        let len = if self.is_object() { self.len() } else { 0 };
        (0..len).map(move |i| (this.entry_key(i), this.value_of(this.cell_at(i))))
    }
}

/// Containers are equal when they hold equal items in the same order.
impl PartialEq for ContainerRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_object() != other.is_object() || self.len() != other.len() {
            return false;
        }
        if self.is_object() {
            self.entries().eq(other.entries())
        } else {
            self.values().eq(other.values())
        }
    }
}

impl fmt::Debug for ContainerRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_object() {
            f.debug_map().entries(self.entries()).finish()
        } else {
            f.debug_list().entries(self.values()).finish()
        }
    }
}

/// Writes a full container header at `base`.
pub(crate) fn write_container_header(
    bytes: &mut [u8],
    base: usize,
    size: usize,
    is_object: bool,
    length: usize,
    table_offset: usize,
) {
    let mut word = LengthWord::default();
    word.set_is_object(is_object);
    word.set_length(length as u32);
    write_u32(bytes, base + SIZE_OFFSET, size as u32);
    write_u32(bytes, base + LENGTH_WORD_OFFSET, word.0);
    write_u32(bytes, base + TABLE_OFFSET_OFFSET, table_offset as u32);
}

/// Opens room for `data_size` bytes of item data, plus `num_items` new table
/// slots at `pos` unless `replace` is set.
///
/// The table moves forward by `data_size` bytes (split around `pos` when
/// inserting), the new slots are set to the old table offset, and that
/// offset, where the caller writes the new data, is returned.
///
/// # Errors
///
/// [`DocumentError::CapacityExceeded`] if the container would reach
/// [`MAX_SIZE`]. Nothing is modified in that case.
///
/// # Panics
///
/// If `bytes` has no room past the container for the growth; callers
/// reserve it first.
pub(crate) fn reserve_space(
    bytes: &mut [u8],
    base: usize,
    data_size: usize,
    pos: usize,
    num_items: usize,
    replace: bool,
) -> DocumentResult<usize> {
    let container = ContainerRef::new(bytes, base);
    let size = container.size() as usize;
    let length = container.len();
    let is_object = container.is_object();
    let table_offset = container.table_offset() as usize;
    debug_assert!(pos <= length);

    if size + data_size >= MAX_SIZE {
        log::warn!("Binary JSON document too large: {size} + {data_size} bytes exceeds {MAX_SIZE}");
        return Err(DocumentError::CapacityExceeded {
            requested: size + data_size,
            limit: MAX_SIZE,
        });
    }

    let table = base + table_offset;
    if replace {
        bytes.copy_within(table..table + length * CELL_SIZE, table + data_size);
    } else {
        bytes.copy_within(
            table + pos * CELL_SIZE..table + length * CELL_SIZE,
            table + data_size + (pos + num_items) * CELL_SIZE,
        );
        bytes.copy_within(table..table + pos * CELL_SIZE, table + data_size);
    }

    let new_table = table + data_size;
    for i in 0..num_items {
        write_u32(bytes, new_table + (pos + i) * CELL_SIZE, table_offset as u32);
    }

    let (new_size, new_length) = if replace {
        (size + data_size, length)
    } else {
        (size + data_size + num_items * CELL_SIZE, length + num_items)
    };
    write_container_header(bytes, base, new_size, is_object, new_length, table_offset + data_size);
    Ok(table_offset)
}

/// Removes `num_items` table slots starting at `pos`. The item data stays
/// behind until the document is compacted.
pub(crate) fn remove_items(bytes: &mut [u8], base: usize, pos: usize, num_items: usize) {
    let container = ContainerRef::new(bytes, base);
    let length = container.len();
    let is_object = container.is_object();
    let size = container.size() as usize;
    let table_offset = container.table_offset() as usize;
    debug_assert!(pos + num_items <= length);

    let table = base + table_offset;
    bytes.copy_within(
        table + (pos + num_items) * CELL_SIZE..table + length * CELL_SIZE,
        table + pos * CELL_SIZE,
    );
    write_container_header(bytes, base, size, is_object, length - num_items, table_offset);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    /// An array container at offset 0 holding inline integer cells, with
    /// `spare` zero bytes after it.
    fn int_array(values: &[i32], spare: usize) -> Vec<u8> {
        let size = BASE_SIZE + values.len() * CELL_SIZE;
        let mut bytes = vec![0u8; size + spare];
        write_container_header(&mut bytes, 0, size, false, values.len(), BASE_SIZE);
        for (i, value) in values.iter().enumerate() {
            let mut cell = Cell::new(ValueType::Double);
            cell.set_latin_or_int(true);
            cell.set_int_value(*value);
            write_u32(&mut bytes, BASE_SIZE + i * CELL_SIZE, cell.0);
        }
        bytes
    }

    fn ints(bytes: &[u8]) -> Vec<f64> {
        ContainerRef::new(bytes, 0)
            .values()
            .map(|v| v.as_f64().unwrap())
            .collect()
    }

    #[test]
    fn header_fields_are_read_back() {
        let bytes = int_array(&[1, 2, 3], 0);
        let container = ContainerRef::new(&bytes, 0);

        assert_eq!(container.size(), 24);
        assert_eq!(container.len(), 3);
        assert!(container.is_array());
        assert_eq!(container.table_offset(), 12);
        assert_eq!(ints(&bytes), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn is_object_is_bit_zero_of_length_word() {
        let mut bytes = vec![0u8; BASE_SIZE];
        write_container_header(&mut bytes, 0, BASE_SIZE, true, 5, BASE_SIZE);
        assert_eq!(read_u32(&bytes, 4), 1 | (5 << 1));
    }

    #[rstest]
    #[case::front(0, vec![9.0, 1.0, 2.0, 3.0])]
    #[case::middle(2, vec![1.0, 2.0, 9.0, 3.0])]
    #[case::back(3, vec![1.0, 2.0, 3.0, 9.0])]
    fn reserve_space_splits_table_around_insert(#[case] pos: usize, #[case] expected: Vec<f64>) {
        let mut bytes = int_array(&[1, 2, 3], 8 + CELL_SIZE);
        let offset = reserve_space(&mut bytes, 0, 8, pos, 1, false).unwrap();

        // Data goes where the old table started.
        assert_eq!(offset, BASE_SIZE);
        let container = ContainerRef::new(&bytes, 0);
        assert_eq!(container.size(), 24 + 8 + 4);
        assert_eq!(container.table_offset(), 12 + 8);
        assert_eq!(container.len(), 4);
        // The new slot holds the old table offset until the caller fills it.
        assert_eq!(container.table_slot(pos), BASE_SIZE as u32);

        let mut cell = Cell::new(ValueType::Double);
        cell.set_latin_or_int(true);
        cell.set_int_value(9);
        write_u32(&mut bytes, 12 + 8 + pos * CELL_SIZE, cell.0);
        assert_eq!(ints(&bytes), expected);
    }

    #[test]
    fn reserve_space_replace_moves_whole_table() {
        let mut bytes = int_array(&[1, 2, 3], 8);
        let offset = reserve_space(&mut bytes, 0, 8, 1, 1, true).unwrap();

        assert_eq!(offset, BASE_SIZE);
        let container = ContainerRef::new(&bytes, 0);
        assert_eq!(container.len(), 3);
        assert_eq!(container.size(), 24 + 8);
        assert_eq!(container.table_offset(), 20);
        assert_eq!(container.table_slot(1), BASE_SIZE as u32);
        assert_eq!(container.at(0).unwrap().as_f64(), Some(1.0));
        assert_eq!(container.at(2).unwrap().as_f64(), Some(3.0));
    }

    #[test]
    fn reserve_space_over_limit_leaves_buffer_untouched() {
        let mut bytes = int_array(&[1], 0);
        write_u32(&mut bytes, SIZE_OFFSET, (MAX_SIZE - 10) as u32);
        let before = bytes.clone();

        let result = reserve_space(&mut bytes, 0, 10, 0, 1, false);
        assert_eq!(
            result,
            Err(DocumentError::CapacityExceeded {
                requested: MAX_SIZE,
                limit: MAX_SIZE
            })
        );
        assert_eq!(bytes, before);
    }

    #[rstest]
    #[case(0, 1, vec![2.0, 3.0, 4.0])]
    #[case(1, 2, vec![1.0, 4.0])]
    #[case(3, 1, vec![1.0, 2.0, 3.0])]
    #[case(0, 4, vec![])]
    fn remove_items_closes_gap(#[case] pos: usize, #[case] count: usize, #[case] expected: Vec<f64>) {
        let mut bytes = int_array(&[1, 2, 3, 4], 0);
        remove_items(&mut bytes, 0, pos, count);

        assert_eq!(ints(&bytes), expected);
        // Size is only reclaimed by compaction.
        assert_eq!(ContainerRef::new(&bytes, 0).size(), 28);
    }

    #[test]
    fn at_past_end_is_none() {
        let bytes = int_array(&[1], 0);
        let container = ContainerRef::new(&bytes, 0);
        assert!(container.at(1).is_none());
        assert!(container.key_at(0).is_none());
        assert!(container.get("a").is_none());
    }

    #[test]
    fn nested_container_pointing_at_parent_header_reads_as_null() {
        let mut bytes = int_array(&[0], 0);
        let mut cell = Cell::new(ValueType::Array);
        cell.set_offset(0);
        write_u32(&mut bytes, BASE_SIZE, cell.0);
        assert_eq!(ContainerRef::new(&bytes, 0).at(0), Some(ValueRef::Null));
    }

    #[test]
    fn views_over_garbage_do_not_panic() {
        let bytes = [0xFFu8; 16];
        let container = ContainerRef::new(&bytes, 0);
        assert!(container.is_object());
        let _ = container.index_of("key");
        let _ = container.at(0);
        let _ = container.key_at(5).map(|k| k.to_string());
    }
}
