//! Value cells and the owned [`Value`] type.

use crate::compact::push_compacted;
use crate::document::Document;
use crate::string::{push_string, use_latin1};
use alloc::string::String;
use alloc::vec::Vec;
use bitfield::bitfield;

bitfield! {
    /// The 32-bit slot every value is stored in.
    ///
    /// Bit layout:
    /// - Bits 0-2: [`ValueType`] tag
    /// - Bit 3: inline integer (doubles) or Latin-1 (strings)
    /// - Bit 4: Latin-1 key (object entries only)
    /// - Bits 5-31: offset of the value's data from the start of the enclosing
    ///   container, the inline integer (sign extended), or the bool
    #[derive(Clone, Copy, PartialEq, Eq, Default)]
    pub struct Cell(u32);
    impl Debug;

    pub u8, tag, set_tag: 2, 0;
    pub latin_or_int, set_latin_or_int: 3;
    pub latin_key, set_latin_key: 4;
    pub u32, offset, set_offset: 31, 5;
    pub i32, int_value, set_int_value: 31, 5;
}

/// The type tag stored in the low 3 bits of a [`Cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueType {
    Null = 0,
    Bool = 1,
    Double = 2,
    String = 3,
    Array = 4,
    Object = 5,
}

impl ValueType {
    /// Resolves a stored tag. Tags 6 and 7 are not used by any type.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Null),
            1 => Some(Self::Bool),
            2 => Some(Self::Double),
            3 => Some(Self::String),
            4 => Some(Self::Array),
            5 => Some(Self::Object),
            _ => None,
        }
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Double => "double",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl Cell {
    pub(crate) fn new(value_type: ValueType) -> Self {
        let mut cell = Self::default();
        cell.set_tag(value_type as u8);
        cell
    }

    pub(crate) fn value_type(&self) -> Option<ValueType> {
        ValueType::from_tag(self.tag())
    }
}

/// Returns the 27-bit inline integer for `d`, if it has one.
///
/// A double is stored inline when its unbiased exponent is in `0..=25` and
/// it has no fractional bits, i.e. it is an integer with magnitude in
/// `1..2^26`. Zero is not inlined.
pub fn compress_number(d: f64) -> Option<i32> {
    const EXPONENT_OFFSET: u32 = 52;
    const FRACTION_MASK: u64 = 0x000f_ffff_ffff_ffff;
    const EXPONENT_MASK: u64 = 0x7ff0_0000_0000_0000;

    let bits = d.to_bits();
    let exponent = ((bits & EXPONENT_MASK) >> EXPONENT_OFFSET) as i32 - 1023;
    if !(0..=25).contains(&exponent) {
        return None;
    }
    if bits & (FRACTION_MASK >> exponent) != 0 {
        return None;
    }

    let mantissa = (bits & FRACTION_MASK) | (1 << EXPONENT_OFFSET);
    let value = (mantissa >> (EXPONENT_OFFSET - exponent as u32)) as i32;
    Some(if bits >> 63 != 0 { -value } else { value })
}

/// An owned document value.
///
/// Arrays and objects are [`Document`] handles; reading a nested container
/// out of a document shares its storage instead of copying it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Double(f64),
    String(String),
    Array(Document),
    Object(Document),
    /// "No value". Never stored: arrays store it as null, and inserting it
    /// into an object removes the key.
    Undefined,
}

impl Value {
    /// The stored type, or `None` for [`Value::Undefined`].
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Self::Null => Some(ValueType::Null),
            Self::Bool(_) => Some(ValueType::Bool),
            Self::Double(_) => Some(ValueType::Double),
            Self::String(_) => Some(ValueType::String),
            Self::Array(_) => Some(ValueType::Array),
            Self::Object(_) => Some(ValueType::Object),
            Self::Undefined => None,
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

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The nested array or object, if this is one.
    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Array(doc) | Self::Object(doc) => Some(doc),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Double(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Wraps a document as [`Value::Array`] or [`Value::Object`] by its kind.
impl From<Document> for Value {
    fn from(value: Document) -> Self {
        if value.is_object() {
            Self::Object(value)
        } else {
            Self::Array(value)
        }
    }
}

/// A value ready to be written: its cell (without the data offset) and the
/// bytes that go in the container's data area.
pub(crate) struct EncodedValue {
    pub(crate) cell: Cell,
    pub(crate) data: Vec<u8>,
}

impl EncodedValue {
    /// The cell to store once `data` has been written at `offset`.
    pub(crate) fn cell_at(&self, offset: usize) -> Cell {
        let mut cell = self.cell;
        if !self.data.is_empty() {
            cell.set_offset(offset as u32);
        }
        cell
    }
}

/// Encodes `value`. Undefined becomes null; nested containers are compacted.
pub(crate) fn encode_value(value: &Value) -> EncodedValue {
    let mut data = Vec::new();
    let cell = match value {
        Value::Null | Value::Undefined => Cell::new(ValueType::Null),
        Value::Bool(b) => {
            let mut cell = Cell::new(ValueType::Bool);
            cell.set_offset(*b as u32);
            cell
        }
        Value::Double(d) => {
            let mut cell = Cell::new(ValueType::Double);
            match compress_number(*d) {
                Some(int) => {
                    cell.set_latin_or_int(true);
                    cell.set_int_value(int);
                }
                None => data.extend_from_slice(&d.to_le_bytes()),
            }
            cell
        }
        Value::String(s) => {
            let latin1 = use_latin1(s);
            let mut cell = Cell::new(ValueType::String);
            cell.set_latin_or_int(latin1);
            push_string(&mut data, s, latin1);
            cell
        }
        Value::Array(doc) | Value::Object(doc) => {
            let container = doc.container();
            push_compacted(container, &mut data);
            Cell::new(if container.is_object() {
                ValueType::Object
            } else {
                ValueType::Array
            })
        }
    };
    EncodedValue { cell, data }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(1.0, Some(1))]
    #[case(-1.0, Some(-1))]
    #[case(42.0, Some(42))]
    #[case(-12345.0, Some(-12345))]
    #[case(33_554_432.0, Some(33_554_432))] // 2^25
    #[case(67_108_863.0, Some(67_108_863))] // 2^26 - 1, exponent 25
    #[case(67_108_864.0, None)] // 2^26, exponent 26
    #[case(0.0, None)]
    #[case(-0.0, None)]
    #[case(0.5, None)]
    #[case(1.5, None)]
    #[case(3.25, None)]
    #[case(f64::INFINITY, None)]
    #[case(f64::NAN, None)]
    fn compress_number_inlines_small_integers(#[case] d: f64, #[case] expected: Option<i32>) {
        assert_eq!(compress_number(d), expected);
    }

    #[test]
    fn cell_fields_use_documented_bits() {
        let mut cell = Cell::new(ValueType::String);
        cell.set_latin_or_int(true);
        cell.set_latin_key(true);
        cell.set_offset(0x40);

        assert_eq!(cell.0, 3 | (1 << 3) | (1 << 4) | (0x40 << 5));
        assert_eq!(cell.value_type(), Some(ValueType::String));
    }

    #[rstest]
    #[case(-1)]
    #[case(-67_108_863)]
    #[case(67_108_863)]
    #[case(0)]
    fn inline_integers_are_sign_extended(#[case] value: i32) {
        let mut cell = Cell::new(ValueType::Double);
        cell.set_latin_or_int(true);
        cell.set_int_value(value);

        assert_eq!(cell.int_value(), value);
        assert_eq!(cell.tag(), ValueType::Double as u8);
    }

    #[test]
    fn negative_one_fills_payload_bits() {
        let mut cell = Cell::default();
        cell.set_int_value(-1);
        assert_eq!(cell.0, 0xFFFF_FFE0);
    }

    #[rstest]
    #[case(6)]
    #[case(7)]
    fn unused_tags_have_no_type(#[case] tag: u8) {
        assert_eq!(ValueType::from_tag(tag), None);
    }

    #[test]
    fn encode_inline_double_has_no_data() {
        let encoded = encode_value(&Value::Double(-7.0));
        assert!(encoded.data.is_empty());
        assert!(encoded.cell.latin_or_int());
        assert_eq!(encoded.cell.int_value(), -7);
        // The offset is not touched for inline values.
        assert_eq!(encoded.cell_at(100), encoded.cell);
    }

    #[test]
    fn encode_fractional_double_stores_eight_bytes() {
        let encoded = encode_value(&Value::Double(0.25));
        assert_eq!(encoded.data, 0.25f64.to_le_bytes().to_vec());
        assert!(!encoded.cell.latin_or_int());
        assert_eq!(encoded.cell_at(20).offset(), 20);
    }

    #[rstest]
    #[case(Value::Null, ValueType::Null)]
    #[case(Value::Undefined, ValueType::Null)]
    #[case(Value::Bool(true), ValueType::Bool)]
    fn encode_scalars_without_data(#[case] value: Value, #[case] expected: ValueType) {
        let encoded = encode_value(&value);
        assert!(encoded.data.is_empty());
        assert_eq!(encoded.cell.value_type(), Some(expected));
    }

    #[test]
    fn encode_bool_stores_value_in_payload() {
        assert_eq!(encode_value(&Value::Bool(true)).cell.offset(), 1);
        assert_eq!(encode_value(&Value::Bool(false)).cell.offset(), 0);
    }

    #[test]
    fn encode_string_picks_encoding() {
        let latin = encode_value(&Value::from("abc"));
        assert!(latin.cell.latin_or_int());
        assert_eq!(latin.data.len(), 8);

        let full = encode_value(&Value::from("\u{3042}"));
        assert!(!full.cell.latin_or_int());
        assert_eq!(full.data.len(), 8);
    }

    #[test]
    fn encode_container_copies_compacted_bytes() {
        let mut nested = Document::new_array();
        nested.push(1).unwrap();

        let encoded = encode_value(&Value::from(nested.clone()));
        assert_eq!(encoded.cell.value_type(), Some(ValueType::Array));
        assert_eq!(encoded.data.len(), nested.container().size() as usize);
    }
}
