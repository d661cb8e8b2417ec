//! Conversion between documents and `serde_json` trees.

use crate::container::{ContainerRef, ValueRef};
use crate::document::{Document, DocumentRef};
use crate::error::{DocumentError, DocumentResult};
use crate::layout::{BASE_SIZE, CELL_SIZE};
use crate::value::Value;
use crate::walk::{can_descend, Walk};
use alloc::string::ToString;
use alloc::vec::Vec;
use serde_json::{Map, Number, Value as JsonValue};

/// Largest magnitude below which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

impl Document {
    /// Builds a document from a JSON array or object, then compacts it.
    ///
    /// # Errors
    ///
    /// [`DocumentError::NotAContainer`] if `tree` is a scalar, and
    /// [`DocumentError::CapacityExceeded`] if it does not fit the format.
    ///
    /// # Example
    ///
    /// ```
    /// use serde_json::json;
    /// use texcodec_bjson::Document;
    ///
    /// let tree = json!({"b": [1, 2.5, "three"], "a": null});
    /// let doc = Document::from_tree(&tree).unwrap();
    /// assert_eq!(doc.keys(), vec!["a", "b"]);
    /// assert_eq!(doc.to_tree(), tree);
    /// ```
    pub fn from_tree(tree: &JsonValue) -> DocumentResult<Self> {
        let mut doc = match tree {
            JsonValue::Array(items) => {
                let mut doc = Document::new_array();
                for item in items {
                    doc.push(value_from_tree(item)?)?;
                }
                doc
            }
            JsonValue::Object(members) => {
                let mut doc = Document::new_object();
                for (key, member) in members {
                    doc.insert(key, value_from_tree(member)?)?;
                }
                doc
            }
            _ => return Err(DocumentError::NotAContainer),
        };
        doc.compact();
        Ok(doc)
    }

    /// Reads the document out as a JSON tree.
    ///
    /// Integral numbers up to 2^53 in magnitude become JSON integers;
    /// NaN and infinities become null. On buffers that skipped validation,
    /// shared or runaway subtrees are cut off as null once the walk has read
    /// as many bytes as the root spans.
    pub fn to_tree(&self) -> JsonValue {
        self.container().to_tree()
    }
}

impl DocumentRef<'_> {
    /// See [`Document::to_tree`].
    pub fn to_tree(&self) -> JsonValue {
        self.container().to_tree()
    }
}

impl ContainerRef<'_> {
    /// See [`Document::to_tree`].
    pub fn to_tree(&self) -> JsonValue {
        let mut walk = Walk::new(*self);
        if walk.charge(BASE_SIZE) {
            container_tree(*self, &mut walk, 0)
        } else if self.is_object() {
            JsonValue::Object(Map::new())
        } else {
            JsonValue::Array(Vec::new())
        }
    }
}

impl ValueRef<'_> {
    /// See [`Document::to_tree`].
    pub fn to_tree(&self) -> JsonValue {
        match self {
            ValueRef::Array(c) | ValueRef::Object(c) => c.to_tree(),
            scalar => scalar_tree(scalar),
        }
    }
}

fn container_tree(container: ContainerRef<'_>, walk: &mut Walk, depth: usize) -> JsonValue {
    if container.is_object() {
        let mut members = Map::new();
        for i in 0..container.len() {
            let key = container.entry_key(i);
            if !walk.charge(2 * CELL_SIZE + key.byte_size()) {
                break;
            }
            let value = value_tree(container.value_of(container.cell_at(i)), walk, depth);
            members.insert(key.to_string(), value);
        }
        JsonValue::Object(members)
    } else {
        let mut items = Vec::new();
        for i in 0..container.len() {
            if !walk.charge(CELL_SIZE) {
                break;
            }
            items.push(value_tree(container.value_of(container.cell_at(i)), walk, depth));
        }
        JsonValue::Array(items)
    }
}

fn value_tree(value: ValueRef<'_>, walk: &mut Walk, depth: usize) -> JsonValue {
    match value {
        ValueRef::String(s) if !walk.charge(s.byte_size()) => JsonValue::Null,
        ValueRef::Array(c) | ValueRef::Object(c) => {
            if can_descend(depth) && walk.charge(BASE_SIZE) {
                container_tree(c, walk, depth + 1)
            } else {
                JsonValue::Null
            }
        }
        scalar => scalar_tree(&scalar),
    }
}

fn scalar_tree(value: &ValueRef<'_>) -> JsonValue {
    match value {
        ValueRef::Bool(b) => JsonValue::Bool(*b),
        ValueRef::Double(d) => number_to_tree(*d),
        ValueRef::String(s) => JsonValue::String(s.to_string()),
        _ => JsonValue::Null,
    }
}

fn number_to_tree(d: f64) -> JsonValue {
    let integral = d.is_finite() && d == (d as i64) as f64 && d.abs() <= MAX_SAFE_INTEGER;
    // -0.0 stays a float so it survives the round trip.
    if integral && !(d == 0.0 && d.is_sign_negative()) {
        return JsonValue::Number(Number::from(d as i64));
    }
    Number::from_f64(d).map_or(JsonValue::Null, JsonValue::Number)
}

fn value_from_tree(tree: &JsonValue) -> DocumentResult<Value> {
    Ok(match tree {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => n.as_f64().map_or(Value::Null, Value::Double),
        JsonValue::String(s) => Value::String(s.clone()),
        JsonValue::Array(_) | JsonValue::Object(_) => Value::from(Document::from_tree(tree)?),
    })
}
