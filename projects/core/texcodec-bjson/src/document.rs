//! Document handles: shared buffers, clone-on-write edits and compaction.

use crate::compact::push_compacted;
use crate::container::{remove_items, reserve_space, write_container_header, ContainerRef, ValueRef};
use crate::error::{DocumentError, DocumentResult, InvalidReason};
use crate::layout::*;
use crate::string::{push_string, string_storage, use_latin1};
use crate::validate::{check_header, check_root_table, validate_document};
use crate::value::{encode_value, Value};
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Whether to check imported bytes before using them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Check every offset before accepting the buffer.
    #[default]
    Validate,
    /// Only check the header and the root container's bounds.
    ///
    /// For buffers this crate wrote itself. Reads from a malformed buffer
    /// stay in bounds but return meaningless values, and tree walks such as
    /// [`Document::to_tree`] and [`Document::compact`] stop after reading as
    /// many bytes as the root claims, or past the nesting limit.
    BypassValidation,
}

/// Minimum growth when a buffer has to be reallocated.
const MIN_RESERVE: usize = 128;

/// Overwrites and removals tolerated before a document compacts itself.
const AUTO_COMPACT_THRESHOLD: u32 = 32;

/// A document buffer: header, root container, then spare capacity.
#[derive(Clone)]
pub(crate) struct DocumentData {
    bytes: Vec<u8>,
    /// Overwrites and removals since the last compaction.
    compaction_counter: u32,
}

impl DocumentData {
    fn new(bytes: Vec<u8>, compaction_counter: u32) -> Arc<Self> {
        Arc::new(Self {
            bytes,
            compaction_counter,
        })
    }
}

/// A binary JSON array or object.
///
/// Cloning a handle is cheap: clones share one buffer, and whichever handle
/// is edited first copies it. A handle can also point at a container nested
/// inside a shared buffer; that is what reading a nested array or object out
/// of a document returns.
///
/// # Example
///
/// ```
/// use texcodec_bjson::{Document, Validation, Value};
///
/// let mut doc = Document::new_object();
/// doc.insert("name", "texcodec").unwrap();
/// doc.insert("version", 1).unwrap();
///
/// let bytes = doc.to_bytes();
/// let copy = Document::from_bytes(&bytes, Validation::Validate).unwrap();
/// assert_eq!(copy.get("name"), Some(Value::from("texcodec")));
/// ```
#[derive(Clone)]
pub struct Document {
    data: Arc<DocumentData>,
    /// Offset of this handle's container within `data.bytes`.
    root: usize,
}

impl Document {
    fn empty(is_object: bool) -> Self {
        let mut bytes = Vec::with_capacity(HEADER_SIZE + BASE_SIZE);
        push_header(&mut bytes);
        bytes.resize(HEADER_SIZE + BASE_SIZE, 0);
        write_container_header(&mut bytes, HEADER_SIZE, BASE_SIZE, is_object, 0, BASE_SIZE);
        Self {
            data: DocumentData::new(bytes, 0),
            root: HEADER_SIZE,
        }
    }

    /// An empty array.
    pub fn new_array() -> Self {
        Self::empty(false)
    }

    /// An empty object.
    pub fn new_object() -> Self {
        Self::empty(true)
    }

    /// Copies a document out of `bytes`.
    ///
    /// Exactly the header plus the root container's declared size is copied;
    /// anything after it is ignored.
    ///
    /// # Errors
    ///
    /// [`DocumentError::InvalidDocument`] if the header is wrong, the root
    /// does not fit in `bytes`, or (with [`Validation::Validate`]) any
    /// nested offset is out of bounds.
    pub fn from_bytes(bytes: &[u8], validation: Validation) -> DocumentResult<Self> {
        let view = DocumentRef::from_raw_bytes(bytes, validation)?;
        Ok(view.to_owned())
    }

    /// A read-only view of the container.
    pub fn container(&self) -> ContainerRef<'_> {
        ContainerRef::new(&self.data.bytes, self.root)
    }

    fn container_size(&self) -> usize {
        self.container().size() as usize
    }

    pub fn is_object(&self) -> bool {
        self.container().is_object()
    }

    pub fn is_array(&self) -> bool {
        self.container().is_array()
    }

    pub fn len(&self) -> usize {
        self.container().len()
    }

    pub fn is_empty(&self) -> bool {
        self.container().is_empty()
    }

    /// Edits (overwrites and removals) since the last compaction.
    pub fn compaction_counter(&self) -> u32 {
        if self.root == HEADER_SIZE {
            self.data.compaction_counter
        } else {
            0
        }
    }

    /// Header plus container, exactly sized. Works for nested handles too.
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.data.bytes.len();
        let start = self.root.min(len);
        let end = (self.root + self.container_size()).clamp(start, len);
        let mut bytes = Vec::with_capacity(HEADER_SIZE + end - start);
        push_header(&mut bytes);
        bytes.extend_from_slice(&self.data.bytes[start..end]);
        bytes
    }

    /// The live buffer, header included, without copying.
    ///
    /// `None` for handles to nested containers, which have no header of their
    /// own; use [`to_bytes`](Self::to_bytes) for those.
    pub fn raw_bytes(&self) -> Option<&[u8]> {
        (self.root == HEADER_SIZE).then(|| &self.data.bytes[..HEADER_SIZE + self.container_size()])
    }

    /// Turns a value read from this document into an owned [`Value`].
    /// Nested containers share this document's buffer.
    fn lift(&self, value: ValueRef<'_>) -> Value {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Bool(b) => Value::Bool(b),
            ValueRef::Double(d) => Value::Double(d),
            ValueRef::String(s) => Value::String(s.to_string()),
            ValueRef::Array(c) => Value::Array(self.share(c)),
            ValueRef::Object(c) => Value::Object(self.share(c)),
        }
    }

    fn share(&self, container: ContainerRef<'_>) -> Document {
        Document {
            data: Arc::clone(&self.data),
            root: container.base(),
        }
    }

    /// Value at position `i` (array order, or key order for objects).
    pub fn at(&self, i: usize) -> Option<Value> {
        self.container().at(i).map(|v| self.lift(v))
    }

    /// Value stored under `key`. `None` for missing keys and for arrays.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.container().get(key).map(|v| self.lift(v))
    }

    /// Key at position `i`, for objects.
    pub fn key_at(&self, i: usize) -> Option<String> {
        self.container().key_at(i).map(|k| k.to_string())
    }

    /// See [`ContainerRef::index_of`].
    pub fn index_of(&self, key: &str) -> (usize, bool) {
        self.container().index_of(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.container().contains_key(key)
    }

    /// Keys in order. Empty for arrays.
    pub fn keys(&self) -> Vec<String> {
        self.container().entries().map(|(k, _)| k.to_string()).collect()
    }

    fn expect_kind(&self, object: bool) -> DocumentResult<()> {
        match (object, self.is_object()) {
            (true, false) => Err(DocumentError::TypeMismatch {
                expected: "object",
                found: "array",
            }),
            (false, true) => Err(DocumentError::TypeMismatch {
                expected: "array",
                found: "object",
            }),
            _ => Ok(()),
        }
    }

    /// Makes this handle the sole owner of a root buffer with `reserve`
    /// spare bytes, copying its container out if needed.
    ///
    /// The copy is sized `max(size + reserve, min(2 * size, MAX_SIZE))`, with
    /// `reserve` raised to at least 128. Nothing changes on failure.
    fn detach(&mut self, reserve: usize) -> DocumentResult<&mut DocumentData> {
        let container_size = self.container_size();
        let size = HEADER_SIZE + container_size;
        let reusable = self.root == HEADER_SIZE
            && Arc::get_mut(&mut self.data).is_some_and(|data| data.bytes.len() >= size + reserve);

        if !reusable {
            // Nested handles into unvalidated buffers may claim any size.
            let source = self
                .data
                .bytes
                .get(self.root..self.root + container_size)
                .filter(|_| container_size >= BASE_SIZE)
                .ok_or(InvalidReason::ContainerOutOfBounds)?;

            let mut alloc = size;
            if reserve > 0 {
                let reserve = reserve.max(MIN_RESERVE);
                alloc = (size + reserve).max((2 * size).min(MAX_SIZE));
                if alloc > MAX_SIZE {
                    log::warn!("Binary JSON document too large: {alloc} bytes exceeds {MAX_SIZE}");
                    return Err(DocumentError::CapacityExceeded {
                        requested: alloc,
                        limit: MAX_SIZE,
                    });
                }
            }

            let mut bytes = vec![0u8; alloc];
            bytes[..HEADER_SIZE].copy_from_slice(&self.data.bytes[..HEADER_SIZE]);
            bytes[HEADER_SIZE..size].copy_from_slice(source);
            check_root_table(&bytes)?;
            log::debug!("Detached binary JSON document into a {alloc} byte buffer");

            let counter = self.compaction_counter();
            self.data = DocumentData::new(bytes, counter);
            self.root = HEADER_SIZE;
        }
        Ok(Arc::make_mut(&mut self.data))
    }

    fn maybe_compact(&mut self) {
        let counter = self.data.compaction_counter;
        if counter > AUTO_COMPACT_THRESHOLD && counter as usize >= self.len() / 2 {
            self.compact();
        }
    }

    /// Rewrites the document into an exactly sized buffer, dropping data
    /// left behind by overwrites and removals.
    pub fn compact(&mut self) {
        let before = self.container_size();
        let mut bytes = Vec::with_capacity(HEADER_SIZE + before);
        push_header(&mut bytes);
        push_compacted(self.container(), &mut bytes);
        log::debug!(
            "Compacted binary JSON document from {before} to {} bytes",
            bytes.len() - HEADER_SIZE
        );

        self.data = DocumentData::new(bytes, 0);
        self.root = HEADER_SIZE;
    }

    /// Inserts `value` under `key`, replacing any existing value.
    /// Inserting [`Value::Undefined`] removes the key instead.
    ///
    /// # Errors
    ///
    /// [`DocumentError::TypeMismatch`] on arrays,
    /// [`DocumentError::CapacityExceeded`] if the object would grow past
    /// [`MAX_SIZE`].
    pub fn insert(&mut self, key: &str, value: impl Into<Value>) -> DocumentResult<()> {
        self.expect_kind(true)?;
        let value = value.into();
        if let Value::Undefined = value {
            self.remove(key)?;
            return Ok(());
        }

        let encoded = encode_value(&value);
        let latin_key = use_latin1(key);
        let value_offset = CELL_SIZE + string_storage(key, latin_key);
        let required = value_offset + encoded.data.len();

        let data = self.detach(required + CELL_SIZE)?;
        let bytes = data.bytes.as_mut_slice();
        reset_if_empty(bytes);

        let (pos, exists) = ContainerRef::new(bytes, HEADER_SIZE).index_of(key);
        let entry = reserve_space(bytes, HEADER_SIZE, required, pos, 1, exists)?;

        let mut record = Vec::with_capacity(required);
        let mut cell = encoded.cell_at(entry + value_offset);
        cell.set_latin_key(latin_key);
        record.extend_from_slice(&cell.0.to_le_bytes());
        push_string(&mut record, key, latin_key);
        record.extend_from_slice(&encoded.data);

        let start = HEADER_SIZE + entry;
        bytes[start..start + required].copy_from_slice(&record);

        if exists {
            data.compaction_counter += 1;
            self.maybe_compact();
        }
        Ok(())
    }

    /// Removes `key`, returning whether it was present.
    ///
    /// # Errors
    ///
    /// [`DocumentError::TypeMismatch`] on arrays.
    pub fn remove(&mut self, key: &str) -> DocumentResult<bool> {
        self.expect_kind(true)?;
        let (pos, exists) = self.index_of(key);
        if !exists {
            return Ok(false);
        }
        self.remove_slot(pos)?;
        Ok(true)
    }

    /// Appends `value` to an array.
    pub fn push(&mut self, value: impl Into<Value>) -> DocumentResult<()> {
        let len = self.len();
        self.insert_at(len, value)
    }

    /// Inserts `value` before position `index` of an array.
    /// [`Value::Undefined`] is stored as null.
    ///
    /// # Errors
    ///
    /// [`DocumentError::TypeMismatch`] on objects,
    /// [`DocumentError::IndexOutOfBounds`] if `index > len`,
    /// [`DocumentError::CapacityExceeded`] if the array would grow past [`MAX_SIZE`].
    pub fn insert_at(&mut self, index: usize, value: impl Into<Value>) -> DocumentResult<()> {
        self.expect_kind(false)?;
        let len = self.len();
        if index > len {
            return Err(DocumentError::IndexOutOfBounds { index, len });
        }
        self.write_array_value(index, &value.into(), false)
    }

    /// Replaces the value at `index` of an array.
    pub fn replace(&mut self, index: usize, value: impl Into<Value>) -> DocumentResult<()> {
        self.expect_kind(false)?;
        let len = self.len();
        if index >= len {
            return Err(DocumentError::IndexOutOfBounds { index, len });
        }
        self.write_array_value(index, &value.into(), true)?;
        self.data_mut().compaction_counter += 1;
        self.maybe_compact();
        Ok(())
    }

    /// Removes and returns the value at `index` of an array.
    pub fn remove_at(&mut self, index: usize) -> DocumentResult<Value> {
        self.expect_kind(false)?;
        let len = self.len();
        let removed = self
            .at(index)
            .ok_or(DocumentError::IndexOutOfBounds { index, len })?;
        self.remove_slot(index)?;
        Ok(removed)
    }

    fn write_array_value(&mut self, index: usize, value: &Value, replace: bool) -> DocumentResult<()> {
        let encoded = encode_value(value);
        let required = encoded.data.len();

        let data = self.detach(required + CELL_SIZE)?;
        let bytes = data.bytes.as_mut_slice();
        reset_if_empty(bytes);

        let offset = reserve_space(bytes, HEADER_SIZE, required, index, 1, replace)?;
        let start = HEADER_SIZE + offset;
        bytes[start..start + required].copy_from_slice(&encoded.data);

        let table = HEADER_SIZE + ContainerRef::new(bytes, HEADER_SIZE).table_offset() as usize;
        write_u32(bytes, table + index * CELL_SIZE, encoded.cell_at(offset).0);
        Ok(())
    }

    fn remove_slot(&mut self, pos: usize) -> DocumentResult<()> {
        let data = self.detach(0)?;
        remove_items(&mut data.bytes, HEADER_SIZE, pos, 1);
        data.compaction_counter += 1;
        self.maybe_compact();
        Ok(())
    }

    /// Only called right after a successful `detach`, which leaves `data` unique.
    fn data_mut(&mut self) -> &mut DocumentData {
        Arc::make_mut(&mut self.data)
    }
}

/// Discards leftover data in a container with no items, so the next item
/// is written right after the header.
fn reset_if_empty(bytes: &mut [u8]) {
    let root = ContainerRef::new(bytes, HEADER_SIZE);
    if root.is_empty() {
        let is_object = root.is_object();
        write_container_header(bytes, HEADER_SIZE, BASE_SIZE, is_object, 0, BASE_SIZE);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new_object()
    }
}

/// Documents are equal when their contents are, regardless of layout.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.container() == other.container()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.container(), f)
    }
}

/// A read-only document borrowed from caller-owned bytes.
#[derive(Clone, Copy)]
pub struct DocumentRef<'a> {
    /// Header plus root container, exactly.
    bytes: &'a [u8],
}

impl<'a> DocumentRef<'a> {
    /// Uses `bytes` in place as a document. No alignment is required.
    ///
    /// # Errors
    ///
    /// Same as [`Document::from_bytes`].
    pub fn from_raw_bytes(bytes: &'a [u8], validation: Validation) -> DocumentResult<Self> {
        let size = check_header(bytes)?;
        let bytes = &bytes[..HEADER_SIZE + size];
        match validation {
            Validation::Validate => validate_document(bytes).inspect_err(|reason| {
                log::warn!("Rejected binary JSON document: {reason}");
            })?,
            Validation::BypassValidation => check_root_table(bytes)?,
        }
        Ok(Self { bytes })
    }

    pub fn container(&self) -> ContainerRef<'a> {
        ContainerRef::new(self.bytes, HEADER_SIZE)
    }

    /// The header plus root container.
    pub fn raw_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Copies the bytes into an editable [`Document`].
    pub fn to_owned(&self) -> Document {
        Document {
            data: DocumentData::new(self.bytes.to_vec(), 0),
            root: HEADER_SIZE,
        }
    }
}

impl fmt::Debug for DocumentRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.container(), f)
    }
}
