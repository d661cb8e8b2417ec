//! Binary JSON ("qbjs") documents.
//!
//! A document is a JSON array or object stored in one contiguous,
//! little-endian buffer: an 8-byte header (`qbjs`, version 1) followed by the
//! root container, with nested containers stored inline and addressed by
//! offsets relative to their parent. The layout is byte-compatible with
//! buffers produced by other implementations of the format.
//!
//! - [`Document`]: an owned, editable array or object. Clones share storage
//!   and copy on write.
//! - [`DocumentRef`]: a read-only document borrowed from existing bytes.
//! - [`ContainerRef`] / [`ValueRef`]: zero-copy views for reading.
//! - [`Document::from_tree`] / [`Document::to_tree`]: conversion from and to
//!   [`serde_json::Value`].
//!
//! Untrusted bytes must be imported with [`Validation::Validate`], which
//! rejects any buffer with an offset pointing outside its container.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use texcodec_bjson::{Document, DocumentRef, Validation};
//!
//! let doc = Document::from_tree(&json!({"textures": ["sky.hdr", "ground.ktx"]})).unwrap();
//! let bytes = doc.to_bytes();
//!
//! let view = DocumentRef::from_raw_bytes(&bytes, Validation::Validate).unwrap();
//! let textures = view.container().get("textures").unwrap().as_container().unwrap();
//! assert_eq!(textures.len(), 2);
//! ```

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod compact;
pub mod container;
pub mod document;
pub mod error;
pub mod layout;
pub mod string;
mod tree;
mod validate;
pub mod value;
mod walk;

#[cfg(test)]
pub mod test_prelude;

pub use container::{ContainerRef, ValueRef};
pub use document::{Document, DocumentRef, Validation};
pub use error::{DocumentError, DocumentResult, InvalidReason};
pub use layout::{MAX_NESTING_DEPTH, MAX_SIZE};
pub use string::StringRef;
pub use value::{compress_number, Cell, Value, ValueType};
