//! Error types for binary JSON documents.

use thiserror::Error;

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Errors that can occur while importing or editing a document.
///
/// Failed mutations leave the document's logical content unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The bytes are not a well formed document.
    #[error("Invalid binary JSON document: {0}")]
    InvalidDocument(#[from] InvalidReason),

    /// The edit would make a container larger than [`MAX_SIZE`](crate::MAX_SIZE).
    #[error("Document too large: {requested} bytes requested, limit is {limit} bytes")]
    CapacityExceeded { requested: usize, limit: usize },

    /// Only arrays and objects can be the root of a document.
    #[error("A document root must be an array or an object")]
    NotAContainer,

    /// An object operation was used on an array, or the other way around.
    #[error("Expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// An array position past the end.
    #[error("Index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// The first check a buffer failed during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// Fewer bytes than a header plus an empty container.
    #[error("buffer is too short")]
    TooShort,

    /// The first four bytes are not `qbjs`.
    #[error("bad tag {0:#010x}")]
    BadTag(u32),

    /// Only version 1 exists.
    #[error("unsupported version {0}")]
    BadVersion(u32),

    /// A container's size does not fit in the space it was given.
    #[error("container extends past its bounds")]
    ContainerOutOfBounds,

    /// A container's offset table does not fit inside the container.
    #[error("offset table extends past its container")]
    TableOutOfBounds,

    /// An object entry or its key lies outside the data area.
    #[error("object entry extends past the data area")]
    EntryOutOfBounds,

    /// Object keys are not sorted.
    #[error("object keys are out of order")]
    KeyOutOfOrder,

    /// A string, double or nested container lies outside the data area.
    #[error("value data extends past the data area")]
    ValueOutOfBounds,

    /// Two items of one container share or overlap their data.
    #[error("items overlap each other's data")]
    OverlappingData,

    /// A nested container's header disagrees with the type of the value pointing at it.
    #[error("container kind does not match its value type")]
    KindMismatch,

    /// A value with a type tag that no type uses.
    #[error("unknown value type {0}")]
    UnknownType(u8),

    /// Containers nested deeper than [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH).
    #[error("containers are nested too deeply")]
    TooDeep,
}
