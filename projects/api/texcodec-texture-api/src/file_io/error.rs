//! Error types for file I/O operations.

use texcodec_texture_common::DecodeError;
use thiserror::Error;

/// Result type for file operations
pub type FileOperationResult<T> = Result<T, FileOperationError>;

/// Errors that can occur while loading a texture from disk.
///
/// Either the file could not be read (not found, permission denied, mapping
/// failed), or its contents could not be decoded.
#[derive(Debug, Error)]
pub enum FileOperationError {
    /// I/O operation failed
    #[error("I/O operation failed: {0}")]
    Io(#[from] FileIoError),

    /// The file was read but could not be decoded
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),
}

/// Low-level errors from the memory mapping backend.
#[derive(Debug, Error)]
pub enum FileIoError {
    /// Error opening file handle
    #[error("Failed to open file handle: {0}")]
    FileHandle(#[from] lightweight_mmap::handles::HandleOpenError),

    /// Error creating memory mapping
    #[error("Failed to create memory mapping: {0}")]
    MemoryMapping(#[from] lightweight_mmap::mmap::MmapError),
}

// Direct From implementations for the backend errors used with `?`
impl From<lightweight_mmap::handles::HandleOpenError> for FileOperationError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::Io(FileIoError::FileHandle(e))
    }
}

impl From<lightweight_mmap::mmap::MmapError> for FileOperationError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::Io(FileIoError::MemoryMapping(e))
    }
}
