use std::{io, path::PathBuf};
use texcodec_bjson::DocumentError;
use texcodec_texture_api::{FileIoError, FileOperationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    FileIo(#[from] FileIoError),
    #[error("{}: {source}", .path.display())]
    Texture {
        path: PathBuf,
        source: FileOperationError,
    },
    #[error("{}: {source}", .path.display())]
    Document {
        path: PathBuf,
        source: DocumentError,
    },
    #[error("{}: invalid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
    /// Some inputs failed; each failure was already reported.
    #[error("{failed} of {total} files could not be processed")]
    PartialFailure { failed: u64, total: usize },
}

impl From<lightweight_mmap::handles::HandleOpenError> for CliError {
    fn from(e: lightweight_mmap::handles::HandleOpenError) -> Self {
        Self::FileIo(FileIoError::FileHandle(e))
    }
}

impl From<lightweight_mmap::mmap::MmapError> for CliError {
    fn from(e: lightweight_mmap::mmap::MmapError) -> Self {
        Self::FileIo(FileIoError::MemoryMapping(e))
    }
}
