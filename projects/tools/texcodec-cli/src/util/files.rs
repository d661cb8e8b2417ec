use crate::error::CliError;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Maps `path` read-only and passes its contents to `f`.
pub fn with_mapped_file<T>(
    path: &Path,
    f: impl FnOnce(&[u8]) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    // Empty files cannot be mapped.
    if size == 0 {
        return f(&[]);
    }
    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    f(mapping.as_slice())
}

/// Writes `data` to a new file at `path`, replacing any existing one.
pub fn write_mapped_file(path: &Path, data: &[u8]) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    if data.is_empty() {
        std::fs::write(path, data)?;
        return Ok(());
    }

    let handle = ReadWriteFileHandle::create_preallocated(path, data.len() as i64)?;
    let mut mapping = ReadWriteMmap::new(&handle, 0, data.len())?;
    mapping.as_mut_slice().copy_from_slice(data);
    Ok(())
}
