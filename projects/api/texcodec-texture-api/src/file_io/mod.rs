//! Loading textures straight from files.
//!
//! Files are memory mapped with `lightweight-mmap` and decoded in place.

mod error;
pub use error::*;

use crate::generic::GenericImageDecoder;
use crate::load::{load_texture, LoadedTexture};
use crate::options::LoadOptions;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;
use texcodec_texture_common::SliceSource;

/// Loads the texture at `path`, choosing the reader from its extension
/// (compared case-insensitively).
///
/// # Errors
///
/// [`FileOperationError::Io`] if the file cannot be opened or mapped,
/// [`FileOperationError::Decode`] if [`load_texture`] rejects its contents.
pub fn load_texture_from_path(
    path: &Path,
    options: &LoadOptions,
    generic: Option<&dyn GenericImageDecoder>,
) -> FileOperationResult<LoadedTexture> {
    let suffix = path
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase())
        .unwrap_or_default();

    let handle = ReadOnlyFileHandle::open(path)?;
    let size = handle.size()? as usize;
    log::debug!("Loading {} ({size} bytes)", path.display());

    // Empty files cannot be mapped; decode them as an empty stream.
    if size == 0 {
        return Ok(load_texture(&mut SliceSource::new(&[]), &suffix, options, generic)?);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, size)?;
    Ok(load_texture(
        &mut SliceSource::new(mapping.as_slice()),
        &suffix,
        options,
        generic,
    )?)
}
