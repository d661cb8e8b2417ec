use crate::error::CliError;
use std::fs;
use std::path::*;
use texcodec_texture_api::ImageFormat;

/// Recursively visits directories and collects file paths.
///
/// Directories or entries that cannot be read are skipped.
pub fn find_all_files(dir: &Path, entries: &mut Vec<PathBuf>) -> std::io::Result<()> {
    let dir_entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(()),
    };

    for entry in dir_entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue, // Skip problematic entries, e.g. those without access.
        };

        let path = entry.path();
        if path.is_dir() {
            find_all_files(&path, entries)?;
        } else {
            entries.push(path);
        }
    }
    Ok(())
}

/// Expands a CLI input into the textures to inspect.
///
/// A file is returned as is, whatever its extension. A directory is searched
/// recursively for files with a dedicated container reader.
pub fn collect_texture_inputs(input: &Path) -> Result<Vec<PathBuf>, CliError> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut entries = Vec::new();
    find_all_files(input, &mut entries)?;
    entries.retain(|path| ImageFormat::from_path(path) != ImageFormat::Generic);
    entries.sort();
    Ok(entries)
}

/// Runs `f` over every path, in parallel when the `multithreaded` feature is on.
pub fn for_each_path<F>(paths: &[PathBuf], f: F)
where
    F: Fn(&Path) + Sync + Send,
{
    #[cfg(feature = "multithreaded")]
    {
        use rayon::prelude::*;
        paths.par_iter().for_each(|path| f(path));
    }
    #[cfg(not(feature = "multithreaded"))]
    paths.iter().for_each(|path| f(path));
}
