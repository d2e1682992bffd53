use crate::error::{ResizeError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Checks that `path` is an existing, listable directory.
pub fn validate_source_dir(path: &Path) -> Result<()> {
    let access_err = |source: io::Error| ResizeError::DirectoryAccess {
        path: path.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(path).map_err(access_err)?;
    if !metadata.is_dir() {
        return Err(access_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a directory",
        )));
    }

    fs::read_dir(path).map_err(access_err)?;
    Ok(())
}

/// Creates `path` and any missing parents.
///
/// Succeeds when the directory already exists, including when another
/// process created it between the check and the call.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(_) if path.is_dir() => Ok(()),
        Err(source) => Err(ResizeError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        }),
    }
}
