//! Whole-file read and write for the notepad.

use std::path::Path;
use std::path::PathBuf;

use tokio::fs;

use crate::errors::SimpleOsError;

pub const DEFAULT_EXTENSION: &str = "txt";

/// Adds `.txt` to paths that have no extension of their own.
pub fn with_default_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }

    path.with_extension(DEFAULT_EXTENSION)
}

fn ensure_path(path: &Path) -> Result<(), SimpleOsError> {
    if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
        return Err(SimpleOsError::EmptyPath);
    }

    Ok(())
}

pub async fn read_text<P: AsRef<Path>>(path: P) -> Result<String, SimpleOsError> {
    let path = path.as_ref();
    ensure_path(path)?;

    let text = fs::read_to_string(path)
        .await
        .map_err(|source| SimpleOsError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

    log::info!("opened {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

/// Writes `text` to `path`, returning the path actually written.
pub async fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<PathBuf, SimpleOsError> {
    let path = path.as_ref();
    ensure_path(path)?;

    let target = with_default_extension(path);
    fs::write(&target, text)
        .await
        .map_err(|source| SimpleOsError::WriteFailed {
            path: target.clone(),
            source,
        })?;

    log::info!("saved {} ({} bytes)", target.display(), text.len());
    Ok(target)
}
