//! Error types for the fallible edges of the shell.
//!
//! The interpreter never fails; only notepad file access does. Each variant
//! carries the path involved so the UI can show a useful notice.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimpleOsError {
    #[error("Failed to read '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No file path was provided")]
    EmptyPath,
}
