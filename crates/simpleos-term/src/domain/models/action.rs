use std::path::PathBuf;

use super::WindowId;

/// Work handed off the UI loop to the actions service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenFile {
        window_id: WindowId,
        path: PathBuf,
    },
    SaveFile {
        window_id: WindowId,
        path: PathBuf,
        text: String,
    },
}
