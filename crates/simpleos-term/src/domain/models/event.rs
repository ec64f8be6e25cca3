use std::path::PathBuf;

use tui_textarea::Input;

use super::WindowId;

#[derive(Debug)]
pub enum Event {
    FileError(WindowId, String),
    FileOpened {
        window_id: WindowId,
        path: PathBuf,
        text: String,
    },
    FileSaved {
        window_id: WindowId,
        path: PathBuf,
    },
    KeyboardInput(Input),
    KeyboardPaste(String),
    UITick,
    UIScrollDown,
    UIScrollUp,
}
