use simpleos_core::PowerAction;
use tui_textarea::TextArea;

use super::WindowId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilePromptMode {
    Open,
    Save,
}

impl FilePromptMode {
    pub fn title(&self) -> &'static str {
        match self {
            FilePromptMode::Open => "Open file",
            FilePromptMode::Save => "Save as",
        }
    }
}

/// Modal overlay. While one is open it receives all keyboard input.
#[derive(Debug)]
pub enum Dialog<'a> {
    Confirm(PowerAction),
    Notice {
        title: String,
        text: String,
        then: Option<PowerAction>,
    },
    FilePrompt {
        mode: FilePromptMode,
        window_id: WindowId,
        input_area: TextArea<'a>,
    },
}

impl<'a> Dialog<'a> {
    pub fn notice(title: &str, text: &str) -> Dialog<'a> {
        return Dialog::Notice {
            title: title.to_string(),
            text: text.to_string(),
            then: None,
        };
    }

    pub fn title(&self) -> String {
        match self {
            Dialog::Confirm(power) => power.title().to_string(),
            Dialog::Notice { title, .. } => title.to_string(),
            Dialog::FilePrompt { mode, .. } => mode.title().to_string(),
        }
    }
}
