use strum_macros::Display;
use strum_macros::EnumIter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
pub enum MenuTitle {
    System,
    Apps,
    File,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum MenuItem {
    Shutdown,
    Restart,
    Notepad,
    Terminal,
    New,
    Save,
    Open,
}

impl MenuTitle {
    pub fn items(&self) -> &'static [MenuItem] {
        match self {
            MenuTitle::System => &[MenuItem::Shutdown, MenuItem::Restart],
            MenuTitle::Apps => &[MenuItem::Notepad, MenuItem::Terminal],
            MenuTitle::File => &[MenuItem::New, MenuItem::Save, MenuItem::Open],
        }
    }

    /// Opens this menu together with Alt.
    pub fn hotkey(&self) -> char {
        match self {
            MenuTitle::System => 's',
            MenuTitle::Apps => 'a',
            MenuTitle::File => 'f',
        }
    }
}
