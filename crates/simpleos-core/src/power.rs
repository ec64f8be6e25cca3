//! Shutdown and restart wording for the System menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Shutdown,
    Restart,
}

impl PowerAction {
    pub fn title(&self) -> &'static str {
        match self {
            PowerAction::Shutdown => "Shutdown",
            PowerAction::Restart => "Restart",
        }
    }

    pub fn confirm_prompt(&self) -> &'static str {
        match self {
            PowerAction::Shutdown => "Are you sure you want to shutdown?",
            PowerAction::Restart => "Are you sure you want to restart?",
        }
    }

    /// Shown once the user has confirmed, before the action takes effect.
    pub fn notice(&self) -> &'static str {
        match self {
            PowerAction::Shutdown => "System is powering off...",
            PowerAction::Restart => "System is restarting...",
        }
    }
}
