use strum_macros::Display;

pub type WindowId = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum WindowKind {
    #[strum(serialize = "SimpleOS Notepad")]
    Notepad,
    #[strum(serialize = "SimpleOS Terminal")]
    Terminal,
}
