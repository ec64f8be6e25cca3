mod action;
mod dialog;
mod event;
mod menu;
mod window;

pub use action::*;
pub use dialog::*;
pub use event::*;
pub use menu::*;
pub use window::*;
