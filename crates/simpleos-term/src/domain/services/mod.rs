mod actions;
mod app_state;
mod events;
mod menu_bar;
mod scroll;
mod windows;

pub use actions::*;
pub use app_state::*;
pub use events::*;
pub use menu_bar::*;
pub use scroll::*;
pub use windows::*;
