//! Terminal desktop for the SimpleOS toy shell.
//!
//! This crate draws a small desktop in the terminal: a menu bar, a live clock
//! status bar, and any number of notepad and terminal windows. The command
//! interpreter and file handling live in `simpleos-core`; this crate wires them
//! to crossterm input and ratatui output.

pub mod application;
pub mod configuration;
pub mod domain;
pub use application::ui::{destruct_terminal_for_panic, run, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, Event};
pub use domain::services::{AppState, AppStateProps};
