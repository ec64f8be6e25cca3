//! Application layer driving the desktop shell.
//!
//! This module handles command-line parsing and the main UI loop, wiring the
//! domain state to crossterm input and ratatui output.

pub mod cli;
pub mod ui;
