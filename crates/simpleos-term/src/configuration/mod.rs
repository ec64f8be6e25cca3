//! Configuration management for the desktop shell.
//!
//! Values come from built-in defaults, then `config.toml`, then command line
//! flags, each layer overriding the previous one.

mod config;

pub use config::*;
