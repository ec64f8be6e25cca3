//! Core domain logic for the desktop shell.
//!
//! This module contains the state and data models that drive the desktop,
//! independent of how they are drawn or where input comes from.

pub mod models;
pub mod services;
