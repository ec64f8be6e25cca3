//! Core primitives for the SimpleOS desktop shell.
//!
//! This crate holds everything the shell does that is independent of how it is
//! drawn: the fake terminal's command interpreter, the bounded transcript it
//! writes to, the clock used by the status bar and the `date` command, notepad
//! document I/O, and the wording of the power actions.
//!
//! # Layout
//!
//! - **interpreter**: parses a command line into a [`Command`] and renders it
//! - **transcript**: append-only line buffer with a retention limit
//! - **clock** / **status**: time source abstraction and status bar text
//! - **document**: whole-file read and write for the notepad
//! - **power**: shutdown and restart prompts

pub mod clock;
pub mod document;
pub mod errors;
pub mod interpreter;
pub mod power;
pub mod status;
pub mod transcript;

pub use clock::{Clock, ClockBox, FixedClock, SystemClock};
pub use errors::SimpleOsError;
pub use interpreter::{interpret, Command};
pub use power::PowerAction;
pub use transcript::Transcript;
