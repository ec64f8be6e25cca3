//! The fake terminal's command interpreter.
//!
//! A submission is handled in two steps: [`Command::parse`] classifies the raw
//! line, then [`Command::render`] turns it into output lines. [`interpret`]
//! puts the two together and prefixes the framing line so the transcript shows
//! what was typed. Nothing here can fail and nothing is remembered between
//! calls.

mod command;

pub use command::{Command, ECHO_STRIP_LEN};

use chrono::DateTime;
use chrono::Local;

#[cfg(test)]
mod tests;

/// `date` output, e.g. `2024-03-09 07:05:01.250000`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

pub const FRAMING_PREFIX: &str = ">>> ";

pub const HELP_HEADER: &str = "Available commands:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinCommand {
    pub name: &'static str,
    pub args: Option<&'static str>,
    pub description: &'static str,
}

impl BuiltinCommand {
    pub fn help_line(&self) -> String {
        match self.args {
            Some(args) => format!("{} {args} - {}", self.name, self.description),
            None => format!("{} - {}", self.name, self.description),
        }
    }
}

/// Listed by `help` in this order.
pub const BUILTINS: [BuiltinCommand; 3] = [
    BuiltinCommand {
        name: "echo",
        args: Some("[text]"),
        description: "Repeats the text",
    },
    BuiltinCommand {
        name: "help",
        args: None,
        description: "Show this help message",
    },
    BuiltinCommand {
        name: "date",
        args: None,
        description: "Show current date and time",
    },
];

pub fn help_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(BUILTINS.len() + 1);
    lines.push(HELP_HEADER.to_string());
    lines.extend(BUILTINS.iter().map(BuiltinCommand::help_line));
    lines
}

pub fn framing_line(line: &str) -> String {
    format!("{FRAMING_PREFIX}{line}")
}

impl Command {
    pub fn render(&self, now: DateTime<Local>) -> Vec<String> {
        match self {
            Command::Echo(text) => vec![text.to_string()],
            Command::Help => help_lines(),
            Command::Date => vec![now.format(DATE_FORMAT).to_string()],
            Command::Unknown(line) => vec![format!("Command not recognized: {line}")],
        }
    }
}

/// Runs one command line and returns the framing line followed by its output.
pub fn interpret(line: &str, now: DateTime<Local>) -> Vec<String> {
    let command = Command::parse(line);
    log::debug!("interpreting {} command", command.name().unwrap_or("unknown"));

    let mut output = vec![framing_line(line)];
    output.extend(command.render(now));
    output
}
