//! Classification of a raw command line.

/// Number of leading characters dropped from an `echo` line. The character
/// after `echo` is swallowed whatever it is, so `echoXhello` echoes `hello`.
pub const ECHO_STRIP_LEN: usize = 5;

const ECHO_PREFIX: &str = "echo";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Echo(String),
    Help,
    Date,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Command {
        if line.starts_with(ECHO_PREFIX) {
            // Lines of ECHO_STRIP_LEN characters or fewer echo an empty line.
            let rest: String = line.chars().skip(ECHO_STRIP_LEN).collect();
            return Command::Echo(rest);
        }

        match line {
            "help" => Command::Help,
            "date" => Command::Date,
            _ => Command::Unknown(line.to_string()),
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            Command::Echo(_) => Some("echo"),
            Command::Help => Some("help"),
            Command::Date => Some("date"),
            Command::Unknown(_) => None,
        }
    }
}
