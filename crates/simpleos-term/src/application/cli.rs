use anyhow::Result;
use clap::Arg;
use clap::ArgAction;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

fn parse_positive(value: &str) -> Result<String, String> {
    match value.parse::<u64>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(num) => Ok(num.to_string()),
        Err(err) => Err(err.to_string()),
    }
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand_required(true)
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout."),
        );
}

pub fn build() -> Command {
    return Command::new("simpleos")
        .about("A toy desktop shell with a notepad and a terminal, drawn in your terminal.")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(subcommand_config())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("SIMPLEOS_CONFIG_FILE")
                .num_args(1)
                .action(ArgAction::Set)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ClockInterval.to_string())
                .long(ConfigKey::ClockInterval.to_string())
                .env("SIMPLEOS_CLOCK_INTERVAL")
                .num_args(1)
                .value_parser(parse_positive)
                .help(format!(
                    "Milliseconds between status bar clock refreshes. [default: {}]",
                    Config::default(ConfigKey::ClockInterval)
                )),
        )
        .arg(
            Arg::new(ConfigKey::LogLevel.to_string())
                .long(ConfigKey::LogLevel.to_string())
                .env("SIMPLEOS_LOG_LEVEL")
                .num_args(1)
                .value_parser(LOG_LEVELS)
                .help(format!(
                    "Verbosity of the log file. [default: {}]",
                    Config::default(ConfigKey::LogLevel)
                )),
        )
        .arg(
            Arg::new(ConfigKey::TranscriptLimit.to_string())
                .long(ConfigKey::TranscriptLimit.to_string())
                .env("SIMPLEOS_TRANSCRIPT_LIMIT")
                .num_args(1)
                .value_parser(parse_positive)
                .help(format!(
                    "Lines kept in each terminal window before the oldest are dropped. [default: {}]",
                    Config::default(ConfigKey::TranscriptLimit)
                )),
        );
}

/// Parses the command line. Returns `false` when a subcommand already did all
/// the work and the UI should not start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    if let Some(("config", subcmd_matches)) = matches.subcommand() {
        if let Some(("default", _)) = subcmd_matches.subcommand() {
            println!("{}", Config::serialize_default(build()));
        }
        return Ok(false);
    }

    Config::load(build(), vec![&matches]).await?;
    return Ok(true);
}
