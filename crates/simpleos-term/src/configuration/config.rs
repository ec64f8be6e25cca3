#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::ffi::OsStr;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use simpleos_core::transcript::DEFAULT_TRANSCRIPT_LIMIT;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

pub const DEFAULT_CLOCK_INTERVAL_MS: u64 = 1000;

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ClockInterval,
    ConfigFile,
    LogLevel,
    TranscriptLimit,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    /// Numeric keys fall back to their default when unset or malformed.
    pub fn get_usize(key: ConfigKey) -> usize {
        return Config::get(key)
            .parse::<usize>()
            .or_else(|_| Config::default(key).parse::<usize>())
            .unwrap_or_default();
    }

    pub fn default_config_path() -> path::PathBuf {
        if let Some(dir) = dirs::config_dir() {
            return dir.join("simpleos/config.toml");
        }

        return path::PathBuf::from("simpleos/config.toml");
    }

    pub fn default(key: ConfigKey) -> String {
        let res = match key {
            ConfigKey::ClockInterval => DEFAULT_CLOCK_INTERVAL_MS.to_string(),
            ConfigKey::LogLevel => "info".to_string(),
            ConfigKey::TranscriptLimit => DEFAULT_TRANSCRIPT_LIMIT.to_string(),

            // Special
            ConfigKey::ConfigFile => Config::default_config_path()
                .to_string_lossy()
                .to_string(),
        };

        return res;
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }
        Config::set(ConfigKey::ConfigFile, &config_file);

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                if key == ConfigKey::ConfigFile {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    let val_str = if let Some(val_int) = val.as_integer() {
                        val_int.to_string()
                    } else if let Some(val_str) = val.as_str() {
                        val_str.to_string()
                    } else {
                        continue;
                    };
                    if val_str.is_empty() {
                        continue;
                    }

                    // Use clap value parsers to do validation.
                    if let Some(arg) = cmd
                        .get_arguments()
                        .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                    {
                        let possible_values = arg
                            .get_possible_values()
                            .iter()
                            .map(|e| return e.get_name().to_string())
                            .collect::<Vec<String>>();

                        if !possible_values.is_empty() {
                            if !possible_values.contains(&val_str) {
                                bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                            }
                        } else if let Err(err) = arg.get_value_parser().parse_ref(
                            &cmd,
                            Some(arg),
                            OsStr::new(&val_str),
                        ) {
                            bail!(format!(
                                "config.toml has an invalid value for key '{key}': {val_str}\n{err}"
                            ));
                        }
                    }

                    Config::set(key, &val_str);
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            clock_interval = Config::get(ConfigKey::ClockInterval),
            log_level = Config::get(ConfigKey::LogLevel),
            transcript_limit = Config::get(ConfigKey::TranscriptLimit),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|e| return e.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {}]", possible_values);
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i64>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
