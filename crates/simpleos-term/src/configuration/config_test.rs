use std::io::Write;

use anyhow::Result;
use serial_test::serial;
use tempfile::NamedTempFile;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

fn write_config(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    return Ok(file);
}

#[tokio::test]
#[serial]
async fn test_defaults_without_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(["simpleos", "--config-file", "/nonexistent/simpleos.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::ClockInterval), "1000");
    assert_eq!(Config::get(ConfigKey::LogLevel), "info");
    assert_eq!(Config::get_usize(ConfigKey::TranscriptLimit), 1000);
    assert_eq!(
        Config::get(ConfigKey::ConfigFile),
        "/nonexistent/simpleos.toml"
    );
    return Ok(());
}

#[tokio::test]
#[serial]
async fn test_file_overrides_defaults() -> Result<()> {
    let file = write_config("transcript-limit = 50\nlog-level = \"debug\"\n")?;
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build().try_get_matches_from(["simpleos", "--config-file", path.as_str()])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get_usize(ConfigKey::TranscriptLimit), 50);
    assert_eq!(Config::get(ConfigKey::LogLevel), "debug");
    assert_eq!(Config::get(ConfigKey::ClockInterval), "1000");
    return Ok(());
}

#[tokio::test]
#[serial]
async fn test_flags_override_file() -> Result<()> {
    let file = write_config("transcript-limit = 50\nclock-interval = 250\n")?;
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build().try_get_matches_from([
        "simpleos",
        "--config-file",
        path.as_str(),
        "--transcript-limit",
        "7",
    ])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get_usize(ConfigKey::TranscriptLimit), 7);
    assert_eq!(Config::get_usize(ConfigKey::ClockInterval), 250);
    return Ok(());
}

#[tokio::test]
#[serial]
async fn test_invalid_possible_value_in_file() -> Result<()> {
    let file = write_config("log-level = \"loud\"\n")?;
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build().try_get_matches_from(["simpleos", "--config-file", path.as_str()])?;
    let err = Config::load(cli::build(), vec![&matches])
        .await
        .unwrap_err();

    assert!(err.to_string().contains("log-level"));
    assert!(err.to_string().contains("error, warn, info, debug, trace"));
    return Ok(());
}

#[tokio::test]
#[serial]
async fn test_numeric_values_in_file_use_flag_validation() -> Result<()> {
    for contents in ["clock-interval = 0\n", "transcript-limit = \"lots\"\n"] {
        let file = write_config(contents)?;
        let path = file.path().to_string_lossy().to_string();
        let matches =
            cli::build().try_get_matches_from(["simpleos", "--config-file", path.as_str()])?;
        let err = Config::load(cli::build(), vec![&matches])
            .await
            .unwrap_err();

        assert!(err.to_string().contains("config.toml has an invalid value"));
    }
    return Ok(());
}

#[test]
fn test_invalid_flag_is_rejected_by_clap() {
    let res = cli::build().try_get_matches_from(["simpleos", "--transcript-limit", "0"]);
    assert!(res.is_err());
}

#[test]
#[serial]
fn test_get_usize_falls_back_to_default() {
    Config::set(ConfigKey::TranscriptLimit, "lots");
    assert_eq!(Config::get_usize(ConfigKey::TranscriptLimit), 1000);
}

#[test]
fn test_serialize_default() {
    let toml_str = Config::serialize_default(cli::build());

    assert!(toml_str.contains("clock-interval = 1000"));
    assert!(toml_str.contains("log-level = \"info\""));
    assert!(toml_str.contains("transcript-limit = 1000"));
    assert!(toml_str.contains("[possible values: error, warn, info, debug, trace]"));
    assert!(!toml_str.contains("config-file"));
}
