use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use simpleos_core::SystemClock;
use simpleos_term::application::cli;
use simpleos_term::destruct_terminal_for_panic;
use simpleos_term::AppStateProps;
use simpleos_term::Config;
use simpleos_term::ConfigKey;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;

fn log_dir() -> PathBuf {
    return dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("simpleos");
}

fn init_tracing() -> Result<WorkerGuard> {
    let dir = log_dir();
    std::fs::create_dir_all(&dir)?;

    let level = Config::get(ConfigKey::LogLevel)
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir,
        "simpleos.log",
    ));

    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_max_level(level)
        .init();

    return Ok(guard);
}

#[tokio::main]
async fn main() -> Result<()> {
    if !cli::parse().await? {
        return Ok(());
    }

    let _guard = init_tracing()?;

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let clock_interval =
        Duration::from_millis(Config::get_usize(ConfigKey::ClockInterval).max(1) as u64);
    let app_state_props = AppStateProps {
        clock: Box::new(SystemClock),
        transcript_limit: Config::get_usize(ConfigKey::TranscriptLimit),
    };

    tracing::info!(
        config_file = Config::get(ConfigKey::ConfigFile),
        "starting desktop"
    );
    return simpleos_term::run(app_state_props, clock_interval).await;
}
