use std::{fs::OpenOptions, process::ExitCode};

use anyhow::Result;
use gopad_core::config::Config;
use tracing::Level;
use tracing_subscriber::{Registry, filter, fmt, layer::Layer, prelude::*};

fn parse_log_level(level: Option<&str>) -> Level {
    match level.unwrap_or_default().to_ascii_lowercase().as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        #[cfg(debug_assertions)]
        _ => Level::TRACE,
        #[cfg(not(debug_assertions))]
        _ => Level::INFO,
    }
}

fn main() -> Result<ExitCode> {
    let Some(dirs) = directories::ProjectDirs::from("", "", "gopad") else {
        eprintln!("Unable to get project directory");
        return Ok(ExitCode::from(1));
    };
    let log_file_path = dirs.data_dir().join(".log.txt");

    let (config, config_err) = Config::load();

    std::fs::create_dir_all(dirs.data_dir())?;
    let log_file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_file_path)?;

    const GB: u64 = 1_000_000_000;
    let truncated = log_file.metadata()?.len() > GB;
    if truncated {
        log_file.set_len(0)?;
    }

    let log_level = parse_log_level(config.editor.log_level.as_deref());
    let subscriber = Registry::default().with(
        fmt::layer()
            .compact()
            .without_time()
            .with_ansi(false)
            .with_writer(log_file)
            .with_filter(filter::LevelFilter::from_level(log_level)),
    );

    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;

    if truncated {
        tracing::warn!("Log file was truncated as it reached 1Gb in size");
    }

    if let Some(err) = config_err {
        let path = config
            .editor_path
            .as_ref()
            .map(|path| path.to_string_lossy().to_string())
            .unwrap_or_default();
        tracing::error!("Error loading config `{path}`, using defaults: {err}");
    }

    if let Err(err) = gopad_gui::run(&config.editor) {
        tracing::error!("{err}");
        return Err(err);
    }

    Ok(ExitCode::SUCCESS)
}
