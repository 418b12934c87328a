use std::env;

use chrono::Local;
use log::LevelFilter;

pub fn log_level_from_env() -> LevelFilter {
    parse_log_level(env::var("LOG_LEVEL").ok().as_deref())
}

fn parse_log_level(value: Option<&str>) -> LevelFilter {
    match value {
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("warn") => LevelFilter::Warn,
        Some("error") => LevelFilter::Error,
        _ => LevelFilter::Warn,
    }
}

pub fn setup_logging() -> Result<(), fern::InitError> {
    let stderr_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}] {}: {}",
                Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log_level_from_env())
        // stdout carries rendered manifests
        .chain(std::io::stderr());

    fern::Dispatch::new().chain(stderr_config).apply()?;

    Ok(())
}
