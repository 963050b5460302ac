//! Tracing configuration for cartel-onboard
//!
//! Logs go to stderr so that stdout stays reserved for command output.
//! File logging is opt-in through `[logging] file = true` and writes a
//! daily rolling file under the platform data directory.

use std::{fs, io, path::PathBuf, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

use cc_core::config::LoggingConfig;

use super::config::CONFIG_DIR_NAME;

pub const LOG_FILE_PREFIX: &str = "cartel-onboard.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Default level for our crates, from build profile and `-v` count.
fn app_level(is_dev: bool, verbose: u8) -> &'static str {
    match verbose {
        0 if is_dev => "debug",
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the default filter directives for tracing
///
/// Our crates follow [`app_level`]; HTTP internals stay at warn.
fn build_filter_directives(is_dev: bool, verbose: u8) -> Vec<String> {
    let level = app_level(is_dev, verbose);
    vec![
        "warn".to_string(),
        format!("cartel_onboard={level}"),
        format!("coin_cartel_lib={level}"),
        format!("cc_core={level}"),
        format!("cc_app={level}"),
        format!("cc_infra={level}"),
        "hyper=warn".to_string(),
        "reqwest=warn".to_string(),
        "rustls=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` replaces the default directives when set.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(logging: &LoggingConfig, verbose: u8) -> anyhow::Result<()> {
    let directives = build_filter_directives(cfg!(debug_assertions), verbose);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives.join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_writer = if logging.file {
        match build_file_writer() {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, continuing without it: {err:#}");
                None
            }
        }
    } else {
        None
    };

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

/// `<data dir>/coin-cartel/logs`
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("logs"))
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = log_dir().context("No data directory available for log files")?;
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
