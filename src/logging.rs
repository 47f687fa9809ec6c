//! Tracing setup for the demo binary.
//!
//! The terminal belongs to the UI, so logs only go to a file. Without a log
//! file no subscriber is installed and library events are discarded.

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Send `tracing` (and bridged `log`) records to `log_file`.
///
/// `RUST_LOG` takes precedence over `default_filter`. Keep the returned guard
/// alive until exit so buffered lines are flushed.
pub fn init_logging(
    log_file: Option<&Path>,
    default_filter: &str,
) -> anyhow::Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("installing the tracing subscriber")?;
    tracing_log::LogTracer::init().context("bridging log records into tracing")?;
    Ok(Some(guard))
}
