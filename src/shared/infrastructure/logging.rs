// Tracing subscriber writing to the console and to an append only log file.

use std::fs::OpenOptions;
use std::path::Path;
use thiserror::Error;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("cannot open log file {path}: {source}")]
    OpenLogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot install tracing subscriber: {0}")]
    Install(String),
}

/// Console layer plus a no-ANSI layer on the append only log file, under one `EnvFilter`.
pub fn build_subscriber(
    log_file: &Path,
) -> Result<(impl Subscriber + Send + Sync + 'static, WorkerGuard), LoggingError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|source| LoggingError::OpenLogFile {
            path: log_file.display().to_string(),
            source,
        })?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,tower_http=info"));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer));

    Ok((subscriber, guard))
}

/// The returned guard flushes the file writer on drop; keep it alive until exit.
pub fn init_logging(log_file: impl AsRef<Path>) -> Result<WorkerGuard, LoggingError> {
    let path = log_file.as_ref();
    let (subscriber, guard) = build_subscriber(path)?;
    subscriber
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    tracing::info!(log_file = %path.display(), "logging initialized");
    Ok(guard)
}
