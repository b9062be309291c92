//! Tracing setup: stdout always, plus a daily rolling `application.log` when a
//! log directory is configured.
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the process. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_appender = log_dir.map(|dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("application")
            .filename_suffix("log")
            .build(dir)
    });

    let (file_layer, guard, file_error) = match file_appender {
        Some(Ok(appender)) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard), None)
        }
        Some(Err(e)) => (None, None, Some(e)),
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    if let Some(e) = file_error {
        tracing::warn!("File logging disabled, could not open log directory: {}", e);
    }

    guard
}
