//! Telemetry setup

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSettings};
use crate::error::AppError;

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
pub fn init_telemetry(settings: &LoggingSettings) -> Result<(), AppError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .map_err(|e| AppError::TelemetryError(e.to_string()))?;

    // Daily rotated file next to stdout when a directory is configured
    let file_layer = match &settings.directory {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("bank")
                .filename_suffix("log")
                .build(dir)
                .map_err(|e| AppError::TelemetryError(e.to_string()))?;
            Some(
                fmt::layer()
                    .with_writer(appender)
                    .with_target(true)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(file_layer);

    match settings.format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_target(true))
            .try_init(),
    }
    .map_err(|e| AppError::TelemetryError(e.to_string()))
}
