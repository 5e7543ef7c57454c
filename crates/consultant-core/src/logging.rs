//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable controlling the log filter
pub const LOG_ENV_VAR: &str = "STOCK_CONSULTANT_LOG";

const LOG_FILE_NAME: &str = "stock-consultant.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/stock-consultant/logs/` (or the
/// platform equivalent). The terminal is owned by the UI, so nothing is
/// written to stdout.
///
/// # Examples
/// ```bash
/// STOCK_CONSULTANT_LOG=debug stock-consultant
/// STOCK_CONSULTANT_LOG=consultant_app=trace stock-consultant
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| {
        EnvFilter::new("stock_consultant=info,consultant_app=info,consultant_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Stock Consultant starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// `<data_local_dir>/stock-consultant/logs`, or `./stock-consultant/logs`
/// when the platform has no data directory.
///
/// Files inside rotate daily as `stock-consultant.log.YYYY-MM-DD`.
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stock-consultant")
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_live_under_app_directory() {
        assert!(log_directory().ends_with("stock-consultant/logs"));
    }
}
