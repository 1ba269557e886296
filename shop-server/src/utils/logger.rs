//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.
//! Features:
//! - `RUST_LOG` overrides the configured level
//! - Pretty console output in development, JSON in production
//! - Optional daily rotating log files (always JSON)

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system with daily rotating logs
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether to use JSON format (true for production, false for development)
/// * `log_dir` - Optional directory for file logging (e.g., Some("./logs"))
///
/// # Examples
/// ```no_run
/// // Development setup (console only)
/// shop_server::init_logger_with_file("debug", false, None)?;
///
/// // Production setup (console + file)
/// shop_server::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Console layer
    let console_layer = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    // File layer (daily rotation: shop-server.YYYY-MM-DD)
    let file_layer = match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;
            let app_log = RollingFileAppender::new(Rotation::DAILY, log_dir, "shop-server");
            Some(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(app_log))
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logging_creates_the_log_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");
        let dir_str = dir.to_str().unwrap();

        // 全局 subscriber 只能装一次, 此处只关心目录是否建好
        let _ = init_logger_with_file("debug", true, Some(dir_str));
        assert!(dir.is_dir());
    }
}
