use anyhow::{Context, Result};
use objectflow_core::LogConfig;
use std::fs::File;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

/// Handle keeping the file logging worker thread alive
pub struct LogGuard {
    _guard: WorkerGuard,
}

/// Initialize the logging system from the configured sinks.
///
/// Returns a guard that must stay alive for the process when file output
/// is enabled.
pub fn init(config: &LogConfig) -> Result<Option<LogGuard>> {
    // RUST_LOG takes precedence over the configured level
    let filter = EnvFilter::builder()
        .with_default_directive(config.parse_level().into())
        .from_env_lossy();

    let console_layer = config.console_output.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
            .with_filter(filter.clone())
    });

    let (file_layer, guard) = if config.file_output {
        config
            .ensure_log_directory()
            .context("Failed to create log directory")?;
        if let Err(e) = config.cleanup_old_logs() {
            eprintln!("Warning: failed to clean up old log files: {e}");
        }

        let log_path = config.current_log_path();
        let file = File::create(&log_path)
            .with_context(|| format!("Failed to create log file: {log_path:?}"))?;
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file);

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(filter);

        (Some(layer), Some(LogGuard {
            _guard: worker_guard,
        }))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized at level: {}", config.level);
    if config.file_output {
        tracing::info!("Log file path: {:?}", config.current_log_path());
    }

    Ok(guard)
}
