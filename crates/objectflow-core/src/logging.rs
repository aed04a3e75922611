//! Logging configuration
//!
//! Serde-backed settings consumed by the binary's logging bootstrap:
//! log level, console/file sink toggles, and log directory handling
//! including rotation of old files.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

use crate::Result;

fn default_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_log_files() -> usize {
    10
}

/// Logging configuration persisted with the application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level name: trace, debug, info, warn, error
    #[serde(default = "default_level")]
    pub level: String,
    /// Whether to log to stderr
    #[serde(default = "default_true")]
    pub console_output: bool,
    /// Whether to log to a file in the log directory
    #[serde(default)]
    pub file_output: bool,
    /// Explicit log directory; when unset the platform data dir is used
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    /// How many log files to keep before the oldest are deleted
    #[serde(default = "default_max_log_files")]
    pub max_log_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console_output: true,
            file_output: false,
            log_dir: None,
            max_log_files: default_max_log_files(),
        }
    }
}

impl LogConfig {
    /// Parse the configured level, falling back to INFO on garbage input
    pub fn parse_level(&self) -> LevelFilter {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" => LevelFilter::TRACE,
            "debug" => LevelFilter::DEBUG,
            "info" => LevelFilter::INFO,
            "warn" => LevelFilter::WARN,
            "error" => LevelFilter::ERROR,
            "off" => LevelFilter::OFF,
            other => {
                tracing::warn!("Unknown log level '{}', defaulting to info", other);
                LevelFilter::INFO
            }
        }
    }

    /// The directory log files are written to
    pub fn resolve_log_directory(&self) -> PathBuf {
        if let Some(dir) = &self.log_dir {
            return dir.clone();
        }
        dirs::data_local_dir()
            .map(|d| d.join("objectflow").join("logs"))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    /// Create the log directory if it does not exist yet
    pub fn ensure_log_directory(&self) -> Result<()> {
        std::fs::create_dir_all(self.resolve_log_directory())?;
        Ok(())
    }

    /// Path of the log file for this session, stamped with the local time
    pub fn current_log_path(&self) -> PathBuf {
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        self.resolve_log_directory()
            .join(format!("objectflow-{stamp}.log"))
    }

    /// Delete the oldest log files beyond `max_log_files`.
    ///
    /// File names embed a sortable timestamp, so lexicographic order is
    /// chronological order.
    pub fn cleanup_old_logs(&self) -> Result<()> {
        let dir = self.resolve_log_directory();
        if !dir.is_dir() {
            return Ok(());
        }

        let mut logs: Vec<PathBuf> = std::fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().is_some_and(|ext| ext == "log")
                    && path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("objectflow-"))
            })
            .collect();

        if logs.len() <= self.max_log_files {
            return Ok(());
        }

        logs.sort();
        let excess = logs.len() - self.max_log_files;
        for path in logs.into_iter().take(excess) {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::warn!("Failed to remove old log file {:?}: {}", path, e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        let mut config = LogConfig::default();
        assert_eq!(config.parse_level(), LevelFilter::INFO);
        config.level = "DEBUG".to_string();
        assert_eq!(config.parse_level(), LevelFilter::DEBUG);
        config.level = "bogus".to_string();
        assert_eq!(config.parse_level(), LevelFilter::INFO);
    }

    #[test]
    fn test_explicit_log_dir_wins() {
        let config = LogConfig {
            log_dir: Some(PathBuf::from("/tmp/objectflow-test-logs")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_log_directory(),
            PathBuf::from("/tmp/objectflow-test-logs")
        );
        assert!(config
            .current_log_path()
            .to_string_lossy()
            .contains("objectflow-"));
    }

    #[test]
    fn test_cleanup_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        let config = LogConfig {
            log_dir: Some(dir.path().to_path_buf()),
            max_log_files: 2,
            ..Default::default()
        };
        for stamp in ["20240101-000000", "20240102-000000", "20240103-000000"] {
            std::fs::write(dir.path().join(format!("objectflow-{stamp}.log")), "x").unwrap();
        }
        config.cleanup_old_logs().unwrap();
        let mut remaining: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        remaining.sort();
        assert_eq!(
            remaining,
            vec![
                "objectflow-20240102-000000.log",
                "objectflow-20240103-000000.log"
            ]
        );
    }
}
