//! Central Configuration Constants
//!
//! Single source of truth for pipeline defaults.
//! To change the data directory or record count, only edit this file.

use std::path::PathBuf;

/// Default directory for generated log data and exports
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default process log file name (flat CSV)
pub const DEFAULT_LOG_FILE: &str = "process_logs.csv";

/// Default alert export file name (JSONL)
pub const DEFAULT_ALERT_FILE: &str = "alerts.jsonl";

/// Default number of synthetic log records per run
pub const DEFAULT_LOG_COUNT: usize = 500;

/// Default fraction of records drawn from the suspicious pair list
pub const DEFAULT_SUSPICIOUS_RATIO: f64 = 0.10;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "SpawnWatch";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get data directory from environment or use default
pub fn get_data_dir() -> PathBuf {
    std::env::var("LAB_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Get record count from environment or use default
pub fn get_log_count() -> usize {
    std::env::var("LAB_LOG_COUNT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_LOG_COUNT)
}
