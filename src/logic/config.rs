//! Pipeline Configuration
//!
//! Explicit configuration structs with named fields. Defaults come from
//! `constants.rs` (and its env overrides); call sites that need different
//! values set the fields directly instead of passing positional arguments.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the synthetic log generator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of records to generate
    pub total_records: usize,
    /// Probability that a record is drawn from the suspicious pair list
    pub suspicious_ratio: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_records: constants::get_log_count(),
            suspicious_ratio: constants::DEFAULT_SUSPICIOUS_RATIO,
        }
    }
}

/// File locations for the pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding generated logs and exports
    pub data_dir: PathBuf,
    /// Process log file name inside `data_dir`
    pub log_file: String,
    /// Alert export file name inside `data_dir`
    pub alert_file: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: constants::get_data_dir(),
            log_file: constants::DEFAULT_LOG_FILE.to_string(),
            alert_file: constants::DEFAULT_ALERT_FILE.to_string(),
        }
    }
}

impl PipelineConfig {
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(&self.log_file)
    }

    pub fn alert_path(&self) -> PathBuf {
        self.data_dir.join(&self.alert_file)
    }
}
