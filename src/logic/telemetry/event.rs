//! Telemetry Event Types
//!
//! In real EDR tools every process start on an endpoint produces a log entry:
//! which process ran, who launched it (parent), when, and on which machine.
//! `ProcessEvent` is the simulated version of exactly that record.

use serde::{Deserialize, Serialize};

/// Wall-clock format used everywhere in the lab: `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One simulated process-creation record. Immutable after generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessEvent {
    /// Local naive date-time, formatted with [`TIMESTAMP_FORMAT`]
    pub timestamp: String,
    pub hostname: String,
    pub parent_process: String,
    pub child_process: String,
    /// Generator ground truth: was this drawn from the suspicious pair list?
    /// Kept in the log so detection accuracy can be checked against it.
    pub is_suspicious: bool,
}

impl ProcessEvent {
    /// The (parent, child) relationship this event records
    pub fn pair(&self) -> (&str, &str) {
        (&self.parent_process, &self.child_process)
    }
}
