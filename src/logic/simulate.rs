//! Synthetic Log Generator
//!
//! Samples process-creation events from two fixed relationship lists with a
//! 90/10 normal/suspicious mix, on a small fleet of simulated endpoints.
//! Each record carries a ground-truth flag so detection results can be
//! checked against what was actually injected.

use chrono::{Duration, Local};
use rand::seq::SliceRandom;
use rand::Rng;

use super::config::SimulationConfig;
use super::telemetry::{ProcessEvent, TIMESTAMP_FORMAT};

/// Parent/child relationships seen every day in any enterprise environment
pub const NORMAL_BEHAVIOURS: &[(&str, &str)] = &[
    ("explorer.exe", "chrome.exe"),
    ("explorer.exe", "notepad.exe"),
    ("services.exe", "svchost.exe"),
    ("svchost.exe", "wmiprvse.exe"),
    ("explorer.exe", "outlook.exe"),
    ("outlook.exe", "winword.exe"),
    ("explorer.exe", "winword.exe"),
    ("winword.exe", "excel.exe"),
];

/// Parent/child relationships worth investigating on sight
pub const SUSPICIOUS_BEHAVIOURS: &[(&str, &str)] = &[
    ("winword.exe", "powershell.exe"),
    ("excel.exe", "cmd.exe"),
    ("outlook.exe", "powershell.exe"),
    ("powershell.exe", "cmd.exe"),
    ("svchost.exe", "powershell.exe"),
];

/// Simulated fleet: three workstations, a domain controller, a file server
pub const HOSTS: &[&str] = &["WKSTN-001", "WKSTN-042", "WKSTN-107", "SRV-DC01", "SRV-FILE02"];

/// Generate a batch of synthetic events. Timestamps advance one minute per
/// record starting from the current local time.
pub fn generate_events(config: &SimulationConfig) -> Vec<ProcessEvent> {
    let mut rng = rand::thread_rng();
    let base_time = Local::now().naive_local();
    let mut events = Vec::with_capacity(config.total_records);

    for i in 0..config.total_records {
        let is_suspicious = rng.gen::<f64>() < config.suspicious_ratio;
        let (parent, child) = if is_suspicious {
            *SUSPICIOUS_BEHAVIOURS.choose(&mut rng).expect("non-empty list")
        } else {
            *NORMAL_BEHAVIOURS.choose(&mut rng).expect("non-empty list")
        };
        let hostname = *HOSTS.choose(&mut rng).expect("non-empty list");
        let timestamp = base_time + Duration::minutes(i as i64);

        events.push(ProcessEvent {
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
            hostname: hostname.to_string(),
            parent_process: parent.to_string(),
            child_process: child.to_string(),
            is_suspicious,
        });
    }

    events
}
