//! Detection Engine
//!
//! Matches every event against the signature table and scores the hits.
//! Detection is strictly allow-list-negative: a (parent, child) pair outside
//! the table is invisible to this engine, even when the baseline shows it
//! occurred exactly once in the whole batch. That is a known limitation of
//! the lab, not something the engine tries to compensate for.

use std::collections::HashSet;

use super::signatures::{SignatureEntry, SignatureSet};
use super::types::{Alert, RiskLabel};
use crate::logic::baseline::BaselineTable;
use crate::logic::risk::calculate_risk_score;
use crate::logic::telemetry::ProcessEvent;

/// Baseline count above which a hit reads as a campaign rather than a
/// targeted action
const CAMPAIGN_FREQUENCY_MIN: u64 = 15;

/// Match all events against the signature set, score the hits, and
/// deduplicate by (hostname, parent, child), keeping the earliest hit.
pub fn run_detection(
    events: &[ProcessEvent],
    baseline: &BaselineTable,
    signatures: &SignatureSet,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for event in events {
        let (parent, child) = event.pair();
        if let Some(entry) = signatures.lookup(parent, child) {
            let frequency = baseline.count(parent, child);
            alerts.push(build_alert(event, entry, frequency));
        }
    }

    let matched = alerts.len();
    let alerts = dedup_alerts(alerts);
    log::info!(
        "Detection: {} events matched, {} unique alerts after dedup",
        matched,
        alerts.len()
    );

    alerts
}

/// One alert per unique (hostname, parent, child), first occurrence wins
pub fn dedup_alerts(alerts: Vec<Alert>) -> Vec<Alert> {
    let mut seen = HashSet::new();
    alerts
        .into_iter()
        .filter(|alert| {
            let (host, parent, child) = alert.dedup_key();
            seen.insert((host.to_string(), parent.to_string(), child.to_string()))
        })
        .collect()
}

fn build_alert(event: &ProcessEvent, entry: &'static SignatureEntry, frequency: u64) -> Alert {
    let (risk_score, breakdown) = calculate_risk_score(
        entry.severity.as_str(),
        frequency,
        &event.hostname,
        &event.timestamp,
    );

    Alert {
        timestamp: event.timestamp.clone(),
        hostname: event.hostname.clone(),
        parent_process: event.parent_process.clone(),
        child_process: event.child_process.clone(),
        reason: entry.reason.to_string(),
        mitre_id: entry.mitre_id.to_string(),
        severity: entry.severity,
        frequency,
        frequency_note: frequency_note(frequency),
        risk_score,
        risk_label: RiskLabel::from_score(risk_score),
        breakdown,
    }
}

fn frequency_note(frequency: u64) -> String {
    if frequency > CAMPAIGN_FREQUENCY_MIN {
        "Widespread - possible campaign".to_string()
    } else {
        "Low frequency - targeted or stealthy".to_string()
    }
}
