//! Alert Report Rendering & Export
//!
//! Sorts alerts by risk score descending (stable, ties keep log order),
//! renders a human-readable report, and exports the same ordering as JSONL
//! for downstream SIEM ingestion.

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use super::detect::{Alert, RiskLabel};

const BANNER_WIDTH: usize = 70;

/// Alerts in render order: risk score descending, stable on ties
fn sorted_by_risk(alerts: &[Alert]) -> Vec<&Alert> {
    let mut sorted: Vec<&Alert> = alerts.iter().collect();
    sorted.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));
    sorted
}

/// Render the full report. Empty input renders the sentinel line instead of
/// an empty banner.
pub fn render_report(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "No suspicious activity detected.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&"=".repeat(BANNER_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "  BEHAVIOURAL DETECTION ENGINE - {} ALERTS FOUND\n",
        alerts.len()
    ));
    out.push_str(&"=".repeat(BANNER_WIDTH));
    out.push('\n');

    for (i, alert) in sorted_by_risk(alerts).iter().enumerate() {
        out.push_str(&format!("\n[ALERT {}] Severity: {}\n", i + 1, alert.severity));
        out.push_str(&format!("  Time      : {}\n", alert.timestamp));
        out.push_str(&format!("  Host      : {}\n", alert.hostname));
        out.push_str(&format!("  Parent    : {}\n", alert.parent_process));
        out.push_str(&format!("  Child     : {}\n", alert.child_process));
        out.push_str(&format!("  Reason    : {}\n", alert.reason));
        out.push_str(&format!("  MITRE     : {}\n", alert.mitre_id));
        out.push_str(&format!(
            "  Frequency : {} ({})\n",
            alert.frequency, alert.frequency_note
        ));
        out.push_str(&format!(
            "  Risk      : {}/100 {} (severity {} + frequency {} + host {} + time {})\n",
            alert.risk_score,
            alert.risk_label,
            alert.breakdown.severity,
            alert.breakdown.frequency,
            alert.breakdown.host,
            alert.breakdown.time,
        ));
    }

    out
}

/// Export alerts as JSONL in render order. Returns the number written.
pub fn export_alerts_jsonl(alerts: &[Alert], path: &Path) -> io::Result<usize> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut file = File::create(path)?;
    for alert in sorted_by_risk(alerts) {
        writeln!(file, "{}", serde_json::to_string(alert)?)?;
    }
    file.flush()?;

    Ok(alerts.len())
}

/// Closing summary for a pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub total_alerts: usize,
    pub endpoints: usize,
    pub critical: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

pub fn summarize(alerts: &[Alert]) -> ReportSummary {
    let endpoints: HashSet<&str> = alerts.iter().map(|a| a.hostname.as_str()).collect();

    let count = |label: RiskLabel| alerts.iter().filter(|a| a.risk_label == label).count();

    ReportSummary {
        total_alerts: alerts.len(),
        endpoints: endpoints.len(),
        critical: count(RiskLabel::Critical),
        high_risk: count(RiskLabel::HighRisk),
        medium_risk: count(RiskLabel::MediumRisk),
        low_risk: count(RiskLabel::LowRisk),
    }
}

impl std::fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} alerts across {} endpoints ({} critical, {} high, {} medium, {} low)",
            self.total_alerts,
            self.endpoints,
            self.critical,
            self.high_risk,
            self.medium_risk,
            self.low_risk
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::detect::types::{ScoreBreakdown, Severity};
    use tempfile::tempdir;

    fn alert(host: &str, risk_score: u32, tag: &str) -> Alert {
        Alert {
            timestamp: "2026-02-27 02:30:00".to_string(),
            hostname: host.to_string(),
            parent_process: tag.to_string(),
            child_process: "powershell.exe".to_string(),
            reason: "test".to_string(),
            mitre_id: "T0000".to_string(),
            severity: Severity::High,
            frequency: 1,
            frequency_note: "Low frequency - targeted or stealthy".to_string(),
            risk_score,
            risk_label: RiskLabel::from_score(risk_score),
            breakdown: ScoreBreakdown::default(),
        }
    }

    #[test]
    fn test_empty_report_sentinel() {
        assert_eq!(render_report(&[]), "No suspicious activity detected.\n");
    }

    #[test]
    fn test_sort_is_descending_and_stable() {
        let alerts = vec![
            alert("h1", 30, "thirty"),
            alert("h2", 90, "first90"),
            alert("h3", 90, "second90"),
            alert("h4", 10, "ten"),
        ];
        let sorted = sorted_by_risk(&alerts);

        let order: Vec<&str> = sorted.iter().map(|a| a.parent_process.as_str()).collect();
        assert_eq!(order, vec!["first90", "second90", "thirty", "ten"]);
    }

    #[test]
    fn test_render_numbers_alerts_in_sorted_order() {
        let alerts = vec![alert("h1", 30, "low.exe"), alert("h2", 90, "high.exe")];
        let report = render_report(&alerts);

        assert!(report.contains("2 ALERTS FOUND"));
        let high_pos = report.find("high.exe").unwrap();
        let low_pos = report.find("low.exe").unwrap();
        assert!(high_pos < low_pos);
        assert!(report.contains("[ALERT 1]"));
        assert!(report.contains("[ALERT 2]"));
    }

    #[test]
    fn test_jsonl_export() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("alerts.jsonl");
        let alerts = vec![alert("h1", 30, "a.exe"), alert("h2", 90, "b.exe")];

        let written = export_alerts_jsonl(&alerts, &path).unwrap();
        assert_eq!(written, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        // Highest risk first, label serialized as its report string
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["risk_score"], 90);
        assert_eq!(first["severity"], "HIGH");
        assert_eq!(first["risk_label"], "CRITICAL");
    }

    #[test]
    fn test_summary_counts() {
        let alerts = vec![
            alert("h1", 90, "a"),
            alert("h1", 65, "b"),
            alert("h2", 20, "c"),
        ];
        let summary = summarize(&alerts);

        assert_eq!(summary.total_alerts, 3);
        assert_eq!(summary.endpoints, 2);
        assert_eq!(summary.critical, 1);
        assert_eq!(summary.high_risk, 1);
        assert_eq!(summary.low_risk, 1);
        assert_eq!(summary.medium_risk, 0);
    }
}
