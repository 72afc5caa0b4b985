//! Detection Types
//!
//! Data structures only; matching logic lives in `engine`, scoring in
//! `risk::scorer`.

use serde::{Deserialize, Serialize};

// ============================================================================
// SEVERITY
// ============================================================================

/// Base severity carried by a signature entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "HIGH" => Some(Severity::High),
            "MEDIUM" => Some(Severity::Medium),
            "LOW" => Some(Severity::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK LABEL
// ============================================================================

/// Qualitative band for a total risk score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "CRITICAL")]
    Critical,
    #[serde(rename = "HIGH RISK")]
    HighRisk,
    #[serde(rename = "MEDIUM RISK")]
    MediumRisk,
    #[serde(rename = "LOW RISK")]
    LowRisk,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Critical => "CRITICAL",
            RiskLabel::HighRisk => "HIGH RISK",
            RiskLabel::MediumRisk => "MEDIUM RISK",
            RiskLabel::LowRisk => "LOW RISK",
        }
    }
}

impl std::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// How the total risk score was assembled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub severity: u32,
    pub frequency: u32,
    pub host: u32,
    pub time: u32,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> u32 {
        self.severity + self.frequency + self.host + self.time
    }
}

// ============================================================================
// ALERT
// ============================================================================

/// A signature hit, fully scored. Immutable after creation; deduplicated by
/// (hostname, parent_process, child_process).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub timestamp: String,
    pub hostname: String,
    pub parent_process: String,
    pub child_process: String,
    pub reason: String,
    pub mitre_id: String,
    pub severity: Severity,
    /// Baseline occurrence count for this pair across the whole batch
    pub frequency: u64,
    pub frequency_note: String,
    /// Total risk in [0, 100]
    pub risk_score: u32,
    pub risk_label: RiskLabel,
    pub breakdown: ScoreBreakdown,
}

impl Alert {
    /// Identity used for deduplication
    pub fn dedup_key(&self) -> (&str, &str, &str) {
        (&self.hostname, &self.parent_process, &self.child_process)
    }
}
