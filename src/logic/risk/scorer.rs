//! Risk Scorer
//!
//! Pure functions only. Four independent sub-scores, summed and capped at
//! [`rules::MAX_RISK_SCORE`]. All components are non-negative, so the cap is
//! the only clamp needed. Every recoverable oddity (unknown severity label,
//! unparseable timestamp) degrades to a zero sub-score instead of failing.

use chrono::{NaiveDateTime, Timelike};

use super::rules;
use crate::logic::detect::{RiskLabel, ScoreBreakdown};
use crate::logic::telemetry::TIMESTAMP_FORMAT;

/// Base score from the severity label. Unknown labels score zero.
pub fn score_severity(label: &str) -> u32 {
    match label {
        "HIGH" => rules::SEVERITY_HIGH_SCORE,
        "MEDIUM" => rules::SEVERITY_MEDIUM_SCORE,
        "LOW" => rules::SEVERITY_LOW_SCORE,
        _ => 0,
    }
}

/// U-shaped frequency score: both very common and one-off pairs rank higher
/// than the middle bands.
pub fn score_frequency(frequency: u64) -> u32 {
    if frequency >= rules::FREQ_WIDESPREAD_MIN {
        rules::FREQ_WIDESPREAD_SCORE
    } else if frequency >= rules::FREQ_ELEVATED_MIN {
        rules::FREQ_ELEVATED_SCORE
    } else if frequency >= rules::FREQ_MODERATE_MIN {
        rules::FREQ_MODERATE_SCORE
    } else if frequency == 1 {
        rules::FREQ_SINGLETON_SCORE
    } else {
        rules::FREQ_LOW_SCORE
    }
}

/// Host criticality: server or domain-controller naming scores high,
/// everything else counts as a workstation.
pub fn score_host(hostname: &str) -> u32 {
    let upper = hostname.to_uppercase();
    for keyword in rules::SERVER_KEYWORDS {
        if upper.contains(keyword) {
            return rules::HOST_SERVER_SCORE;
        }
    }
    rules::HOST_WORKSTATION_SCORE
}

/// Time-of-day score from the event timestamp. An unparseable timestamp
/// fails open to zero, never aborting the pipeline.
pub fn score_time(timestamp: &str) -> u32 {
    let parsed = match NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT) {
        Ok(dt) => dt,
        Err(_) => return rules::TIME_BUSINESS_HOURS_SCORE,
    };

    let hour = parsed.hour();
    if hour >= 23 || hour <= 5 {
        rules::TIME_OFF_HOURS_SCORE
    } else if (6..=8).contains(&hour) || (18..=22).contains(&hour) {
        rules::TIME_EDGE_HOURS_SCORE
    } else {
        rules::TIME_BUSINESS_HOURS_SCORE
    }
}

/// Combine the four signals. Returns the capped total and the per-signal
/// breakdown. Deterministic for identical inputs.
pub fn calculate_risk_score(
    severity_label: &str,
    frequency: u64,
    hostname: &str,
    timestamp: &str,
) -> (u32, ScoreBreakdown) {
    let breakdown = ScoreBreakdown {
        severity: score_severity(severity_label),
        frequency: score_frequency(frequency),
        host: score_host(hostname),
        time: score_time(timestamp),
    };

    let total = breakdown.sum().min(rules::MAX_RISK_SCORE);
    (total, breakdown)
}

impl RiskLabel {
    /// Map a total score to its qualitative band. Lower bounds inclusive.
    pub fn from_score(score: u32) -> Self {
        if score >= rules::LABEL_CRITICAL_MIN {
            RiskLabel::Critical
        } else if score >= rules::LABEL_HIGH_RISK_MIN {
            RiskLabel::HighRisk
        } else if score >= rules::LABEL_MEDIUM_RISK_MIN {
            RiskLabel::MediumRisk
        } else {
            RiskLabel::LowRisk
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_scores() {
        assert_eq!(score_severity("HIGH"), 50);
        assert_eq!(score_severity("MEDIUM"), 30);
        assert_eq!(score_severity("LOW"), 10);
        assert_eq!(score_severity("CRITICAL"), 0);
        assert_eq!(score_severity(""), 0);
    }

    #[test]
    fn test_frequency_bands_exact_values() {
        // The scale is intentionally U-shaped, so the bands are pinned to
        // exact values rather than any monotonicity property.
        assert_eq!(score_frequency(0), 10);
        assert_eq!(score_frequency(1), 20);
        assert_eq!(score_frequency(2), 10);
        assert_eq!(score_frequency(4), 10);
        assert_eq!(score_frequency(5), 15);
        assert_eq!(score_frequency(9), 15);
        assert_eq!(score_frequency(10), 20);
        assert_eq!(score_frequency(19), 20);
        assert_eq!(score_frequency(20), 25);
        assert_eq!(score_frequency(500), 25);
    }

    #[test]
    fn test_frequency_value_set() {
        for f in 0..100 {
            assert!([10, 15, 20, 25].contains(&score_frequency(f)));
        }
    }

    #[test]
    fn test_host_keywords_case_insensitive() {
        assert_eq!(score_host("SRV-DC01"), 20);
        assert_eq!(score_host("srv-dc01"), 20);
        assert_eq!(score_host("Domain-Ctrl"), 20);
        assert_eq!(score_host("fileSERVER9"), 20);
        assert_eq!(score_host("WKSTN-001"), 5);
        assert_eq!(score_host(""), 5);
    }

    #[test]
    fn test_time_bands() {
        assert_eq!(score_time("2026-02-27 02:30:00"), 15);
        assert_eq!(score_time("2026-02-27 23:00:00"), 15);
        assert_eq!(score_time("2026-02-27 05:59:59"), 15);
        assert_eq!(score_time("2026-02-27 07:00:00"), 5);
        assert_eq!(score_time("2026-02-27 18:00:00"), 5);
        assert_eq!(score_time("2026-02-27 22:30:00"), 5);
        assert_eq!(score_time("2026-02-27 12:00:00"), 0);
        assert_eq!(score_time("2026-02-27 09:00:00"), 0);
    }

    #[test]
    fn test_unparseable_timestamp_fails_open() {
        assert_eq!(score_time("not a timestamp"), 0);
        assert_eq!(score_time("2026-02-27T02:30:00Z"), 0);
        assert_eq!(score_time(""), 0);
    }

    #[test]
    fn test_total_is_capped_at_100() {
        // HIGH(50) + widespread(25) + DC host(20) + off hours(15) = 110
        let (total, breakdown) =
            calculate_risk_score("HIGH", 25, "SRV-DC01", "2026-02-27 02:30:00");
        assert_eq!(breakdown.sum(), 110);
        assert_eq!(total, 100);
        assert_eq!(RiskLabel::from_score(total), RiskLabel::Critical);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let first = calculate_risk_score("MEDIUM", 7, "WKSTN-042", "2026-02-27 19:15:00");
        let second = calculate_risk_score("MEDIUM", 7, "WKSTN-042", "2026-02-27 19:15:00");
        assert_eq!(first, second);
        // MEDIUM(30) + moderate(15) + workstation(5) + evening(5) = 55
        assert_eq!(first.0, 55);
    }

    #[test]
    fn test_label_band_lower_bounds() {
        assert_eq!(RiskLabel::from_score(100), RiskLabel::Critical);
        assert_eq!(RiskLabel::from_score(80), RiskLabel::Critical);
        assert_eq!(RiskLabel::from_score(79), RiskLabel::HighRisk);
        assert_eq!(RiskLabel::from_score(60), RiskLabel::HighRisk);
        assert_eq!(RiskLabel::from_score(59), RiskLabel::MediumRisk);
        assert_eq!(RiskLabel::from_score(40), RiskLabel::MediumRisk);
        assert_eq!(RiskLabel::from_score(39), RiskLabel::LowRisk);
        assert_eq!(RiskLabel::from_score(0), RiskLabel::LowRisk);
    }
}
