//! Risk Scoring Rules & Constants
//!
//! No logic here, only the numbers the scorer runs on.

// ============================================================================
// SEVERITY SCORES
// ============================================================================

pub const SEVERITY_HIGH_SCORE: u32 = 50;
pub const SEVERITY_MEDIUM_SCORE: u32 = 30;
pub const SEVERITY_LOW_SCORE: u32 = 10;

// ============================================================================
// FREQUENCY BANDS
// ============================================================================
// The frequency signal is U-shaped on purpose: a widespread pair may be a
// campaign, a one-off pair may be targeted or stealthy. Both ends score
// higher than the middle.

/// freq >= 20: widespread, possible campaign
pub const FREQ_WIDESPREAD_MIN: u64 = 20;
pub const FREQ_WIDESPREAD_SCORE: u32 = 25;

/// 10 <= freq < 20: elevated, worth escalating
pub const FREQ_ELEVATED_MIN: u64 = 10;
pub const FREQ_ELEVATED_SCORE: u32 = 20;

/// 5 <= freq < 10: moderate, monitor closely
pub const FREQ_MODERATE_MIN: u64 = 5;
pub const FREQ_MODERATE_SCORE: u32 = 15;

/// freq == 1: single occurrence, could be targeted or stealthy
pub const FREQ_SINGLETON_SCORE: u32 = 20;

/// Everything else (0, 2, 3, 4): low but not unique
pub const FREQ_LOW_SCORE: u32 = 10;

// ============================================================================
// HOST CRITICALITY
// ============================================================================
// Servers are higher value targets, and a compromised domain controller
// means a compromised organisation. Matched case-insensitively against the
// hostname; any match scores the same, so keyword order does not matter.

pub const SERVER_KEYWORDS: &[&str] = &["SRV", "DC", "SERVER", "DOMAIN"];

pub const HOST_SERVER_SCORE: u32 = 20;
pub const HOST_WORKSTATION_SCORE: u32 = 5;

// ============================================================================
// TIME OF DAY
// ============================================================================
// Attackers favour off hours. 11PM to 5AM on an enterprise endpoint is
// inherently suspicious; early morning and evening slightly so.

pub const TIME_OFF_HOURS_SCORE: u32 = 15;
pub const TIME_EDGE_HOURS_SCORE: u32 = 5;
pub const TIME_BUSINESS_HOURS_SCORE: u32 = 0;

// ============================================================================
// TOTALS AND LABELS
// ============================================================================

/// Hard cap on the summed score
pub const MAX_RISK_SCORE: u32 = 100;

/// Label band lower bounds (inclusive)
pub const LABEL_CRITICAL_MIN: u32 = 80;
pub const LABEL_HIGH_RISK_MIN: u32 = 60;
pub const LABEL_MEDIUM_RISK_MIN: u32 = 40;
