//! Detection Module - Static Signature Matching
//!
//! ## Structure
//! - `types`: Core types (Severity, Alert, ScoreBreakdown, RiskLabel)
//! - `signatures`: The built-in known-bad pair table
//! - `engine`: Matching and deduplication logic

pub mod engine;
pub mod signatures;
pub mod types;

pub use engine::{dedup_alerts, run_detection};
pub use signatures::{SignatureEntry, SignatureSet};
pub use types::{Alert, RiskLabel, ScoreBreakdown, Severity};
