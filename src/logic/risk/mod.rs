//! Risk Module - Heuristic Alert Scoring
//!
//! Combines multiple weak signals into one number. A HIGH severity alert at
//! 9AM on a workstation is less urgent than a MEDIUM alert at 3AM on a
//! domain controller; the scorer encodes exactly that trade-off.
//!
//! ## Structure
//! - `rules`: Score constants, bands, and keyword lists
//! - `scorer`: The four sub-scores and the capped total

pub mod rules;
pub mod scorer;

pub use scorer::{calculate_risk_score, score_frequency, score_host, score_severity, score_time};
