//! Logic Module - Pipeline Stages
//!
//! One module per stage of the lab pipeline:
//! - `simulate` - synthetic endpoint log generation
//! - `telemetry` - event types and flat-file log storage
//! - `baseline` - parent/child frequency baseline
//! - `detect` - static signature matching and dedup
//! - `risk` - heuristic risk scoring
//! - `report` - sorted rendering and alert export

pub mod baseline;
pub mod config;
pub mod detect;
pub mod report;
pub mod risk;
pub mod simulate;
pub mod telemetry;
