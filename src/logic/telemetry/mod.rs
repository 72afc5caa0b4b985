//! Telemetry Module - Endpoint Event Types & Log Storage
//!
//! ## Structure
//! - `event`: Core event type (ProcessEvent)
//! - `store`: Flat CSV log storage (save/load)

pub mod event;
pub mod store;

pub use event::{ProcessEvent, TIMESTAMP_FORMAT};
