//! Data models and structures for the latency probe

pub mod config;
pub mod record;

// Re-export main model types
pub use config::ProbeConfig;
pub use record::{TimingRecord, TimingRun};
