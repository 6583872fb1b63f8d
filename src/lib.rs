//! Bedrock Latency Probe
//!
//! A timing tool that breaks a generative-model invocation into its stages
//! (client initialization, API call, response parsing) and reports per-stage
//! latency across repeated iterations.

pub mod app;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod provider;
pub mod runner;
pub mod stats;
pub mod timing;

// Re-export commonly used types
pub use client::{BedrockRuntimeClient, ModelClient, RawResponse};
pub use error::{AppError, Result};
pub use models::{ProbeConfig, TimingRecord, TimingRun};
pub use output::{
    ColoredFormatter, ConsoleReporter, PlainFormatter, ReportFormatter, ReportFormatterFactory,
};
pub use provider::{ModelOutput, ProviderSchema};
pub use runner::{ProbeRunner, ProgressReporter, Stage};
pub use stats::{Metric, MetricSummary, RunSummary};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Default configuration values
pub mod defaults {
    use std::time::Duration;

    pub const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-sonnet-4-5-20250929-v1:0";
    pub const DEFAULT_PROMPT: &str = "Hello! Please respond with a short greeting.";
    pub const DEFAULT_REGION: &str = "us-east-1";
    pub const DEFAULT_MAX_TOKENS: u32 = 1000;
    pub const DEFAULT_ITERATIONS: u32 = 1;
    pub const DEFAULT_ENABLE_COLOR: bool = true;

    /// Pause inserted between successive iterations
    pub const ITERATION_DELAY: Duration = Duration::from_millis(500);

    /// Connection establishment budget for the HTTP client
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// User agent sent with every invocation request
    pub const USER_AGENT: &str = concat!("bedrock-latency-probe/", env!("CARGO_PKG_VERSION"));
}
