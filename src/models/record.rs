//! Timing records and run-level data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-stage timing for a single probe iteration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingRecord {
    /// Time spent initializing the runtime client (first iteration only)
    pub client_init: Option<Duration>,

    /// Time from request dispatch to full response receipt
    pub api_call: Duration,

    /// Time spent decoding the response body
    pub response_parse: Duration,

    /// Input token count reported by the service
    pub input_tokens: u64,

    /// Output token count reported by the service
    pub output_tokens: u64,

    /// Length of the generated text in characters
    pub response_length: usize,

    /// Timestamp when the iteration completed
    pub timestamp: DateTime<Utc>,
}

impl TimingRecord {
    /// Create a record for a completed iteration
    pub fn new(
        client_init: Option<Duration>,
        api_call: Duration,
        response_parse: Duration,
        input_tokens: u64,
        output_tokens: u64,
        response_length: usize,
    ) -> Self {
        Self {
            client_init,
            api_call,
            response_parse,
            input_tokens,
            output_tokens,
            response_length,
            timestamp: Utc::now(),
        }
    }

    /// Total elapsed time including client initialization (zero when absent)
    pub fn total_with_init(&self) -> Duration {
        self.client_init.unwrap_or(Duration::ZERO) + self.total_without_init()
    }

    /// Total elapsed time across the repeatable stages only
    pub fn total_without_init(&self) -> Duration {
        self.api_call + self.response_parse
    }

    /// Format timings as milliseconds
    pub fn client_init_ms(&self) -> Option<f64> {
        self.client_init.map(|d| d.as_secs_f64() * 1000.0)
    }

    pub fn api_call_ms(&self) -> f64 {
        self.api_call.as_secs_f64() * 1000.0
    }

    pub fn response_parse_ms(&self) -> f64 {
        self.response_parse.as_secs_f64() * 1000.0
    }

    pub fn total_with_init_ms(&self) -> f64 {
        self.total_with_init().as_secs_f64() * 1000.0
    }

    pub fn total_without_init_ms(&self) -> f64 {
        self.total_without_init().as_secs_f64() * 1000.0
    }
}

/// Ordered set of iteration records from one probe run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingRun {
    /// Model identifier that was probed
    pub model_id: String,

    /// Individual iteration records, in execution order
    pub records: Vec<TimingRecord>,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run completed
    pub completed_at: Option<DateTime<Utc>>,
}

impl TimingRun {
    /// Create an empty run for the given model
    pub fn new<S: Into<String>>(model_id: S) -> Self {
        Self {
            model_id: model_id.into(),
            records: Vec::new(),
            started_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Append the record for the iteration that just finished
    pub fn add_record(&mut self, record: TimingRecord) {
        self.records.push(record);
    }

    /// Mark the run as finished
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Number of completed iterations
    pub fn iterations(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
