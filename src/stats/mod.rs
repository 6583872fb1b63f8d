//! Aggregate statistics over a timing run

use crate::models::{TimingRecord, TimingRun};
use serde::{Deserialize, Serialize};

/// Timing metrics summarized across iterations.
///
/// Client initialization is deliberately absent: it is measured once per
/// run, so there is nothing to aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    ApiCall,
    ResponseParse,
    TotalWithoutInit,
}

impl Metric {
    /// All summarized metrics, in display order
    pub const ALL: [Metric; 3] = [
        Metric::ApiCall,
        Metric::ResponseParse,
        Metric::TotalWithoutInit,
    ];

    /// Row label used in the summary table
    pub fn label(&self) -> &'static str {
        match self {
            Self::ApiCall => "Api Call",
            Self::ResponseParse => "Response Parse",
            Self::TotalWithoutInit => "Total Without Init",
        }
    }

    fn extract_ms(&self, record: &TimingRecord) -> f64 {
        match self {
            Self::ApiCall => record.api_call_ms(),
            Self::ResponseParse => record.response_parse_ms(),
            Self::TotalWithoutInit => record.total_without_init_ms(),
        }
    }
}

/// Min/max/mean/median for one metric, in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub metric: Metric,
    pub min_ms: f64,
    pub max_ms: f64,
    pub mean_ms: f64,
    pub median_ms: f64,
}

impl MetricSummary {
    fn from_values(metric: Metric, values: &[f64]) -> Self {
        Self {
            metric,
            min_ms: min(values),
            max_ms: max(values),
            mean_ms: mean(values),
            median_ms: upper_median(values),
        }
    }
}

/// Aggregate statistics for a complete run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Per-metric summaries, in display order
    pub metrics: Vec<MetricSummary>,

    /// Arithmetic mean of input token counts across iterations
    pub mean_input_tokens: f64,

    /// Arithmetic mean of output token counts across iterations
    pub mean_output_tokens: f64,

    /// Number of records the summary covers
    pub sample_count: usize,
}

impl RunSummary {
    /// Summarize a completed run. Returns `None` for an empty run.
    pub fn from_run(run: &TimingRun) -> Option<Self> {
        if run.is_empty() {
            return None;
        }

        let metrics = Metric::ALL
            .iter()
            .map(|&metric| {
                let values: Vec<f64> = run
                    .records
                    .iter()
                    .map(|record| metric.extract_ms(record))
                    .collect();
                MetricSummary::from_values(metric, &values)
            })
            .collect();

        let count = run.records.len() as f64;
        let input_sum: f64 = run.records.iter().map(|r| r.input_tokens as f64).sum();
        let output_sum: f64 = run.records.iter().map(|r| r.output_tokens as f64).sum();

        Some(Self {
            metrics,
            mean_input_tokens: input_sum / count,
            mean_output_tokens: output_sum / count,
            sample_count: run.records.len(),
        })
    }

    /// Look up the summary for a specific metric
    pub fn metric(&self, metric: Metric) -> Option<&MetricSummary> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

/// Arithmetic mean; 0.0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Smallest value; 0.0 for an empty slice
pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().cloned().fold(f64::INFINITY, f64::min)
}

/// Largest value; 0.0 for an empty slice
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
}

/// Upper median: element at index `len / 2` of the ascending-sorted values.
///
/// For an even number of samples this picks the larger of the two central
/// elements rather than interpolating, so the result is always an observed
/// value. 0.0 for an empty slice.
pub fn upper_median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted[sorted.len() / 2]
}
