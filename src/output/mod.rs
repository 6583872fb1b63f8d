//! Output formatting and display system
//!
//! This module provides the console rendering for probe runs, supporting
//! both colored and plain text output with table formatting.

mod colored;
mod formatter;

pub use colored::{ColorScheme, ColoredFormatter};
pub use formatter::{
    Alignment, Column, FormattingOptions, PlainFormatter, ReportFormatter, RowData, TableFormat,
};

use crate::{
    models::{ProbeConfig, TimingRecord, TimingRun},
    runner::{ProgressReporter, Stage},
    stats::RunSummary,
};
use std::time::Duration;

/// Formatting factory for creating appropriate formatters
pub struct ReportFormatterFactory;

impl ReportFormatterFactory {
    /// Create a formatter based on color support and preferences
    pub fn create_formatter(enable_color: bool) -> Box<dyn ReportFormatter> {
        let options = FormattingOptions {
            enable_color,
            table_borders: true,
        };

        if enable_color {
            Box::new(ColoredFormatter::new(options))
        } else {
            Box::new(PlainFormatter::new(options))
        }
    }
}

/// Progress reporter that renders run events to stdout.
///
/// Iteration banners follow the single-run convention: a lone iteration
/// prints no banner and no summary.
pub struct ConsoleReporter {
    formatter: Box<dyn ReportFormatter>,
}

impl ConsoleReporter {
    /// Create a reporter around an explicit formatter
    pub fn new(formatter: Box<dyn ReportFormatter>) -> Self {
        Self { formatter }
    }

    /// Create a reporter honoring the configured color preference
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(ReportFormatterFactory::create_formatter(
            config.enable_color,
        ))
    }
}

impl ProgressReporter for ConsoleReporter {
    fn run_started(&mut self, config: &ProbeConfig) {
        println!("{}", self.formatter.format_run_header(config));
    }

    fn iteration_started(&mut self, index: usize, total: usize) {
        if total > 1 {
            println!("{}", self.formatter.format_iteration_banner(index, total));
        }
    }

    fn stage_completed(&mut self, stage: Stage, elapsed: Duration) {
        println!("{}", self.formatter.format_stage_line(stage, elapsed));
    }

    fn iteration_completed(&mut self, record: &TimingRecord) {
        println!("{}", self.formatter.format_iteration_totals(record));
    }

    fn run_completed(&mut self, _run: &TimingRun, summary: Option<&RunSummary>) {
        if let Some(summary) = summary {
            println!("{}", self.formatter.format_summary(summary));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_picks_formatter_by_color_preference() {
        // Both formatter kinds render the same banner text when styling is
        // inactive, so exercise them through the trait.
        let colored = ReportFormatterFactory::create_formatter(true);
        let plain = ReportFormatterFactory::create_formatter(false);

        assert!(colored
            .format_iteration_banner(0, 3)
            .contains("Iteration 1/3"));
        assert_eq!(plain.format_iteration_banner(0, 3), "Iteration 1/3");
    }

    #[test]
    fn test_reporter_construction_from_config() {
        let config = ProbeConfig {
            enable_color: false,
            ..ProbeConfig::default()
        };
        let mut reporter = ConsoleReporter::from_config(&config);

        // Smoke the event methods; content is covered by formatter tests.
        reporter.run_started(&config);
        reporter.iteration_started(0, 1);
        reporter.stage_completed(Stage::ClientInit, Duration::from_millis(5));
    }
}
