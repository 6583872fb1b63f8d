//! Core formatting traits and implementations
//!
//! This module defines the report formatting interface and provides
//! a plain text implementation with table formatting capabilities.

use crate::{
    models::{ProbeConfig, TimingRecord},
    runner::Stage,
    stats::{Metric, RunSummary},
};
use std::time::Duration;

/// Renders run progress and summary text for the console.
///
/// Every method returns the text without a trailing newline; the caller
/// decides how to emit it.
pub trait ReportFormatter {
    /// Header block printed once at the start of a run
    fn format_run_header(&self, config: &ProbeConfig) -> String;

    /// Per-iteration banner (zero-based index)
    fn format_iteration_banner(&self, index: usize, total: usize) -> String;

    /// Single stage timing line
    fn format_stage_line(&self, stage: Stage, elapsed: Duration) -> String;

    /// Totals, token counts, and response length for one iteration
    fn format_iteration_totals(&self, record: &TimingRecord) -> String;

    /// Summary statistics block for multi-iteration runs
    fn format_summary(&self, summary: &RunSummary) -> String;
}

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormattingOptions {
    /// Enable colored output
    pub enable_color: bool,
    /// Show borders around the summary table
    pub table_borders: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enable_color: true,
            table_borders: true,
        }
    }
}

/// Table formatting configuration
#[derive(Debug, Clone)]
pub struct TableFormat {
    /// Column definitions
    pub columns: Vec<Column>,
    /// Show borders around table
    pub show_borders: bool,
    /// Show header row
    pub show_header: bool,
}

/// Column definition for table formatting
#[derive(Debug, Clone)]
pub struct Column {
    /// Column header
    pub header: String,
    /// Column alignment
    pub alignment: Alignment,
}

/// Text alignment options
#[derive(Debug, Clone)]
pub enum Alignment {
    Left,
    Right,
}

/// Row data for table formatting
pub type RowData = Vec<String>;

/// Columns of the summary statistics table
pub(super) fn summary_columns() -> Vec<Column> {
    vec![
        Column {
            header: "Metric".to_string(),
            alignment: Alignment::Left,
        },
        Column {
            header: "Min (ms)".to_string(),
            alignment: Alignment::Right,
        },
        Column {
            header: "Max (ms)".to_string(),
            alignment: Alignment::Right,
        },
        Column {
            header: "Avg (ms)".to_string(),
            alignment: Alignment::Right,
        },
        Column {
            header: "Median (ms)".to_string(),
            alignment: Alignment::Right,
        },
    ]
}

/// Summary table rows in metric order, values rendered to two decimals
pub(super) fn summary_rows(summary: &RunSummary) -> Vec<RowData> {
    Metric::ALL
        .iter()
        .filter_map(|metric| summary.metric(*metric))
        .map(|stats| {
            vec![
                stats.metric.label().to_string(),
                format!("{:.2}", stats.min_ms),
                format!("{:.2}", stats.max_ms),
                format!("{:.2}", stats.mean_ms),
                format!("{:.2}", stats.median_ms),
            ]
        })
        .collect()
}

/// Milliseconds with two decimals, the precision used for stage lines
pub(super) fn format_ms(elapsed: Duration) -> String {
    format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0)
}

/// Plain text formatter implementation
pub struct PlainFormatter {
    options: FormattingOptions,
}

impl PlainFormatter {
    /// Create a new plain formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        Self { options }
    }

    /// Create a table with the given format and data
    pub(super) fn create_table(&self, format: &TableFormat, rows: &[RowData]) -> String {
        if rows.is_empty() {
            return String::new();
        }

        let column_widths = calculate_column_widths(format, rows);
        let mut output = String::new();

        if format.show_header && !format.columns.is_empty() {
            if format.show_borders {
                output.push_str(&create_horizontal_border(&column_widths));
                output.push('\n');
            }

            let headers: Vec<String> = format.columns.iter().map(|c| c.header.clone()).collect();
            output.push_str(&create_row(&headers, &column_widths, format, |cell, _| cell));
            output.push('\n');

            if format.show_borders {
                output.push_str(&create_horizontal_border(&column_widths));
                output.push('\n');
            }
        }

        for row in rows {
            output.push_str(&create_row(row, &column_widths, format, |cell, _| cell));
            output.push('\n');
        }

        if format.show_borders {
            output.push_str(&create_horizontal_border(&column_widths));
        }

        output.trim_end_matches('\n').to_string()
    }
}

/// Calculate column widths from headers and cell contents
pub(super) fn calculate_column_widths(format: &TableFormat, rows: &[RowData]) -> Vec<usize> {
    let num_columns = format
        .columns
        .len()
        .max(rows.iter().map(|r| r.len()).max().unwrap_or(0));

    (0..num_columns)
        .map(|col_idx| {
            let header_width = format
                .columns
                .get(col_idx)
                .map(|c| c.header.chars().count())
                .unwrap_or(0);

            rows.iter()
                .filter_map(|row| row.get(col_idx))
                .map(|cell| cell.chars().count())
                .fold(header_width, usize::max)
        })
        .collect()
}

/// Create a table row, running each padded cell through `style`
pub(super) fn create_row(
    data: &[String],
    widths: &[usize],
    format: &TableFormat,
    style: impl Fn(String, usize) -> String,
) -> String {
    let mut row = String::new();

    if format.show_borders {
        row.push('|');
    }

    for (idx, (cell, &width)) in data.iter().zip(widths.iter()).enumerate() {
        let alignment = format
            .columns
            .get(idx)
            .map(|c| &c.alignment)
            .unwrap_or(&Alignment::Left);

        let padded_cell = style(align_text(cell, width, alignment), idx);

        if format.show_borders {
            row.push(' ');
            row.push_str(&padded_cell);
            row.push(' ');
            row.push('|');
        } else {
            row.push_str(&padded_cell);
            row.push_str("  ");
        }
    }

    if format.show_borders {
        row
    } else {
        row.trim_end().to_string()
    }
}

/// Create horizontal border for table
pub(super) fn create_horizontal_border(widths: &[usize]) -> String {
    let mut border = String::new();

    if !widths.is_empty() {
        border.push('+');
        for &width in widths {
            border.push_str(&"-".repeat(width + 2));
            border.push('+');
        }
    }

    border
}

/// Align text within specified width
pub(super) fn align_text(text: &str, width: usize, alignment: &Alignment) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }

    let padding = width - length;
    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), text),
    }
}

impl ReportFormatter for PlainFormatter {
    fn format_run_header(&self, config: &ProbeConfig) -> String {
        format!(
            "\nBedrock Timing Test\nModel: {}\nRegion: {}\nIterations: {}\nPrompt length: {} chars\n",
            config.model_id,
            config.region,
            config.iterations,
            config.prompt.chars().count()
        )
    }

    fn format_iteration_banner(&self, index: usize, total: usize) -> String {
        format!("Iteration {}/{}", index + 1, total)
    }

    fn format_stage_line(&self, stage: Stage, elapsed: Duration) -> String {
        format!("  {}: {}", stage.label(), format_ms(elapsed))
    }

    fn format_iteration_totals(&self, record: &TimingRecord) -> String {
        format!(
            "  Total (with init): {:.2}ms\n  Total (without init): {:.2}ms\n  Input tokens: {}, Output tokens: {}\n  Response length: {} chars\n",
            record.total_with_init_ms(),
            record.total_without_init_ms(),
            record.input_tokens,
            record.output_tokens,
            record.response_length
        )
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        let table_format = TableFormat {
            columns: summary_columns(),
            show_borders: self.options.table_borders,
            show_header: true,
        };
        let table = self.create_table(&table_format, &summary_rows(summary));

        format!(
            "\nSummary Statistics\n{}\n\nAverage tokens - Input: {:.0}, Output: {:.0}",
            table, summary.mean_input_tokens, summary.mean_output_tokens
        )
    }
}
