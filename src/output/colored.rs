//! Colored formatter implementation with terminal color support
//!
//! This module provides a colored report formatter that uses ANSI colors
//! for the run header, iteration banners, and the summary table.

use super::formatter::{
    summary_columns, summary_rows, FormattingOptions, PlainFormatter, ReportFormatter, TableFormat,
};
use crate::{
    models::{ProbeConfig, TimingRecord},
    runner::Stage,
    stats::RunSummary,
};
use colored::*;
use std::time::Duration;

/// Color scheme configuration
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub header: Color,
    pub banner: Color,
    pub table_header: Color,
    pub metric: Color,
    pub border: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            header: Color::Cyan,
            banner: Color::Yellow,
            table_header: Color::Magenta,
            metric: Color::Cyan,
            border: Color::BrightBlack,
        }
    }
}

/// Colored formatter implementation
pub struct ColoredFormatter {
    plain_formatter: PlainFormatter,
    options: FormattingOptions,
    color_scheme: ColorScheme,
}

impl ColoredFormatter {
    /// Create a new colored formatter with options
    pub fn new(options: FormattingOptions) -> Self {
        let plain_formatter = PlainFormatter::new(options.clone());
        Self {
            plain_formatter,
            options,
            color_scheme: ColorScheme::default(),
        }
    }

    /// Create a colored formatter with custom color scheme
    pub fn with_color_scheme(options: FormattingOptions, color_scheme: ColorScheme) -> Self {
        let plain_formatter = PlainFormatter::new(options.clone());
        Self {
            plain_formatter,
            options,
            color_scheme,
        }
    }

    /// Apply color to text if colors are enabled
    fn colorize(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.color(color)
        } else {
            text.normal()
        }
    }

    /// Apply bold formatting if colors are enabled
    fn bold(&self, text: &str) -> ColoredString {
        if self.options.enable_color {
            text.bold()
        } else {
            text.normal()
        }
    }

    /// Apply bold plus color if colors are enabled
    fn heading(&self, text: &str, color: Color) -> ColoredString {
        if self.options.enable_color {
            text.bold().color(color)
        } else {
            text.normal()
        }
    }

    /// Summary table with colored header and metric cells.
    ///
    /// Cells are padded before styling so the escape codes never skew the
    /// column widths.
    fn create_colored_table(&self, summary: &RunSummary) -> String {
        let format = TableFormat {
            columns: summary_columns(),
            show_borders: self.options.table_borders,
            show_header: true,
        };
        let rows = summary_rows(summary);
        let widths = super::formatter::calculate_column_widths(&format, &rows);

        let border = self
            .colorize(
                &super::formatter::create_horizontal_border(&widths),
                self.color_scheme.border,
            )
            .to_string();

        let mut output = String::new();

        if format.show_borders {
            output.push_str(&border);
            output.push('\n');
        }

        let headers: Vec<String> = format.columns.iter().map(|c| c.header.clone()).collect();
        output.push_str(&super::formatter::create_row(
            &headers,
            &widths,
            &format,
            |cell, _| self.heading(&cell, self.color_scheme.table_header).to_string(),
        ));
        output.push('\n');

        if format.show_borders {
            output.push_str(&border);
            output.push('\n');
        }

        for row in &rows {
            output.push_str(&super::formatter::create_row(
                row,
                &widths,
                &format,
                |cell, idx| {
                    if idx == 0 {
                        self.colorize(&cell, self.color_scheme.metric).to_string()
                    } else {
                        cell
                    }
                },
            ));
            output.push('\n');
        }

        if format.show_borders {
            output.push_str(&border);
        }

        output.trim_end_matches('\n').to_string()
    }
}

impl ReportFormatter for ColoredFormatter {
    fn format_run_header(&self, config: &ProbeConfig) -> String {
        format!(
            "\n{}\nModel: {}\nRegion: {}\nIterations: {}\nPrompt length: {} chars\n",
            self.heading("Bedrock Timing Test", self.color_scheme.header),
            config.model_id,
            config.region,
            config.iterations,
            config.prompt.chars().count()
        )
    }

    fn format_iteration_banner(&self, index: usize, total: usize) -> String {
        self.colorize(
            &format!("Iteration {}/{}", index + 1, total),
            self.color_scheme.banner,
        )
        .to_string()
    }

    fn format_stage_line(&self, stage: Stage, elapsed: Duration) -> String {
        self.plain_formatter.format_stage_line(stage, elapsed)
    }

    fn format_iteration_totals(&self, record: &TimingRecord) -> String {
        format!(
            "  {}\n  {}\n  Input tokens: {}, Output tokens: {}\n  Response length: {} chars\n",
            self.bold(&format!(
                "Total (with init): {:.2}ms",
                record.total_with_init_ms()
            )),
            self.bold(&format!(
                "Total (without init): {:.2}ms",
                record.total_without_init_ms()
            )),
            record.input_tokens,
            record.output_tokens,
            record.response_length
        )
    }

    fn format_summary(&self, summary: &RunSummary) -> String {
        format!(
            "\n{}\n{}\n\nAverage tokens - Input: {:.0}, Output: {:.0}",
            self.heading("Summary Statistics", self.color_scheme.header),
            self.create_colored_table(summary),
            summary.mean_input_tokens,
            summary.mean_output_tokens
        )
    }
}
