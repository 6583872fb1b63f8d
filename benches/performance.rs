//! Performance benchmarks for the latency probe
//!
//! These benchmarks cover the work the probe does between timed network
//! sections: request construction, response decoding, statistics
//! aggregation, and report formatting. Keeping these paths cheap matters
//! because anything slow here pollutes the measured stage timings.

use bedrock_latency_probe::{
    cli::Cli,
    config::ConfigParser,
    models::{ProbeConfig, TimingRecord, TimingRun},
    output::{FormattingOptions, PlainFormatter, ReportFormatter},
    provider::ProviderSchema,
    stats::{mean, upper_median, RunSummary},
};
use clap::Parser;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

/// Claude-style response body used for parse benchmarks
const CLAUDE_BODY: &[u8] = br#"{
    "id": "msg_bench",
    "content": [{"type": "text", "text": "A short greeting, produced for benchmarking."}],
    "usage": {"input_tokens": 12, "output_tokens": 9}
}"#;

/// Titan-style response body used for parse benchmarks
const TITAN_BODY: &[u8] = br#"{
    "inputTextTokenCount": 12,
    "results": [{"outputText": "A short greeting.", "tokenCount": 5}]
}"#;

/// Create a timing run with varied stage durations for benchmarking
fn create_benchmark_run(count: usize) -> TimingRun {
    let mut run = TimingRun::new("bench.claude-model");
    for i in 0..count {
        let client_init = if i == 0 {
            Some(Duration::from_millis(40))
        } else {
            None
        };
        run.add_record(TimingRecord::new(
            client_init,
            Duration::from_millis(200 + i as u64 % 300),
            Duration::from_micros(150 + i as u64 % 90),
            9 + i as u64 % 4,
            120 + i as u64 % 40,
            480 + i % 160,
        ));
    }
    run
}

/// Benchmark schema detection, request construction, and response parsing
fn benchmark_schema_handling(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_handling");

    group.bench_function("detect_schema", |b| {
        let model_ids = [
            "us.anthropic.claude-sonnet-4-5-20250929-v1:0",
            "amazon.titan-text-express-v1",
            "meta.llama3-8b-instruct-v1:0",
        ];
        b.iter(|| {
            for model_id in &model_ids {
                black_box(ProviderSchema::detect(black_box(model_id)));
            }
        });
    });

    group.bench_function("build_messages_request", |b| {
        let schema = ProviderSchema::AnthropicMessages;
        b.iter(|| {
            let body = schema
                .build_request(black_box("Hello! Please respond with a short greeting."), 1000)
                .unwrap();
            black_box(body);
        });
    });

    group.bench_function("build_titan_request", |b| {
        let schema = ProviderSchema::TitanText;
        b.iter(|| {
            let body = schema
                .build_request(black_box("Hello! Please respond with a short greeting."), 1000)
                .unwrap();
            black_box(body);
        });
    });

    group.bench_function("parse_messages_response", |b| {
        let schema = ProviderSchema::AnthropicMessages;
        b.iter(|| {
            let output = schema.parse_response(black_box(CLAUDE_BODY)).unwrap();
            black_box(output);
        });
    });

    group.bench_function("parse_titan_response", |b| {
        let schema = ProviderSchema::TitanText;
        b.iter(|| {
            let output = schema.parse_response(black_box(TITAN_BODY)).unwrap();
            black_box(output);
        });
    });

    group.finish();
}

/// Benchmark configuration parsing from CLI arguments
fn benchmark_config_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("config_parsing");

    group.bench_function("parse_cli_args", |b| {
        let args = vec![
            "blp",
            "--model",
            "amazon.titan-text-express-v1",
            "--iterations",
            "5",
            "--max-tokens",
            "256",
            "--no-color",
        ];
        b.iter(|| {
            let cli = Cli::try_parse_from(black_box(&args)).unwrap();
            black_box(cli);
        });
    });

    group.bench_function("validate_config", |b| {
        let config = ProbeConfig::default();
        b.iter(|| {
            let result = config.validate();
            black_box(result);
        });
    });

    group.bench_function("parse_from_cli", |b| {
        let cli = Cli::try_parse_from(vec![
            "blp",
            "--model",
            "amazon.titan-text-express-v1",
            "--iterations",
            "5",
            "--no-color",
        ])
        .unwrap();

        b.iter(|| {
            let parser = ConfigParser::new(black_box(cli.clone()));
            let config = parser.parse().unwrap();
            black_box(config);
        });
    });

    group.finish();
}

/// Benchmark statistics aggregation across run sizes
fn benchmark_statistics_calculation(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [10, 50, 100, 500, 1000].iter() {
        let run = create_benchmark_run(*size);

        group.bench_with_input(BenchmarkId::new("summarize_run", size), size, |b, _| {
            b.iter(|| {
                let summary = RunSummary::from_run(black_box(&run));
                black_box(summary);
            });
        });

        group.bench_with_input(BenchmarkId::new("raw_aggregates", size), size, |b, _| {
            let values: Vec<f64> = run.records.iter().map(|r| r.api_call_ms()).collect();
            b.iter(|| {
                let median = upper_median(black_box(&values));
                let average = mean(black_box(&values));
                black_box((median, average));
            });
        });
    }

    group.finish();
}

/// Benchmark report formatting for the console
fn benchmark_report_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_formatting");

    let formatter = PlainFormatter::new(FormattingOptions {
        enable_color: false,
        table_borders: true,
    });
    let config = ProbeConfig::default();
    let run = create_benchmark_run(100);
    let summary = RunSummary::from_run(&run).unwrap();
    let record = run.records[0].clone();

    group.bench_function("format_run_header", |b| {
        b.iter(|| {
            let text = formatter.format_run_header(black_box(&config));
            black_box(text);
        });
    });

    group.bench_function("format_iteration_totals", |b| {
        b.iter(|| {
            let text = formatter.format_iteration_totals(black_box(&record));
            black_box(text);
        });
    });

    group.bench_function("format_summary_table", |b| {
        b.iter(|| {
            let text = formatter.format_summary(black_box(&summary));
            black_box(text);
        });
    });

    group.finish();
}

/// Performance regression tests - these should consistently meet performance targets
fn benchmark_performance_regression(c: &mut Criterion) {
    let mut group = c.benchmark_group("performance_regression");

    // Configuration parsing should be well under a millisecond
    group.bench_function("config_parsing_speed", |b| {
        let args = vec!["blp", "--model", "bench.claude-model", "--iterations", "3"];
        b.iter(|| {
            let cli = Cli::try_parse_from(black_box(&args)).unwrap();
            let parser = ConfigParser::new(cli);
            let config = parser.parse().unwrap();
            black_box(config);
        });
    });

    // Summarizing 100 records should be far below one iteration delay
    group.bench_function("stats_calculation_speed", |b| {
        let run = create_benchmark_run(100);
        b.iter(|| {
            let summary = RunSummary::from_run(black_box(&run));
            black_box(summary);
        });
    });

    // Request construction sits inside the timed call stage, so it must
    // stay negligible next to network time
    group.bench_function("request_build_speed", |b| {
        let schema = ProviderSchema::detect("bench.claude-model");
        b.iter(|| {
            let body = schema.build_request(black_box("ping"), 1000).unwrap();
            black_box(body);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_schema_handling,
    benchmark_config_parsing,
    benchmark_statistics_calculation,
    benchmark_report_formatting,
    benchmark_performance_regression
);

criterion_main!(benches);
