//! Bedrock Latency Probe - Main CLI Application
//!
//! Times the stages of a model invocation call (client initialization, API
//! call, response parsing) against a configurable model runtime endpoint.

use bedrock_latency_probe::{
    app::App,
    cli::Cli,
    error::AppError,
    PKG_NAME, VERSION,
};
use clap::Parser;
use colored::Colorize;
use std::process;

#[tokio::main]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();
    let use_colors = cli.use_colors();

    // Reject conflicting flags before any work happens
    if let Err(message) = cli.validate() {
        print_error_line(&message, use_colors);
        process::exit(1);
    }

    if cli.debug {
        eprintln!("{} v{} (built {})", PKG_NAME, VERSION, env!("BUILD_TIME"));
        if let Some(commit) = option_env!("GIT_COMMIT") {
            eprintln!("Commit: {}", commit);
        }
        eprintln!("Debug mode enabled");
    }

    let debug = cli.debug;
    if let Err(e) = App::new(cli).run().await {
        print_error_line(&e.to_string(), use_colors);

        if debug {
            eprintln!("{}", e.format_for_console(use_colors));
        }

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(1);
    }
}

/// Print the top-level error line, matching the probe's report styling
fn print_error_line(message: &str, use_colors: bool) {
    if use_colors {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {}", message);
    }
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - Endpoint URLs must start with http:// or https://");
            eprintln!("  - Iteration and token counts must be greater than 0");
        }
        AppError::ClientInit(_) => {
            eprintln!();
            eprintln!("Client setup help:");
            eprintln!("  - Set AWS_BEARER_TOKEN_BEDROCK in the environment or a .env file");
            eprintln!("  - With --profile <name>, set AWS_BEARER_TOKEN_BEDROCK_<NAME> instead");
            eprintln!("  - Verify the region or --endpoint-url value");
        }
        AppError::Invocation(_) => {
            eprintln!();
            eprintln!("Invocation troubleshooting:");
            eprintln!("  - Check your internet connection");
            eprintln!("  - Verify the model ID and that your account has access to it");
            eprintln!("  - Confirm the model is available in the configured region");
        }
        AppError::Parse(_) => {
            eprintln!();
            eprintln!("Response parsing help:");
            eprintln!("  - The model may have returned an unexpected response shape");
            eprintln!("  - Re-run with --debug to inspect the failure");
        }
        _ => {}
    }
}
