//! Command-line interface module

use clap::Parser;

/// Bedrock Latency Probe - times the stages of a model invocation call
#[derive(Parser, Debug, Clone)]
#[command(name = "blp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Model ID to invoke
    #[arg(long, default_value = crate::defaults::DEFAULT_MODEL_ID)]
    pub model: String,

    /// Prompt to send
    #[arg(long, default_value = crate::defaults::DEFAULT_PROMPT)]
    pub prompt: String,

    /// Region hosting the model runtime [default: us-east-1]
    #[arg(long)]
    pub region: Option<String>,

    /// Credential profile to resolve the bearer token from
    #[arg(long)]
    pub profile: Option<String>,

    /// Maximum tokens to generate
    #[arg(long, value_parser = parse_positive_u32, default_value_t = crate::defaults::DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Number of iterations to run
    #[arg(short, long, value_parser = parse_positive_u32, default_value_t = crate::defaults::DEFAULT_ITERATIONS)]
    pub iterations: u32,

    /// Override the model runtime endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Force colored output
    #[arg(long)]
    pub color: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Validate CLI arguments for conflicts
    pub fn validate(&self) -> Result<(), String> {
        if self.color && self.no_color {
            return Err("Cannot specify both --color and --no-color".to_string());
        }

        Ok(())
    }

    /// Check if colors should be enabled
    pub fn use_colors(&self) -> bool {
        if self.color {
            true
        } else if self.no_color {
            false
        } else {
            supports_color()
        }
    }
}

/// Parse a strictly positive integer argument
fn parse_positive_u32(s: &str) -> Result<u32, String> {
    // Reject strings with leading + sign or hex prefixes
    if s.starts_with('+') || s.starts_with("0x") || s.starts_with("0X") {
        return Err(format!("Invalid value: {}", s));
    }

    s.parse::<u32>()
        .map_err(|_| format!("Invalid value: {}", s))
        .and_then(|value| {
            if value == 0 {
                Err("Value must be greater than 0".to_string())
            } else {
                Ok(value)
            }
        })
}

/// Check if the terminal supports color output
fn supports_color() -> bool {
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // On Windows, check for ANSICON or ConEmu
    #[cfg(target_os = "windows")]
    {
        if std::env::var("ANSICON").is_ok() || std::env::var("ConEmuANSI").is_ok() {
            return true;
        }
    }

    // Default to true on Unix-like systems, false on Windows
    #[cfg(unix)]
    {
        true
    }
    #[cfg(not(unix))]
    {
        false
    }
}
