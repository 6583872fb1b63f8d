//! Configuration parsing from CLI arguments and environment variables

use crate::{cli::Cli, config::env::EnvManager, error::Result, models::ProbeConfig};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<ProbeConfig> {
        // Start with default configuration
        let mut config = ProbeConfig::default();

        // Load from environment file if it exists
        self.load_env_file()?;

        // Merge environment variables into config
        config.merge_from_env();

        // Override with CLI arguments
        self.apply_cli_overrides(&mut config);

        // Validate the final configuration
        config.validate()?;

        Ok(config)
    }

    /// Load .env file if it exists
    fn load_env_file(&self) -> Result<()> {
        EnvManager::load_env_file(self.cli.debug)?;

        if self.cli.debug {
            if let Some(warnings) = EnvManager::check_env_file()? {
                for warning in warnings {
                    eprintln!("Warning: {}", warning);
                }
            }
        }

        Ok(())
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut ProbeConfig) {
        config.model_id = self.cli.model.clone();
        config.prompt = self.cli.prompt.clone();
        config.max_tokens = self.cli.max_tokens;
        config.iterations = self.cli.iterations;

        // Region from the environment survives unless the flag was given.
        if let Some(region) = &self.cli.region {
            config.region = region.clone();
        }

        if self.cli.profile.is_some() {
            config.profile = self.cli.profile.clone();
        }

        if self.cli.endpoint_url.is_some() {
            config.endpoint_url = self.cli.endpoint_url.clone();
        }

        config.enable_color = self.cli.use_colors();
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;

        if config.debug {
            eprintln!(
                "Applied CLI overrides: model={}, region={}, iterations={}, max_tokens={}",
                config.model_id, config.region, config.iterations, config.max_tokens
            );
        }
    }
}

/// Convenience function to load complete configuration from CLI arguments
pub fn load_config(cli: Cli) -> Result<ProbeConfig> {
    let parser = ConfigParser::new(cli);
    parser.parse()
}

/// Display configuration summary for verbose output
pub fn display_config_summary(config: &ProbeConfig) -> String {
    let mut summary = Vec::new();

    summary.push(format!("Model: {}", config.model_id));
    summary.push(format!("Region: {}", config.region));
    summary.push(format!(
        "Profile: {}",
        config.profile.as_deref().unwrap_or("(default)")
    ));
    summary.push(format!("Max Tokens: {}", config.max_tokens));
    summary.push(format!("Iterations: {}", config.iterations));
    summary.push(format!("Endpoint: {}", config.runtime_endpoint()));
    summary.push(format!("Color Output: {}", config.enable_color));
    summary.push(format!("Verbose: {}", config.verbose));
    summary.push(format!("Debug: {}", config.debug));

    summary.join("\n")
}
