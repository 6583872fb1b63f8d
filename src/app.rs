//! Main application orchestration and execution

use crate::{
    cli::Cli,
    client::BedrockRuntimeClient,
    config::{display_config_summary, load_config, EnvManager},
    error::Result,
    logging::Logger,
    output::ConsoleReporter,
    runner::{ProbeRunner, ProgressReporter},
    stats::RunSummary,
};

/// Main application struct that coordinates all components
pub struct App {
    cli: Cli,
}

impl App {
    /// Create a new application instance with CLI configuration
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the probe end to end
    pub async fn run(self) -> Result<()> {
        // Load and validate configuration
        let config = load_config(self.cli)?;
        let logger = Logger::with_config("app", &config);

        if config.verbose {
            eprintln!("Configuration:\n{}\n", display_config_summary(&config));
        }

        if config.debug {
            for warning in EnvManager::validate_current_env() {
                logger.warn(&warning).emit();
            }
        }

        // The provider schema is fixed for the whole run.
        let runner = ProbeRunner::new(config.clone());
        logger
            .debug("Resolved invocation target")
            .field("schema", runner.schema().name())
            .field("endpoint", config.runtime_endpoint())
            .field("iterations", config.iterations)
            .emit();

        let mut reporter = ConsoleReporter::from_config(&config);
        let client_config = config.clone();
        let run = runner
            .run(
                move || BedrockRuntimeClient::connect(&client_config),
                &mut reporter,
            )
            .await?;

        // Summary statistics only make sense for repeated measurements.
        let summary = if config.iterations > 1 {
            RunSummary::from_run(&run)
        } else {
            None
        };
        reporter.run_completed(&run, summary.as_ref());

        logger
            .info("Probe run finished")
            .field("records", run.iterations())
            .emit();

        Ok(())
    }
}
