//! Probe execution engine
//!
//! Runs the staged timing passes: client initialization once, then an
//! invoke/parse pair per iteration, with a fixed pause between iterations.
//! Progress is emitted through the [`ProgressReporter`] seam so the engine
//! itself never touches the console.

use crate::{
    client::{ModelClient, CONTENT_TYPE_JSON},
    error::Result,
    models::{ProbeConfig, TimingRecord, TimingRun},
    provider::ProviderSchema,
    stats::RunSummary,
    timing::{try_time_async, try_time_sync},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Probe stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    ClientInit,
    ApiCall,
    ResponseParse,
}

impl Stage {
    /// Label used in per-iteration progress lines
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClientInit => "Client initialization",
            Self::ApiCall => "API call",
            Self::ResponseParse => "Response parsing",
        }
    }
}

/// Sink for run progress events.
///
/// The engine reports what happened; the implementation decides how (or
/// whether) to render it.
pub trait ProgressReporter {
    /// The run is about to start
    fn run_started(&mut self, config: &ProbeConfig);

    /// An iteration is about to start (zero-based index)
    fn iteration_started(&mut self, index: usize, total: usize);

    /// A stage finished with the given elapsed time
    fn stage_completed(&mut self, stage: Stage, elapsed: Duration);

    /// An iteration finished and produced a record
    fn iteration_completed(&mut self, record: &TimingRecord);

    /// The whole run finished; the summary is present for multi-iteration runs
    fn run_completed(&mut self, run: &TimingRun, summary: Option<&RunSummary>);
}

/// Executes the configured number of probe iterations against one model.
///
/// The provider schema is resolved once at construction and reused by every
/// iteration for both request building and response parsing.
pub struct ProbeRunner {
    config: ProbeConfig,
    schema: ProviderSchema,
}

impl ProbeRunner {
    /// Create a runner for the given configuration
    pub fn new(config: ProbeConfig) -> Self {
        let schema = ProviderSchema::detect(&config.model_id);
        Self { config, schema }
    }

    /// Schema the runner resolved for its model
    pub fn schema(&self) -> ProviderSchema {
        self.schema
    }

    /// Run all iterations and collect their records.
    ///
    /// The client is built by `init_client` during the first iteration (the
    /// only timed initialization) and reused afterwards. Any stage failure
    /// aborts the run immediately; no partial results survive.
    pub async fn run<C, F>(
        &self,
        init_client: F,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<TimingRun>
    where
        C: ModelClient,
        F: FnOnce() -> Result<C>,
    {
        let total = self.config.iterations as usize;
        let mut run = TimingRun::new(self.config.model_id.as_str());

        reporter.run_started(&self.config);

        // First iteration also pays for client initialization.
        reporter.iteration_started(0, total);
        let (client, init_elapsed) = try_time_sync(init_client)?;
        reporter.stage_completed(Stage::ClientInit, init_elapsed);

        let record = self
            .run_iteration(&client, Some(init_elapsed), reporter)
            .await?;
        reporter.iteration_completed(&record);
        run.add_record(record);

        for index in 1..total {
            tokio::time::sleep(self.config.iteration_delay()).await;

            reporter.iteration_started(index, total);
            let record = self.run_iteration(&client, None, reporter).await?;
            reporter.iteration_completed(&record);
            run.add_record(record);
        }

        run.complete();
        Ok(run)
    }

    /// One invoke/parse pass producing a single record
    async fn run_iteration<C: ModelClient>(
        &self,
        client: &C,
        client_init: Option<Duration>,
        reporter: &mut dyn ProgressReporter,
    ) -> Result<TimingRecord> {
        let (response, api_elapsed) = try_time_async(async {
            let body = self
                .schema
                .build_request(&self.config.prompt, self.config.max_tokens)?;
            client
                .invoke(
                    &self.config.model_id,
                    body,
                    CONTENT_TYPE_JSON,
                    CONTENT_TYPE_JSON,
                )
                .await
        })
        .await?;
        reporter.stage_completed(Stage::ApiCall, api_elapsed);

        let (output, parse_elapsed) = try_time_async(async {
            let bytes = response.into_bytes().await?;
            self.schema.parse_response(&bytes)
        })
        .await?;
        reporter.stage_completed(Stage::ResponseParse, parse_elapsed);

        Ok(TimingRecord::new(
            client_init,
            api_elapsed,
            parse_elapsed,
            output.input_tokens,
            output.output_tokens,
            output.response_length(),
        ))
    }
}
