//! Configuration data model and validation

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main probe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Model identifier to invoke
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Prompt text sent on every iteration
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Region the runtime endpoint is derived from
    #[serde(default = "default_region")]
    pub region: String,

    /// Named credential profile (absent = ambient credentials)
    #[serde(default)]
    pub profile: Option<String>,

    /// Maximum output tokens requested per invocation
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Number of sequential probe iterations
    #[serde(default = "default_iterations")]
    pub iterations: u32,

    /// Explicit endpoint override (region-derived endpoint when absent)
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Enable colored terminal output
    #[serde(default = "default_enable_color")]
    pub enable_color: bool,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,

    /// Enable debug output
    #[serde(default)]
    pub debug: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            model_id: default_model_id(),
            prompt: default_prompt(),
            region: default_region(),
            profile: None,
            max_tokens: default_max_tokens(),
            iterations: default_iterations(),
            endpoint_url: None,
            enable_color: default_enable_color(),
            verbose: false,
            debug: false,
        }
    }
}

impl ProbeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed pause between successive iterations
    pub fn iteration_delay(&self) -> Duration {
        crate::defaults::ITERATION_DELAY
    }

    /// Resolve the runtime endpoint, honoring an explicit override
    pub fn runtime_endpoint(&self) -> String {
        match &self.endpoint_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("https://bedrock-runtime.{}.amazonaws.com", self.region),
        }
    }

    /// Merge settings from the standard AWS environment variables.
    ///
    /// CLI overrides are applied after this step and win.
    pub fn merge_from_env(&mut self) {
        if let Some(region) = first_env_value(&["AWS_REGION", "AWS_DEFAULT_REGION"]) {
            self.region = region;
        }

        if let Some(profile) = first_env_value(&["AWS_PROFILE"]) {
            self.profile = Some(profile);
        }
    }

    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Result<()> {
        if self.model_id.is_empty() {
            return Err(AppError::config("Model identifier cannot be empty"));
        }

        if self.region.is_empty() {
            return Err(AppError::config("Region cannot be empty"));
        }

        if let Some(profile) = &self.profile {
            if profile.is_empty() {
                return Err(AppError::config("Profile name cannot be empty"));
            }
        }

        if self.max_tokens == 0 {
            return Err(AppError::config("Max tokens must be greater than 0"));
        }

        if self.iterations == 0 {
            return Err(AppError::config("Iteration count must be greater than 0"));
        }

        if let Some(endpoint) = &self.endpoint_url {
            match url::Url::parse(endpoint) {
                Ok(parsed) => {
                    if parsed.scheme() != "https" && parsed.scheme() != "http" {
                        return Err(AppError::config(format!(
                            "Endpoint URL must use http or https: {}",
                            endpoint
                        )));
                    }
                }
                Err(e) => {
                    return Err(AppError::config(format!(
                        "Invalid endpoint URL '{}': {}",
                        endpoint, e
                    )));
                }
            }
        }

        Ok(())
    }
}

/// First non-empty value among the named environment variables
fn first_env_value(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        std::env::var(name)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

// Default value functions for serde
fn default_model_id() -> String {
    crate::defaults::DEFAULT_MODEL_ID.to_string()
}

fn default_prompt() -> String {
    crate::defaults::DEFAULT_PROMPT.to_string()
}

fn default_region() -> String {
    crate::defaults::DEFAULT_REGION.to_string()
}

fn default_max_tokens() -> u32 {
    crate::defaults::DEFAULT_MAX_TOKENS
}

fn default_iterations() -> u32 {
    crate::defaults::DEFAULT_ITERATIONS
}

fn default_enable_color() -> bool {
    crate::defaults::DEFAULT_ENABLE_COLOR
}
