//! Provider-specific request and response schemas
//!
//! Bedrock-style runtimes share one invoke endpoint but expect different
//! request body layouts per model family. The schema is resolved once per
//! run from the model identifier and then consulted by both request
//! construction and response parsing, so the two sides can never disagree
//! mid-run.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ErrorContext, Result};

/// Version pin required by Anthropic models behind the runtime API
const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Sampling temperature the probe sends to Titan models
const TITAN_TEMPERATURE: f64 = 0.7;

/// Request/response layout family for a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderSchema {
    /// Chat-message layout used by Claude models
    AnthropicMessages,
    /// Single-text-field layout used by Titan models
    TitanText,
    /// Fallback layout for unrecognized model families
    Generic,
}

impl ProviderSchema {
    /// Resolve the schema for a model identifier.
    ///
    /// Matching is a case-sensitive substring check with Claude taking
    /// precedence over Titan; anything unrecognized falls back to the
    /// generic layout.
    pub fn detect(model_id: &str) -> Self {
        if model_id.contains("claude") {
            Self::AnthropicMessages
        } else if model_id.contains("titan") {
            Self::TitanText
        } else {
            Self::Generic
        }
    }

    /// Human-readable schema name
    pub fn name(&self) -> &'static str {
        match self {
            Self::AnthropicMessages => "anthropic-messages",
            Self::TitanText => "titan-text",
            Self::Generic => "generic",
        }
    }

    /// Build the JSON request body for one invocation
    pub fn build_request(&self, prompt: &str, max_tokens: u32) -> Result<Vec<u8>> {
        let body = match self {
            Self::AnthropicMessages => serde_json::to_vec(&MessagesRequest {
                anthropic_version: ANTHROPIC_VERSION,
                max_tokens,
                messages: vec![Message {
                    role: "user",
                    content: prompt,
                }],
            }),
            Self::TitanText => serde_json::to_vec(&TitanRequest {
                input_text: prompt,
                generation_config: TitanGenerationConfig {
                    max_token_count: max_tokens,
                    temperature: TITAN_TEMPERATURE,
                },
            }),
            Self::Generic => serde_json::to_vec(&GenericRequest {
                prompt,
                max_tokens,
            }),
        };

        body.with_context(|| format!("Failed to encode {} request body", self.name()))
    }

    /// Extract generated text and token counts from a response body.
    ///
    /// Extraction is look-up-and-default: fields missing from an otherwise
    /// well-formed body yield an empty string or zero. Only an undecodable
    /// body is an error.
    pub fn parse_response(&self, bytes: &[u8]) -> Result<ModelOutput> {
        let body: Value = serde_json::from_slice(bytes)?;

        let output = match self {
            Self::AnthropicMessages => ModelOutput {
                content: body
                    .get("content")
                    .and_then(|c| c.get(0))
                    .and_then(|block| block.get("text"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                input_tokens: body
                    .get("usage")
                    .and_then(|u| u.get("input_tokens"))
                    .and_then(Value::as_u64)
                    .unwrap_or(0),
                output_tokens: body
                    .get("usage")
                    .and_then(|u| u.get("output_tokens"))
                    .and_then(Value::as_u64)
                    .unwrap_or(0),
            },
            Self::TitanText => ModelOutput {
                content: body
                    .get("results")
                    .and_then(|r| r.get(0))
                    .and_then(|result| result.get("outputText"))
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                input_tokens: body
                    .get("inputTextTokenCount")
                    .and_then(Value::as_u64)
                    .unwrap_or(0),
                output_tokens: body
                    .get("results")
                    .and_then(|r| r.get(0))
                    .and_then(|result| result.get("tokenCount"))
                    .and_then(Value::as_u64)
                    .unwrap_or(0),
            },
            // No known layout: surface the raw body so the operator can see
            // what came back, with no token accounting.
            Self::Generic => ModelOutput {
                content: body.to_string(),
                input_tokens: 0,
                output_tokens: 0,
            },
        };

        Ok(output)
    }
}

impl std::fmt::Display for ProviderSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed model output for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOutput {
    /// Generated text (empty when the body carried none)
    pub content: String,

    /// Input token count reported by the service
    pub input_tokens: u64,

    /// Output token count reported by the service
    pub output_tokens: u64,
}

impl ModelOutput {
    /// Length of the generated text in characters
    pub fn response_length(&self) -> usize {
        self.content.chars().count()
    }
}

/// Chat-message request body (Claude models)
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    anthropic_version: &'static str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

/// Single-text-field request body (Titan models)
#[derive(Debug, Serialize)]
struct TitanRequest<'a> {
    #[serde(rename = "inputText")]
    input_text: &'a str,
    #[serde(rename = "textGenerationConfig")]
    generation_config: TitanGenerationConfig,
}

#[derive(Debug, Serialize)]
struct TitanGenerationConfig {
    #[serde(rename = "maxTokenCount")]
    max_token_count: u32,
    temperature: f64,
}

/// Fallback request body for unrecognized model families
#[derive(Debug, Serialize)]
struct GenericRequest<'a> {
    prompt: &'a str,
    max_tokens: u32,
}
