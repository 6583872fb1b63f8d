//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load .env file if it exists
    pub fn load_env_file(debug: bool) -> Result<()> {
        // Try to load .env from current directory
        if Path::new(".env").exists() {
            dotenv::from_filename(".env")
                .map_err(|e| AppError::config(format!("Failed to load .env file: {}", e)))?;

            if debug {
                eprintln!("Loaded configuration from .env file");
            }
        } else if debug {
            eprintln!("No .env file found, using defaults and CLI arguments");
        }

        Ok(())
    }

    /// Validate environment variable format before use
    pub fn validate_env_var(key: &str, value: &str) -> Result<()> {
        match key {
            "AWS_REGION" | "AWS_DEFAULT_REGION" => {
                let region = value.trim();
                if region.is_empty() {
                    return Err(AppError::config(format!("{} cannot be empty", key)));
                }
                if region.contains(char::is_whitespace) {
                    return Err(AppError::config(format!(
                        "Invalid {} value '{}': regions cannot contain whitespace",
                        key, value
                    )));
                }
            }
            "AWS_PROFILE" => {
                if value.trim().is_empty() {
                    return Err(AppError::config("AWS_PROFILE cannot be empty"));
                }
            }
            key if key.starts_with(crate::client::credentials::BEARER_TOKEN_VAR) => {
                if value.trim().is_empty() {
                    return Err(AppError::config(format!("{} is set but empty", key)));
                }
            }
            _ => {
                // Unknown environment variable, ignore
            }
        }

        Ok(())
    }

    /// Get list of all supported environment variables with descriptions
    pub fn get_supported_env_vars() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            (
                "AWS_BEARER_TOKEN_BEDROCK",
                "Bearer token for the model runtime",
                "your-token-here",
            ),
            (
                "AWS_REGION",
                "Region hosting the model runtime",
                "us-east-1",
            ),
            (
                "AWS_DEFAULT_REGION",
                "Fallback region when AWS_REGION is unset",
                "us-east-1",
            ),
            (
                "AWS_PROFILE",
                "Credential profile to use when --profile is not given",
                "staging",
            ),
        ]
    }

    /// Validate all currently set environment variables
    pub fn validate_current_env() -> Vec<String> {
        let mut warnings = Vec::new();

        for (var_name, _, _) in Self::get_supported_env_vars() {
            if let Ok(value) = std::env::var(var_name) {
                if let Err(e) = Self::validate_env_var(var_name, &value) {
                    warnings.push(e.to_string());
                }
            }
        }

        warnings
    }

    /// Check if .env file exists and validate its contents
    pub fn check_env_file() -> Result<Option<Vec<String>>> {
        if !Path::new(".env").exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(".env")
            .map_err(|e| AppError::config(format!("Failed to read .env file: {}", e)))?;

        let mut warnings = Vec::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();

                if let Err(e) = Self::validate_env_var(key, value) {
                    warnings.push(format!("Line '{}': {}", line, e));
                }
            }
        }

        Ok(Some(warnings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_manager_validate_env_var() {
        // Valid cases
        assert!(EnvManager::validate_env_var("AWS_REGION", "us-east-1").is_ok());
        assert!(EnvManager::validate_env_var("AWS_DEFAULT_REGION", "eu-west-1").is_ok());
        assert!(EnvManager::validate_env_var("AWS_PROFILE", "staging").is_ok());
        assert!(EnvManager::validate_env_var("AWS_BEARER_TOKEN_BEDROCK", "token").is_ok());
        assert!(EnvManager::validate_env_var("AWS_BEARER_TOKEN_BEDROCK_STAGING", "token").is_ok());

        // Invalid cases
        assert!(EnvManager::validate_env_var("AWS_REGION", "").is_err());
        assert!(EnvManager::validate_env_var("AWS_REGION", "us east 1").is_err());
        assert!(EnvManager::validate_env_var("AWS_PROFILE", "   ").is_err());
        assert!(EnvManager::validate_env_var("AWS_BEARER_TOKEN_BEDROCK", "  ").is_err());

        // Unknown variables pass through
        assert!(EnvManager::validate_env_var("UNRELATED_VAR", "anything").is_ok());
    }

    #[test]
    fn test_get_supported_env_vars() {
        let vars = EnvManager::get_supported_env_vars();

        assert_eq!(vars.len(), 4);
        assert!(vars
            .iter()
            .any(|(name, _, _)| *name == "AWS_BEARER_TOKEN_BEDROCK"));
        assert!(vars.iter().any(|(name, _, _)| *name == "AWS_REGION"));
        assert!(vars.iter().any(|(name, _, _)| *name == "AWS_PROFILE"));
    }
}
