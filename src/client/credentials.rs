//! Bearer-token credential resolution
//!
//! The probe authenticates with a long-lived bearer token taken from the
//! environment. Tokens can be placed in the process environment directly or
//! loaded from a `.env` file before the client connects; nothing else about
//! the run is configured through environment variables.

use crate::error::{AppError, Result};

/// Environment variable carrying the runtime bearer token
pub const BEARER_TOKEN_VAR: &str = "AWS_BEARER_TOKEN_BEDROCK";

/// Environment variable name for a profile-scoped bearer token
pub fn profile_token_var(profile: &str) -> String {
    format!(
        "{}_{}",
        BEARER_TOKEN_VAR,
        profile.to_uppercase().replace('-', "_")
    )
}

/// Resolve the bearer token for the given profile.
///
/// A named profile is looked up through its scoped variable first and falls
/// back to the unscoped one; without a profile only the unscoped variable is
/// consulted. Values are trimmed, and empty values count as unset.
pub fn resolve_bearer_token(profile: Option<&str>) -> Result<String> {
    let mut candidates = Vec::new();
    if let Some(profile) = profile {
        candidates.push(profile_token_var(profile));
    }
    candidates.push(BEARER_TOKEN_VAR.to_string());

    for var_name in &candidates {
        if let Ok(value) = std::env::var(var_name) {
            let value = value.trim();
            if !value.is_empty() {
                return Ok(value.to_string());
            }
        }
    }

    Err(AppError::client_init(format!(
        "No bearer token found (checked {})",
        candidates.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests in this module mutate process-wide variables and therefore
    // serialize on one lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_vars(profile_var: Option<&str>) {
        std::env::remove_var(BEARER_TOKEN_VAR);
        if let Some(var) = profile_var {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_profile_token_var_naming() {
        assert_eq!(
            profile_token_var("dev"),
            "AWS_BEARER_TOKEN_BEDROCK_DEV"
        );
        assert_eq!(
            profile_token_var("team-staging"),
            "AWS_BEARER_TOKEN_BEDROCK_TEAM_STAGING"
        );
    }

    #[test]
    fn test_resolve_without_profile() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_vars(None);

        std::env::set_var(BEARER_TOKEN_VAR, "  token-abc  ");
        let token = resolve_bearer_token(None).unwrap();
        assert_eq!(token, "token-abc");

        clear_vars(None);
    }

    #[test]
    fn test_resolve_prefers_profile_variable() {
        let _guard = ENV_LOCK.lock().unwrap();
        let profile_var = profile_token_var("dev");
        clear_vars(Some(&profile_var));

        std::env::set_var(BEARER_TOKEN_VAR, "base-token");
        std::env::set_var(&profile_var, "dev-token");

        let token = resolve_bearer_token(Some("dev")).unwrap();
        assert_eq!(token, "dev-token");

        clear_vars(Some(&profile_var));
    }

    #[test]
    fn test_resolve_profile_falls_back_to_base() {
        let _guard = ENV_LOCK.lock().unwrap();
        let profile_var = profile_token_var("dev");
        clear_vars(Some(&profile_var));

        std::env::set_var(BEARER_TOKEN_VAR, "base-token");
        let token = resolve_bearer_token(Some("dev")).unwrap();
        assert_eq!(token, "base-token");

        clear_vars(Some(&profile_var));
    }

    #[test]
    fn test_resolve_missing_token_is_init_error() {
        let _guard = ENV_LOCK.lock().unwrap();
        let profile_var = profile_token_var("ghost");
        clear_vars(Some(&profile_var));

        let error = resolve_bearer_token(Some("ghost")).unwrap_err();
        assert_eq!(error.category(), "INIT");
        assert!(error.to_string().contains("AWS_BEARER_TOKEN_BEDROCK_GHOST"));
    }

    #[test]
    fn test_empty_value_counts_as_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_vars(None);

        std::env::set_var(BEARER_TOKEN_VAR, "   ");
        assert!(resolve_bearer_token(None).is_err());

        clear_vars(None);
    }
}
