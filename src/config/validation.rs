//! Configuration validation logic.

use crate::config::loader::{Config, CredentialsConfig};
use crate::error::{Error, Result};
use regex::Regex;

/// Minimum length for a User-Agent string.
const MIN_USER_AGENT_LENGTH: usize = 10;

/// Maximum listing limit accepted by the API.
const MAX_LIMIT: u32 = 100;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_credentials(&config.credentials)?;
    validate_source(&config.query.source)?;
    validate_limit(config.query.limit)?;

    Ok(())
}

/// Validate the application credentials.
pub fn validate_credentials(credentials: &CredentialsConfig) -> Result<()> {
    if credentials.client_id.is_empty() {
        return Err(Error::MissingConfig(
            "client_id (get this from your Reddit app at reddit.com/prefs/apps)".to_string(),
        ));
    }

    if credentials.client_secret.is_empty() {
        return Err(Error::MissingConfig("client_secret".to_string()));
    }

    // Check for placeholder values
    for (field, value) in [
        ("client_id", &credentials.client_id),
        ("client_secret", &credentials.client_secret),
    ] {
        let lower = value.to_lowercase();
        if lower.contains("replaceme") || lower.contains("your_client") {
            return Err(Error::ConfigValidation {
                field: field.to_string(),
                message: format!(
                    "'{}' appears to be a placeholder. Please provide your actual Reddit app {}.",
                    value, field
                ),
            });
        }
    }

    if credentials.user_agent.is_empty() {
        return Err(Error::MissingConfig("user_agent".to_string()));
    }

    if credentials.user_agent.len() < MIN_USER_AGENT_LENGTH {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: format!(
                "User agent must be at least {} characters (got {})",
                MIN_USER_AGENT_LENGTH,
                credentials.user_agent.len()
            ),
        });
    }

    if credentials.user_agent.to_lowercase().contains("replaceme") {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent appears to be a placeholder. Reddit asks for a descriptive one."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate the subreddit name. Expects the `r/` prefix already stripped.
pub fn validate_source(source: &str) -> Result<()> {
    if source.is_empty() {
        return Err(Error::MissingConfig(
            "source (the subreddit to aggregate from)".to_string(),
        ));
    }

    // Subreddit pattern: 3-21 chars, alphanumeric and underscores, no leading underscore
    let source_pattern = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_]{2,20}$").unwrap();

    if !source_pattern.is_match(source) {
        return Err(Error::ConfigValidation {
            field: "source".to_string(),
            message: format!(
                "'{}' is not a valid subreddit name. Use 3-21 alphanumeric/underscore characters.",
                source
            ),
        });
    }

    let lower = source.to_lowercase();
    if lower == "replaceme" || lower == "subreddit" {
        return Err(Error::ConfigValidation {
            field: "source".to_string(),
            message: format!(
                "'{}' appears to be a placeholder. Please provide an actual subreddit name.",
                source
            ),
        });
    }

    Ok(())
}

/// Validate the requested media count.
pub fn validate_limit(limit: u32) -> Result<()> {
    if limit < 1 || limit > MAX_LIMIT {
        return Err(Error::ConfigValidation {
            field: "limit".to_string(),
            message: format!("Limit must be between 1 and {} (got {})", MAX_LIMIT, limit),
        });
    }

    Ok(())
}

/// Non-fatal configuration notes surfaced before a run.
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = Vec::new();

    if let Some(filter) = config.query.time_filter {
        if !config.query.sort.takes_time_filter() {
            warnings.push(format!(
                "Time filter '{}' is ignored for sort '{}' (only 'top' uses it)",
                filter, config.query.sort
            ));
        }
    }

    warnings
}

/// Strip an optional `r/` or `/r/` prefix from a subreddit name.
pub fn parse_source(input: &str) -> String {
    let trimmed = input.trim();
    let stripped = trimmed
        .strip_prefix("/r/")
        .or_else(|| trimmed.strip_prefix("r/"))
        .unwrap_or(trimmed);

    stripped.to_string()
}
