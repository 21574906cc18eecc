//! Configuration structures and loading logic.

use crate::config::modes::{SortOrder, TimeFilter};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub credentials: CredentialsConfig,

    #[serde(default)]
    pub query: QueryConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Reddit application credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Script-app client ID.
    #[serde(default)]
    pub client_id: String,

    /// Script-app client secret.
    #[serde(default)]
    pub client_secret: String,

    /// Descriptive User-Agent sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// What to aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Subreddit to list, without the `r/` prefix.
    #[serde(default)]
    pub source: String,

    /// Listing sort order.
    #[serde(default)]
    pub sort: SortOrder,

    /// Time window, honored for the `top` sort.
    #[serde(default)]
    pub time_filter: Option<TimeFilter>,

    /// Number of media posts to collect (1-100).
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Run behavior options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// List non-media posts after the media results.
    #[serde(default)]
    pub show_non_media: bool,

    /// Never prompt; a stalled run simply stops.
    #[serde(default)]
    pub non_interactive: bool,

    /// Suppress the banner and live status line.
    #[serde(default)]
    pub quiet: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

fn default_user_agent() -> String {
    format!("reddit-gallery/{} (paginated media aggregator)", env!("CARGO_PKG_VERSION"))
}

fn default_limit() -> u32 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            source: String::new(),
            sort: SortOrder::default(),
            time_filter: None,
            limit: default_limit(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            show_non_media: false,
            non_interactive: false,
            quiet: false,
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_applied_to_minimal_config() {
        let config: Config = toml::from_str(
            r#"
            [credentials]
            client_id = "abc"
            client_secret = "def"

            [query]
            source = "pics"
            "#,
        )
        .unwrap();

        assert_eq!(config.query.source, "pics");
        assert_eq!(config.query.sort, SortOrder::Hot);
        assert_eq!(config.query.time_filter, None);
        assert_eq!(config.query.limit, 10);
        assert!(!config.options.show_non_media);
        assert_eq!(config.options.request_timeout_seconds, 30);
        assert!(config.credentials.user_agent.starts_with("reddit-gallery/"));
    }

    #[test]
    fn test_sort_and_time_filter_parse_lowercase() {
        let config: Config = toml::from_str(
            r#"
            [query]
            source = "earthpics"
            sort = "top"
            time_filter = "week"
            limit = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.query.sort, SortOrder::Top);
        assert_eq!(config.query.time_filter, Some(TimeFilter::Week));
        assert_eq!(config.query.limit, 25);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.credentials.client_id = "my-id".to_string();
        config.credentials.client_secret = "my-secret".to_string();
        config.query.source = "analog".to_string();
        config.query.sort = SortOrder::New;
        config.query.limit = 3;

        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();

        assert_eq!(loaded.credentials.client_id, "my-id");
        assert_eq!(loaded.query.source, "analog");
        assert_eq!(loaded.query.sort, SortOrder::New);
        assert_eq!(loaded.query.limit, 3);
    }

    #[test]
    fn test_missing_file_mentions_example() {
        let err = Config::load(Path::new("does-not-exist.toml")).unwrap_err();
        assert!(err.to_string().contains("config.example.toml"));
    }
}
