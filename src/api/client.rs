//! HTTP client for the Reddit API.

use crate::aggregate::sink::StatusSink;
use crate::api::auth::{exchange_credentials, BearerToken, Credentials};
use crate::api::types::{ListingEnvelope, ListingPage};
use crate::config::modes::{SortOrder, TimeFilter};
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

/// OAuth API endpoint used for authenticated requests.
pub const API_BASE: &str = "https://oauth.reddit.com";

/// Endpoint used for the token exchange.
pub const AUTH_BASE: &str = "https://www.reddit.com";

/// Default timeout for individual HTTP requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for [`RedditClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub api_base: String,
    pub auth_base: String,
    pub user_agent: String,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            auth_base: AUTH_BASE.to_string(),
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Parameters for a single listing page fetch.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub source: String,
    pub sort: SortOrder,
    pub time_filter: Option<TimeFilter>,
    pub page_size: u32,
    pub after: Option<String>,
}

/// Anything that can serve pages of a listing.
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_page(&self, token: &BearerToken, request: &PageRequest) -> Result<ListingPage>;
}

/// Authenticated Reddit API client.
pub struct RedditClient {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl RedditClient {
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&settings.user_agent)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, settings })
    }

    /// Exchange credentials for a bearer token, reporting progress on the sink.
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
        sink: &dyn StatusSink,
    ) -> Result<BearerToken> {
        sink.status("Authenticating with Reddit...", false);

        match exchange_credentials(&self.http, &self.settings, credentials).await {
            Ok(token) => {
                sink.status("Authenticated", false);
                Ok(token)
            }
            Err(e) => {
                sink.status(&e.to_string(), true);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl ListingSource for RedditClient {
    async fn fetch_page(&self, token: &BearerToken, request: &PageRequest) -> Result<ListingPage> {
        let url = Url::parse(&self.settings.api_base)?
            .join(&format!("r/{}/{}", request.source, request.sort))?;

        let mut params: Vec<(&str, String)> = vec![
            ("limit", request.page_size.to_string()),
            ("raw_json", "1".to_string()),
        ];
        if let Some(after) = &request.after {
            params.push(("after", after.clone()));
        }
        if let Some(filter) = request.time_filter {
            params.push(("t", filter.to_string()));
        }

        tracing::debug!("Fetching {} with {:?}", url, params);

        let response = self
            .http
            .get(url)
            .bearer_auth(token.as_str())
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::Fetch(format!("Listing request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Fetch(format!("Failed to read listing response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "HTTP {}: {}",
                status,
                text.get(..500).unwrap_or(&text)
            )));
        }

        let envelope: ListingEnvelope = serde_json::from_str(&text).map_err(|e| {
            Error::Fetch(format!(
                "Failed to parse listing: {} - Response: {}",
                e,
                text.get(..500).unwrap_or(&text)
            ))
        })?;

        if let Some(error) = envelope.error {
            let message = envelope
                .message
                .or_else(|| error.as_str().map(String::from))
                .unwrap_or_else(|| error.to_string());
            return Err(Error::Fetch(message));
        }

        let data = envelope.data.unwrap_or_default();

        Ok(ListingPage {
            posts: data.children.into_iter().map(|child| child.data).collect(),
            after: data.after,
        })
    }
}
