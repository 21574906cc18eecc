//! OAuth client-credentials authentication.

use crate::api::client::ClientSettings;
use crate::api::types::TokenResponse;
use crate::error::{Error, Result};
use url::Url;

/// Reddit application credentials.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

/// An OAuth bearer token.
#[derive(Clone)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: String) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BearerToken(<redacted>)")
    }
}

/// Exchange application credentials for a bearer token.
pub async fn exchange_credentials(
    http: &reqwest::Client,
    settings: &ClientSettings,
    credentials: &Credentials,
) -> Result<BearerToken> {
    let url = Url::parse(&settings.auth_base)?.join("api/v1/access_token")?;

    tracing::debug!("Requesting access token from {}", url);

    let response = http
        .post(url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::Authentication(format!("Token request failed: {}", e)))?;

    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| Error::Authentication(format!("Failed to read token response: {}", e)))?;

    if !status.is_success() {
        return Err(Error::Authentication(format!(
            "HTTP {}: {}",
            status,
            text.get(..500).unwrap_or(&text)
        )));
    }

    let token: TokenResponse = serde_json::from_str(&text).map_err(|e| {
        Error::Authentication(format!(
            "Failed to parse token response: {} - Response: {}",
            e,
            text.get(..500).unwrap_or(&text)
        ))
    })?;

    if let Some(error) = token.error {
        return Err(Error::Authentication(error));
    }

    match token.access_token {
        Some(access_token) if !access_token.is_empty() => {
            tracing::debug!("Access token obtained");
            Ok(BearerToken::new(access_token))
        }
        _ => Err(Error::Authentication(
            "Token response contained no access token".to_string(),
        )),
    }
}
