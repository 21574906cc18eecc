//! Reddit API response types.

use serde::Deserialize;

/// OAuth token endpoint response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub scope: Option<String>,
    /// Set instead of a token when the credentials are rejected.
    #[serde(default)]
    pub error: Option<String>,
}

/// Top-level listing response. Error responses put a code in `error`
/// and a human-readable string in `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingEnvelope {
    pub data: Option<ListingData>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Payload of a listing response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingData {
    #[serde(default)]
    pub children: Vec<ListingChild>,
    /// Cursor for the next page. Absent or empty at the end of the listing.
    pub after: Option<String>,
}

/// Wrapper around each post in a listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingChild {
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub data: Post,
}

/// A single post from a subreddit listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Post {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub permalink: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub created_utc: f64,
    #[serde(default)]
    pub score: i64,
    pub preview: Option<Preview>,
}

/// Preview media attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Preview {
    #[serde(default)]
    pub images: Vec<PreviewImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreviewImage {
    pub source: Option<PreviewSource>,
    #[serde(default)]
    pub variants: PreviewVariants,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreviewVariants {
    pub gif: Option<PreviewVariant>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreviewVariant {
    pub source: Option<PreviewSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PreviewSource {
    pub url: Option<String>,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// One fetched page of a listing, unwrapped from the envelope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPage {
    pub posts: Vec<Post>,
    pub after: Option<String>,
}
