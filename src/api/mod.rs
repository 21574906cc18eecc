//! Reddit API integration.
//!
//! Handles OAuth authentication and paginated listing fetches.

pub mod auth;
pub mod client;
pub mod types;

pub use auth::{exchange_credentials, BearerToken, Credentials};
pub use client::{ClientSettings, ListingSource, PageRequest, RedditClient};
pub use types::{
    ListingChild, ListingData, ListingEnvelope, ListingPage, Post, Preview, PreviewImage,
    PreviewSource, PreviewVariant, PreviewVariants, TokenResponse,
};
