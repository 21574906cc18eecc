//! Reddit Gallery - media aggregation for subreddit listings
//!
//! This library collects directly viewable media posts from a subreddit,
//! walking the listing page by page until enough media is found.
//!
//! # Features
//!
//! - OAuth client-credentials authentication
//! - Cursor-driven pagination with a request budget
//! - Media classification with a preview fallback
//! - Stall recovery for fruitless runs
//! - TOML configuration with CLI and environment overrides
//!
//! # Example
//!
//! ```no_run
//! use reddit_gallery::{
//!     run_aggregation, AutoStall, ClientSettings, Credentials, NullStatusSink, QueryConfig,
//!     RedditClient, SortOrder,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RedditClient::new(ClientSettings::default())?;
//!     let credentials = Credentials {
//!         client_id: "app-id".to_string(),
//!         client_secret: "app-secret".to_string(),
//!     };
//!     let query = QueryConfig {
//!         source: "pics".to_string(),
//!         sort: SortOrder::Hot,
//!         time_filter: None,
//!         limit: 5,
//!     };
//!
//!     let result =
//!         run_aggregation(&client, &credentials, &query, &NullStatusSink, &AutoStall(false))
//!             .await;
//!     println!("collected {} media posts", result.media.len());
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use aggregate::{
    run_aggregation, Aggregation, AutoStall, NullStatusSink, StallHandler, StatusSink, Termination,
};
pub use api::{ClientSettings, Credentials, ListingSource, PageRequest, Post, RedditClient};
pub use config::{Config, QueryConfig, SortOrder, TimeFilter};
pub use error::{Error, Result};
pub use media::{classify, Classified};
