//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, SortOrder, TimeFilter};

/// Subreddit media aggregator CLI.
#[derive(Parser, Debug)]
#[command(
    name = "reddit-gallery",
    version,
    about = "Collect media posts from a subreddit listing",
    long_about = "A CLI tool to collect directly viewable media posts from a subreddit.\n\n\
                  Walks the listing page by page until enough media is found or the\n\
                  request budget runs out."
)]
pub struct Args {
    /// Subreddit to aggregate from (with or without the r/ prefix).
    #[arg(short, long)]
    pub source: Option<String>,

    /// Listing sort order.
    #[arg(long, value_enum)]
    pub sort: Option<SortOrderArg>,

    /// Time window for the top sort.
    #[arg(short = 't', long = "time", value_enum)]
    pub time_filter: Option<TimeFilterArg>,

    /// Number of media posts to collect.
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Reddit application client ID.
    #[arg(long, env = "REDDIT_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Reddit application client secret.
    #[arg(long, env = "REDDIT_CLIENT_SECRET")]
    pub client_secret: Option<String>,

    /// User agent sent with every request.
    #[arg(short = 'a', long = "user-agent", env = "REDDIT_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// List the non-media posts that were passed over.
    #[arg(long)]
    pub show_non_media: bool,

    /// Never prompt; stalled runs stop on their own.
    #[arg(long)]
    pub non_interactive: bool,

    /// Hide banner, summary, and progress output.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI sort order argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortOrderArg {
    Best,
    Hot,
    New,
    Rising,
    Top,
    Controversial,
}

impl From<SortOrderArg> for SortOrder {
    fn from(arg: SortOrderArg) -> Self {
        match arg {
            SortOrderArg::Best => SortOrder::Best,
            SortOrderArg::Hot => SortOrder::Hot,
            SortOrderArg::New => SortOrder::New,
            SortOrderArg::Rising => SortOrder::Rising,
            SortOrderArg::Top => SortOrder::Top,
            SortOrderArg::Controversial => SortOrder::Controversial,
        }
    }
}

/// CLI time filter argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TimeFilterArg {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl From<TimeFilterArg> for TimeFilter {
    fn from(arg: TimeFilterArg) -> Self {
        match arg {
            TimeFilterArg::Hour => TimeFilter::Hour,
            TimeFilterArg::Day => TimeFilter::Day,
            TimeFilterArg::Week => TimeFilter::Week,
            TimeFilterArg::Month => TimeFilter::Month,
            TimeFilterArg::Year => TimeFilter::Year,
            TimeFilterArg::All => TimeFilter::All,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        // Override credentials if provided
        if let Some(client_id) = self.client_id {
            config.credentials.client_id = client_id;
        }

        if let Some(client_secret) = self.client_secret {
            config.credentials.client_secret = client_secret;
        }

        if let Some(user_agent) = self.user_agent {
            config.credentials.user_agent = user_agent;
        }

        // Override query settings if provided
        if let Some(source) = self.source {
            config.query.source = source;
        }

        if let Some(sort) = self.sort {
            config.query.sort = sort.into();
        }

        if let Some(filter) = self.time_filter {
            config.query.time_filter = Some(filter.into());
        }

        if let Some(limit) = self.limit {
            config.query.limit = limit;
        }

        // Boolean flags (only override if set to non-default)
        if self.show_non_media {
            config.options.show_non_media = true;
        }

        if self.non_interactive {
            config.options.non_interactive = true;
        }

        if self.quiet {
            config.options.quiet = true;
        }
    }
}
