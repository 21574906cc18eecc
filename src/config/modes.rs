//! Listing sort and time-filter definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Listing sort orders accepted by the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Blended front-page ordering.
    Best,
    /// Currently trending posts (default).
    #[default]
    Hot,
    /// Newest first.
    New,
    /// Gaining traction.
    Rising,
    /// Highest scoring within a time window.
    Top,
    /// Most contested.
    Controversial,
}

impl SortOrder {
    /// Whether the listing endpoint honors a time filter for this sort.
    pub fn takes_time_filter(&self) -> bool {
        matches!(self, SortOrder::Top)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Best => write!(f, "best"),
            SortOrder::Hot => write!(f, "hot"),
            SortOrder::New => write!(f, "new"),
            SortOrder::Rising => write!(f, "rising"),
            SortOrder::Top => write!(f, "top"),
            SortOrder::Controversial => write!(f, "controversial"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best" => Ok(SortOrder::Best),
            "hot" => Ok(SortOrder::Hot),
            "new" => Ok(SortOrder::New),
            "rising" => Ok(SortOrder::Rising),
            "top" => Ok(SortOrder::Top),
            "controversial" => Ok(SortOrder::Controversial),
            _ => Err(format!("Unknown sort order: {}", s)),
        }
    }
}

/// Time windows for time-filtered sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFilter {
    Hour,
    Day,
    Week,
    Month,
    Year,
    All,
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeFilter::Hour => write!(f, "hour"),
            TimeFilter::Day => write!(f, "day"),
            TimeFilter::Week => write!(f, "week"),
            TimeFilter::Month => write!(f, "month"),
            TimeFilter::Year => write!(f, "year"),
            TimeFilter::All => write!(f, "all"),
        }
    }
}

impl FromStr for TimeFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hour" => Ok(TimeFilter::Hour),
            "day" => Ok(TimeFilter::Day),
            "week" => Ok(TimeFilter::Week),
            "month" => Ok(TimeFilter::Month),
            "year" => Ok(TimeFilter::Year),
            "all" => Ok(TimeFilter::All),
            _ => Err(format!("Unknown time filter: {}", s)),
        }
    }
}
