//! Accumulated state and results of an aggregation run.

use crate::api::types::Post;

/// Why an aggregation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The requested number of media posts was collected.
    Satisfied,
    /// The request budget ran out first.
    BudgetExhausted,
    /// The listing had no more pages.
    EndOfStream,
    /// The run stalled and the user chose not to continue.
    StallAborted,
    /// A page fetch failed.
    FetchFailed,
    /// The token exchange failed.
    AuthFailed,
}

impl Termination {
    pub fn is_error(&self) -> bool {
        matches!(self, Termination::FetchFailed | Termination::AuthFailed)
    }
}

impl std::fmt::Display for Termination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Termination::Satisfied => "satisfied",
            Termination::BudgetExhausted => "budget exhausted",
            Termination::EndOfStream => "end of stream",
            Termination::StallAborted => "stalled",
            Termination::FetchFailed => "fetch failed",
            Termination::AuthFailed => "authentication failed",
        };
        write!(f, "{}", label)
    }
}

/// Mutable state carried across pagination iterations.
#[derive(Debug, Default)]
pub struct RunState {
    pub media: Vec<Post>,
    pub non_media: Vec<Post>,
    pub cursor: Option<String>,
    pub requests_issued: u32,
}

impl RunState {
    pub fn into_aggregation(self, termination: Termination) -> Aggregation {
        Aggregation {
            media: self.media,
            non_media: self.non_media,
            requests_issued: self.requests_issued,
            termination,
        }
    }
}

/// Final outcome of an aggregation run.
#[derive(Debug)]
pub struct Aggregation {
    pub media: Vec<Post>,
    pub non_media: Vec<Post>,
    pub requests_issued: u32,
    pub termination: Termination,
}

impl Aggregation {
    /// An outcome with nothing collected, for runs that end before fetching.
    pub fn empty(termination: Termination) -> Self {
        Self {
            media: Vec::new(),
            non_media: Vec::new(),
            requests_issued: 0,
            termination,
        }
    }
}
