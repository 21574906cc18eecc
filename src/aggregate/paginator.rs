//! Cursor-driven pagination over a listing.

use crate::aggregate::sink::{StallHandler, StatusSink};
use crate::aggregate::state::{Aggregation, RunState, Termination};
use crate::api::auth::BearerToken;
use crate::api::client::{ListingSource, PageRequest};
use crate::config::loader::QueryConfig;
use crate::media::classifier::classify;
use crate::media::item::Classified;
use std::time::Duration;

/// Maximum page size the listing endpoint accepts.
const MAX_PAGE_SIZE: u32 = 100;

/// Extra posts requested per page beyond the target count.
const PAGE_SIZE_MARGIN: u32 = 5;

/// Fewest requests any run may issue.
const MIN_REQUEST_BUDGET: u32 = 3;

/// Fruitless requests before asking whether to keep going.
pub const STALL_AFTER_ATTEMPTS: u32 = 3;

/// Pause between successive page requests.
const REQUEST_DELAY: Duration = Duration::from_millis(1000);

/// Tuning knobs for a pagination run.
#[derive(Debug, Clone)]
pub struct PaginatorSettings {
    pub page_size: u32,
    pub request_budget: u32,
    pub request_delay: Duration,
}

impl PaginatorSettings {
    /// Derive page size and request budget from the requested media count.
    pub fn for_limit(limit: u32) -> Self {
        Self {
            page_size: limit.saturating_add(PAGE_SIZE_MARGIN).min(MAX_PAGE_SIZE),
            request_budget: limit.saturating_mul(3).max(MIN_REQUEST_BUDGET),
            request_delay: REQUEST_DELAY,
        }
    }
}

/// Walk a listing page by page until enough media is collected.
///
/// Stops when the limit is reached, the request budget runs out, the
/// listing ends, a fetch fails, or a stalled run is abandoned. Never
/// returns an error; failures are folded into the outcome.
pub async fn paginate(
    source: &dyn ListingSource,
    token: &BearerToken,
    query: &QueryConfig,
    settings: &PaginatorSettings,
    sink: &dyn StatusSink,
    stall: &dyn StallHandler,
) -> Aggregation {
    let limit = query.limit as usize;
    let mut budget = settings.request_budget;
    let mut state = RunState::default();
    let mut stall_prompted = false;

    let time_filter = query.time_filter.filter(|_| query.sort.takes_time_filter());

    loop {
        if state.media.len() >= limit {
            return state.into_aggregation(Termination::Satisfied);
        }
        if state.requests_issued >= budget {
            return state.into_aggregation(Termination::BudgetExhausted);
        }

        let request = PageRequest {
            source: query.source.clone(),
            sort: query.sort,
            time_filter,
            page_size: settings.page_size,
            after: state.cursor.clone(),
        };

        let page = match source.fetch_page(token, &request).await {
            Ok(page) => page,
            Err(e) => {
                sink.status(&e.to_string(), true);
                return state.into_aggregation(Termination::FetchFailed);
            }
        };
        state.requests_issued += 1;

        if page.posts.is_empty() {
            return state.into_aggregation(Termination::EndOfStream);
        }

        let mut posts = page.posts.into_iter();
        for post in posts.by_ref() {
            match classify(post) {
                Classified::Media(post) => state.media.push(post),
                Classified::NonMedia(post) => state.non_media.push(post),
            }
            if state.media.len() >= limit {
                break;
            }
        }
        // Once satisfied, the rest of the page is kept as-is.
        state.non_media.extend(posts);

        if state.media.len() >= limit {
            return state.into_aggregation(Termination::Satisfied);
        }

        if !stall_prompted
            && limit == 1
            && state.media.is_empty()
            && state.requests_issued == STALL_AFTER_ATTEMPTS
        {
            stall_prompted = true;
            if stall.continue_after_stall().await {
                budget += 1;
            } else {
                sink.status(
                    &format!(
                        "No media found after {} attempts, stopping",
                        state.requests_issued
                    ),
                    false,
                );
                return state.into_aggregation(Termination::StallAborted);
            }
        }

        match page.after {
            Some(after) if !after.is_empty() => state.cursor = Some(after),
            _ => return state.into_aggregation(Termination::EndOfStream),
        }

        sink.status(&format!("{}/{} fetched", state.media.len(), limit), false);

        if state.requests_issued < budget {
            tokio::time::sleep(settings.request_delay).await;
        }
    }
}
