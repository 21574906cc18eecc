//! End-to-end aggregation runs.

use crate::aggregate::paginator::{paginate, PaginatorSettings};
use crate::aggregate::sink::{StallHandler, StatusSink};
use crate::aggregate::state::{Aggregation, Termination};
use crate::api::auth::Credentials;
use crate::api::client::RedditClient;
use crate::config::loader::QueryConfig;

/// Authenticate and walk the listing, reporting progress on the sink.
///
/// Failures are reported through the sink and folded into the returned
/// [`Aggregation`] rather than surfaced as errors.
pub async fn run_aggregation(
    client: &RedditClient,
    credentials: &Credentials,
    query: &QueryConfig,
    sink: &dyn StatusSink,
    stall: &dyn StallHandler,
) -> Aggregation {
    let token = match client.authenticate(credentials, sink).await {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!("Authentication failed: {}", e);
            return Aggregation::empty(Termination::AuthFailed);
        }
    };

    let settings = PaginatorSettings::for_limit(query.limit);
    tracing::debug!(
        "Walking r/{} ({} sort, page size {}, budget {})",
        query.source,
        query.sort,
        settings.page_size,
        settings.request_budget
    );

    let aggregation = paginate(client, &token, query, &settings, sink, stall).await;

    sink.status(
        &format!(
            "Collected {}/{} media posts in {} requests ({})",
            aggregation.media.len(),
            query.limit,
            aggregation.requests_issued,
            aggregation.termination
        ),
        aggregation.termination.is_error(),
    );

    aggregation
}
