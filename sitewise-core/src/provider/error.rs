use std::time::Duration;

use thiserror::Error;

use crate::location::LocationProfileError;

/// Errors from [`crate::provider::LocationAnalyticsProvider::fetch`] and the
/// [`crate::provider::CachedProvider`] decorator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// The upstream data source could not be reached or answered badly.
    #[error("location analytics fetch failed: {message}")]
    Fetch {
        /// Upstream failure description.
        message: String,
    },
    /// The rate limiter refused the request and no cached copy exists.
    #[error("rate limited; retry after {retry_after:?}")]
    RateLimited {
        /// Time until the limiter will admit another request.
        retry_after: Duration,
    },
    /// The query itself was malformed, such as a non-finite radius.
    #[error("invalid analytics query: {reason}")]
    InvalidQuery {
        /// What was wrong with the query.
        reason: String,
    },
    /// The provider returned a profile that failed validation.
    #[error("provider returned an invalid profile: {0}")]
    InvalidProfile(#[from] LocationProfileError),
}
