//! Feed provider trait definition.

use async_trait::async_trait;

use crate::errors::FeedError;
use crate::models::DailyFeed;

/// Source of the daily exchange-rate feed.
///
/// A fetch is a one-shot call: implementations do not retry, cache, or
/// apply their own timeouts. Callers surface a failure as a single error.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use cbr_converter_feed::{CurrencyFeedProvider, DailyFeed, FeedError};
///
/// struct FixedProvider(DailyFeed);
///
/// #[async_trait]
/// impl CurrencyFeedProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch(&self) -> Result<DailyFeed, FeedError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait CurrencyFeedProvider: Send + Sync {
    /// Unique identifier for this provider, used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the current publication of the feed.
    ///
    /// Records are returned in feed order with their rates already decoded
    /// into exact decimals.
    async fn fetch(&self) -> Result<DailyFeed, FeedError>;
}
