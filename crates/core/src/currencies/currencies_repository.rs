use std::sync::Arc;

use async_trait::async_trait;
use cbr_converter_feed::{CurrencyFeedProvider, FeedError};

use super::currencies_model::Currency;
use super::currencies_traits::CurrenciesRepositoryTrait;

/// Repository backed by a feed provider.
#[derive(Clone)]
pub struct FeedCurrenciesRepository {
    provider: Arc<dyn CurrencyFeedProvider>,
}

impl FeedCurrenciesRepository {
    pub fn new(provider: Arc<dyn CurrencyFeedProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CurrenciesRepositoryTrait for FeedCurrenciesRepository {
    async fn load_currencies(&self) -> Result<Vec<Currency>, FeedError> {
        let feed = self.provider.fetch().await?;
        log::debug!(
            "Provider {} returned {} currencies",
            self.provider.id(),
            feed.len()
        );
        Ok(feed.records.into_iter().map(Currency::from).collect())
    }
}
