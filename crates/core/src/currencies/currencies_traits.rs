use async_trait::async_trait;
use cbr_converter_feed::FeedError;

use super::currencies_model::Currency;
use crate::errors::Result;

/// Trait defining the contract for loading currencies from a feed.
#[async_trait]
pub trait CurrenciesRepositoryTrait: Send + Sync {
    async fn load_currencies(&self) -> std::result::Result<Vec<Currency>, FeedError>;
}

/// Trait defining the contract for the currencies service.
#[async_trait]
pub trait CurrenciesServiceTrait: Send + Sync {
    /// Loads the fetched currencies in feed order, without the reference currency.
    async fn load_currencies(&self) -> Result<Vec<Currency>>;
}
