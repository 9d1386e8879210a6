use std::sync::Arc;

use async_trait::async_trait;

use super::currencies_model::Currency;
use super::currencies_traits::{CurrenciesRepositoryTrait, CurrenciesServiceTrait};
use crate::errors::{Error, Result};

#[derive(Clone)]
pub struct CurrenciesService {
    repository: Arc<dyn CurrenciesRepositoryTrait>,
}

impl CurrenciesService {
    pub fn new(repository: Arc<dyn CurrenciesRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CurrenciesServiceTrait for CurrenciesService {
    async fn load_currencies(&self) -> Result<Vec<Currency>> {
        self.repository.load_currencies().await.map_err(|e| {
            log::error!("Failed to load currencies: {}", e);
            Error::LoadCurrencies(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cbr_converter_feed::FeedError;
    use rust_decimal_macros::dec;

    struct MockRepository {
        result: fn() -> std::result::Result<Vec<Currency>, FeedError>,
    }

    #[async_trait]
    impl CurrenciesRepositoryTrait for MockRepository {
        async fn load_currencies(&self) -> std::result::Result<Vec<Currency>, FeedError> {
            (self.result)()
        }
    }

    #[tokio::test]
    async fn test_load_currencies_happy_case() {
        let service = CurrenciesService::new(Arc::new(MockRepository {
            result: || Ok(vec![Currency::new("id", "USD", 1, "Dollar", dec!(90))]),
        }));

        let currencies = service.load_currencies().await.unwrap();
        assert_eq!(currencies.len(), 1);
        assert_eq!(currencies[0].code, "USD");
    }

    #[tokio::test]
    async fn test_load_currencies_wraps_feed_error() {
        let service = CurrenciesService::new(Arc::new(MockRepository {
            result: || Err(FeedError::Status { status: 502 }),
        }));

        let err = service.load_currencies().await.unwrap_err();
        assert!(matches!(
            err,
            Error::LoadCurrencies(FeedError::Status { status: 502 })
        ));
    }
}
