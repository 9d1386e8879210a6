use std::sync::Arc;

use cbr_converter_core::currencies::{CurrenciesService, FeedCurrenciesRepository};
use cbr_converter_core::{ConversionEngine, ConverterState, Messages};
use cbr_converter_feed::{CbrDailyProvider, CurrencyFeedProvider, XmlFileProvider};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Composition root: provider -> repository -> service -> state.
pub fn build_state(config: &Config) -> ConverterState {
    let provider: Arc<dyn CurrencyFeedProvider> = match &config.feed_file {
        Some(path) => {
            tracing::info!("Using saved feed at {}", path.display());
            Arc::new(XmlFileProvider::new(path.clone()))
        }
        None => {
            tracing::info!("Using CBR feed at {}", config.feed_url);
            Arc::new(CbrDailyProvider::with_base_url(config.feed_url.clone()))
        }
    };

    let repository = Arc::new(FeedCurrenciesRepository::new(provider));
    let currencies_service = Arc::new(CurrenciesService::new(repository));
    let engine = ConversionEngine::new(Messages::default());

    ConverterState::new(currencies_service, engine)
}
