use std::sync::Arc;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::constants::ERROR_CHANNEL_CAPACITY;
use crate::currencies::{CurrenciesServiceTrait, Currency, CurrencyCatalog};
use crate::fx::{ConversionEngine, Messages};

/// State container between the converter and a presentation surface.
///
/// Presentation code observes the state through `watch` receivers (latest
/// value wins) and an error `broadcast` channel (each signal is delivered
/// once to every subscriber). Only the mutator methods below write to it.
///
/// The catalog is published as an immutable `Arc` snapshot and replaced as
/// a whole on every successful load.
#[derive(Clone)]
pub struct ConverterState {
    inner: Arc<Inner>,
}

struct Inner {
    currencies_service: Arc<dyn CurrenciesServiceTrait>,
    engine: ConversionEngine,
    reference: Currency,
    currencies: watch::Sender<Arc<CurrencyCatalog>>,
    conversion_rate: watch::Sender<Option<String>>,
    converted_text: watch::Sender<Option<String>>,
    is_loading: watch::Sender<bool>,
    errors: broadcast::Sender<String>,
}

impl ConverterState {
    pub fn new(currencies_service: Arc<dyn CurrenciesServiceTrait>, engine: ConversionEngine) -> Self {
        let reference = Currency::reference(engine.messages().reference_currency_name.clone());
        let (currencies, _) = watch::channel(Arc::new(CurrencyCatalog::empty()));
        let (conversion_rate, _) = watch::channel(None);
        let (converted_text, _) = watch::channel(None);
        let (is_loading, _) = watch::channel(false);
        let (errors, _) = broadcast::channel(ERROR_CHANNEL_CAPACITY);

        Self {
            inner: Arc::new(Inner {
                currencies_service,
                engine,
                reference,
                currencies,
                conversion_rate,
                converted_text,
                is_loading,
                errors,
            }),
        }
    }

    pub fn currencies(&self) -> watch::Receiver<Arc<CurrencyCatalog>> {
        self.inner.currencies.subscribe()
    }

    pub fn conversion_rate(&self) -> watch::Receiver<Option<String>> {
        self.inner.conversion_rate.subscribe()
    }

    pub fn converted_text(&self) -> watch::Receiver<Option<String>> {
        self.inner.converted_text.subscribe()
    }

    pub fn is_loading(&self) -> watch::Receiver<bool> {
        self.inner.is_loading.subscribe()
    }

    pub fn messages(&self) -> &Messages {
        self.inner.engine.messages()
    }

    /// Subscribes to user-facing error signals raised after this call.
    pub fn errors(&self) -> broadcast::Receiver<String> {
        self.inner.errors.subscribe()
    }

    /// The currently published catalog snapshot.
    pub fn catalog(&self) -> Arc<CurrencyCatalog> {
        self.inner.currencies.borrow().clone()
    }

    /// Starts loading the catalog on a background task.
    ///
    /// On success the fetched list, with the reference currency merged in,
    /// replaces the published catalog. On failure a single load error is
    /// signalled and the previous catalog stays. The loading flag is set
    /// before this returns and cleared when the task ends, even if the
    /// service panics.
    ///
    /// Must be called from within a tokio runtime.
    pub fn load_currencies(&self) -> JoinHandle<()> {
        self.inner.is_loading.send_replace(true);
        let inner = Arc::clone(&self.inner);

        tokio::spawn(async move {
            let _loading = LoadingGuard(&inner.is_loading);
            match inner.currencies_service.load_currencies().await {
                Ok(fetched) => {
                    let catalog = CurrencyCatalog::from_fetched(fetched, inner.reference.clone());
                    log::info!("Published catalog of {} currencies", catalog.len());
                    inner.currencies.send_replace(Arc::new(catalog));
                }
                Err(e) => {
                    log::warn!("Catalog not refreshed: {}", e);
                    inner.signal_error(inner.engine.messages().error_loading_currencies.clone());
                }
            }
        })
    }

    /// Recomputes the displayed rate. Leaves the previous value when the
    /// selection has no rate to show.
    pub fn update_conversion_rate(&self, base_index: usize, quoted_index: usize) {
        let catalog = self.catalog();
        match self
            .inner
            .engine
            .compute_rate(&catalog, base_index, quoted_index)
        {
            Some(rate) => {
                self.inner.conversion_rate.send_replace(Some(rate));
            }
            None => log::debug!(
                "No rate for selection {}/{} in a catalog of {}",
                base_index,
                quoted_index,
                catalog.len()
            ),
        }
    }

    /// Converts `amount` and publishes the text, or signals a conversion
    /// error when there is no result.
    pub fn convert(&self, base_index: usize, quoted_index: usize, amount: Option<&str>) {
        let catalog = self.catalog();
        match self
            .inner
            .engine
            .convert(&catalog, base_index, quoted_index, amount)
        {
            Some(text) => {
                self.inner.converted_text.send_replace(Some(text));
            }
            None => {
                let message = self.inner.engine.messages().conversion_error.clone();
                self.inner.signal_error(message);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn publish_catalog(&self, catalog: CurrencyCatalog) {
        self.inner.currencies.send_replace(Arc::new(catalog));
    }
}

/// Clears the loading flag when dropped.
struct LoadingGuard<'a>(&'a watch::Sender<bool>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

impl Inner {
    fn signal_error(&self, message: String) {
        // No subscriber means nobody is showing errors right now.
        let _ = self.errors.send(message);
    }
}
