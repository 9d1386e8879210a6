//! Currencies module - the catalog model and the loading pipeline.

mod catalog;
mod currencies_model;
mod currencies_repository;
mod currencies_service;
mod currencies_traits;

pub use catalog::CurrencyCatalog;
pub use currencies_model::Currency;
pub use currencies_repository::FeedCurrenciesRepository;
pub use currencies_service::CurrenciesService;
pub use currencies_traits::{CurrenciesRepositoryTrait, CurrenciesServiceTrait};
