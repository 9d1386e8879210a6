//! Core error types for the converter.
//!
//! Only loading the catalog can fail. Conversion operations never return an
//! error; they answer `None` when there is nothing to display.

use cbr_converter_feed::FeedError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the converter.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load the list of currencies: {0}")]
    LoadCurrencies(#[source] FeedError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfig(String),
}

impl From<FeedError> for Error {
    fn from(err: FeedError) -> Self {
        Error::LoadCurrencies(err)
    }
}
