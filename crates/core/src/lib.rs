//! CBR Converter Core - currency catalog, conversion arithmetic and state.
//!
//! This crate contains the business logic of the converter. It reads rates
//! through the feed crate's provider trait and exposes pure conversion
//! functions plus an observable state container for presentation layers.

pub mod constants;
pub mod currencies;
pub mod errors;
pub mod fx;
pub mod state;

pub use currencies::{Currency, CurrencyCatalog};
pub use fx::{ConversionEngine, Messages};
pub use state::ConverterState;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
