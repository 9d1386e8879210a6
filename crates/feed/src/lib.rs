//! CBR Converter Feed Crate
//!
//! This crate fetches the daily exchange-rate feed published by the Central
//! Bank of Russia and turns it into typed currency records.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  Feed Provider   |  (CBR over HTTP, local XML file)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  Raw XML models  |  (string-typed ValCurs / Valute)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! | Decoding step    |  (comma decimals -> exact Decimal)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |  CurrencyRecord  |  (typed feed record)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CurrencyFeedProvider`] - Source of a [`DailyFeed`]
//! - [`CurrencyRecord`] - One currency row from the feed
//! - [`FeedError`] - Transport, status and decoding failures
//!
//! Rates are never routed through binary floating point: the feed uses a
//! comma as fractional separator and [`parse_feed_decimal`] parses it into an
//! exact [`rust_decimal::Decimal`].

pub mod decimal;
pub mod errors;
pub mod models;
pub mod provider;

pub use decimal::parse_feed_decimal;
pub use errors::FeedError;
pub use models::{CurrencyRecord, DailyFeed};
pub use provider::cbr::CbrDailyProvider;
pub use provider::file::XmlFileProvider;
pub use provider::CurrencyFeedProvider;
