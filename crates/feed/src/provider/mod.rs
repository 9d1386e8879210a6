//! Feed provider abstractions and implementations.
//!
//! This module contains:
//! - The `CurrencyFeedProvider` trait that all providers implement
//! - The CBR daily XML provider (`cbr`)
//! - A provider reading a saved copy of the same document (`file`)
//!
//! Both concrete providers share the XML decoding in `cbr::parse_daily_xml`,
//! so an offline file and a live response go through the same numeric rules.

mod traits;

pub mod cbr;
pub mod file;

pub use traits::CurrencyFeedProvider;
