//! Typed feed models.
//!
//! - `record` - One currency row of the daily feed ([`CurrencyRecord`])
//! - `daily` - The whole publication with its date ([`DailyFeed`])

mod daily;
mod record;

pub use daily::DailyFeed;
pub use record::CurrencyRecord;
