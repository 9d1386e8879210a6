use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::CurrencyRecord;

/// One publication of the daily feed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyFeed {
    /// Date the rates are set for, when the feed states it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Publication title (e.g. "Foreign Currency Market")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Currency entries in feed order
    pub records: Vec<CurrencyRecord>,
}

impl DailyFeed {
    pub fn new(records: Vec<CurrencyRecord>) -> Self {
        Self {
            date: None,
            name: None,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
