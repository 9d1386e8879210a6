use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A currency entry as published by the feed.
///
/// `value` is the price of `nominal` units of the currency in rubles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRecord {
    /// Feed identifier (e.g. "R01235")
    pub id: String,

    /// ISO 4217 numeric code
    pub num_code: i32,

    /// ISO 4217 letter code (e.g. "USD")
    pub char_code: String,

    /// Number of units the value applies to
    pub nominal: i64,

    /// Display name
    pub name: String,

    /// Value of `nominal` units in rubles
    pub value: Decimal,
}

impl CurrencyRecord {
    pub fn new(
        id: impl Into<String>,
        num_code: i32,
        char_code: impl Into<String>,
        nominal: i64,
        name: impl Into<String>,
        value: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            num_code,
            char_code: char_code.into(),
            nominal,
            name: name.into(),
            value,
        }
    }
}
