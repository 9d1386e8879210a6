//! CBR daily XML document models.
//!
//! The document looks like:
//!
//! ```text
//! <?xml version="1.0" encoding="windows-1251"?>
//! <ValCurs Date="19.10.2026" name="Foreign Currency Market">
//!     <Valute ID="R01010">
//!         <NumCode>036</NumCode>
//!         <CharCode>AUD</CharCode>
//!         <Nominal>1</Nominal>
//!         <Name>Австралийский доллар</Name>
//!         <Value>52,9374</Value>
//!         <VunitRate>52,9374</VunitRate>
//!     </Valute>
//!     ...
//! </ValCurs>
//! ```
//!
//! Every field is kept as a string here; conversion into typed records is a
//! separate, explicit step so the numeric rules live in one place.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::decimal::{parse_feed_decimal, parse_feed_integer};
use crate::errors::FeedError;
use crate::models::{CurrencyRecord, DailyFeed};

/// Date format of the `ValCurs@Date` attribute.
const FEED_DATE_FORMAT: &str = "%d.%m.%Y";

/// Root element `<ValCurs>`
#[derive(Debug, Deserialize)]
pub struct RawValCurs {
    #[serde(rename = "@Date", default)]
    pub date: Option<String>,

    #[serde(rename = "@name", default)]
    pub name: Option<String>,

    #[serde(rename = "Valute", default)]
    pub valutes: Vec<RawValute>,
}

/// One `<Valute>` entry
#[derive(Debug, Deserialize)]
pub struct RawValute {
    #[serde(rename = "@ID")]
    pub id: String,

    #[serde(rename = "NumCode")]
    pub num_code: String,

    #[serde(rename = "CharCode")]
    pub char_code: String,

    #[serde(rename = "Nominal")]
    pub nominal: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Value")]
    pub value: String,
}

impl TryFrom<RawValute> for CurrencyRecord {
    type Error = FeedError;

    fn try_from(raw: RawValute) -> Result<Self, Self::Error> {
        let num_code: i32 = parse_feed_integer("NumCode", &raw.num_code)?;

        let nominal: i64 = parse_feed_integer("Nominal", &raw.nominal)?;
        if nominal <= 0 {
            return Err(FeedError::InvalidField {
                field: "Nominal",
                value: raw.nominal,
            });
        }

        let value = parse_feed_decimal("Value", &raw.value)?;
        if value.is_sign_negative() && !value.is_zero() {
            return Err(FeedError::InvalidField {
                field: "Value",
                value: raw.value,
            });
        }

        Ok(CurrencyRecord {
            id: raw.id.trim().to_string(),
            num_code,
            char_code: raw.char_code.trim().to_string(),
            nominal,
            name: raw.name.trim().to_string(),
            value,
        })
    }
}

impl TryFrom<RawValCurs> for DailyFeed {
    type Error = FeedError;

    fn try_from(raw: RawValCurs) -> Result<Self, Self::Error> {
        let date = raw.date.as_deref().and_then(|d| {
            match NaiveDate::parse_from_str(d.trim(), FEED_DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(e) => {
                    log::warn!("Ignoring unparseable feed date '{}': {}", d, e);
                    None
                }
            }
        });

        let records = raw
            .valutes
            .into_iter()
            .map(CurrencyRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DailyFeed {
            date,
            name: raw.name,
            records,
        })
    }
}
