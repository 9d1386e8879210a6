use cbr_converter_feed::CurrencyRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{REFERENCE_CURRENCY_CODE, REFERENCE_CURRENCY_ID};

/// A currency and its ruble rate.
///
/// `rate` is the value of `nominal` units in rubles, so a currency quoted
/// "per 100 units" has `nominal == 100`. Equality compares every field.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub id: String,
    pub code: String,
    pub nominal: i64,
    pub name: String,
    pub rate: Decimal,
}

impl Currency {
    pub fn new(
        id: impl Into<String>,
        code: impl Into<String>,
        nominal: i64,
        name: impl Into<String>,
        rate: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            nominal,
            name: name.into(),
            rate,
        }
    }

    /// The ruble: nominal 1, rate exactly 1.
    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(
            REFERENCE_CURRENCY_ID,
            REFERENCE_CURRENCY_CODE,
            1,
            name,
            Decimal::ONE,
        )
    }
}

impl From<CurrencyRecord> for Currency {
    fn from(record: CurrencyRecord) -> Self {
        Self {
            id: record.id,
            code: record.char_code,
            nominal: record.nominal,
            name: record.name,
            rate: record.value,
        }
    }
}
