/// Fractional digits kept by every intermediate division
pub const INTERNAL_SCALE: u32 = 5;

/// Fractional digits of a displayed converted amount
pub const PUBLIC_SCALE: u32 = 2;

/// Identifier of the synthetic reference currency
pub const REFERENCE_CURRENCY_ID: &str = "rub_id";

/// Letter code of the reference currency
pub const REFERENCE_CURRENCY_CODE: &str = "RUB";

/// Capacity of the one-shot error signal channel
pub const ERROR_CHANNEL_CAPACITY: usize = 16;
