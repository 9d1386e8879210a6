//! Decoding of the feed's comma-separated decimal numbers.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::FeedError;

/// Parses a feed decimal such as `"41,456"` into an exact [`Decimal`].
///
/// The comma is replaced with a period before parsing. Values that would
/// lose digits are rejected instead of being rounded.
pub fn parse_feed_decimal(field: &'static str, raw: &str) -> Result<Decimal, FeedError> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() || normalized.contains('_') {
        return Err(invalid(field, raw));
    }
    Decimal::from_str_exact(&normalized).map_err(|_| invalid(field, raw))
}

/// Parses a feed integer, tolerating surrounding whitespace and leading zeros.
pub(crate) fn parse_feed_integer<T: FromStr>(field: &'static str, raw: &str) -> Result<T, FeedError> {
    raw.trim().parse::<T>().map_err(|_| invalid(field, raw))
}

fn invalid(field: &'static str, raw: &str) -> FeedError {
    FeedError::InvalidField {
        field,
        value: raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::RoundingStrategy;
    use rust_decimal_macros::dec;

    #[test]
    fn test_comma_separator_is_decoded_exactly() {
        let value = parse_feed_decimal("Value", "45,678").unwrap();
        assert_eq!(value, dec!(45.678));
    }

    #[test]
    fn test_feed_value_renders_at_internal_scale() {
        let value = parse_feed_decimal("Value", "41,456").unwrap();
        let rendered = value
            .round_dp_with_strategy(5, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string();
        assert_eq!(rendered, "41.456");
    }

    #[test]
    fn test_period_and_integer_values_are_accepted() {
        assert_eq!(parse_feed_decimal("Value", "12.5").unwrap(), dec!(12.5));
        assert_eq!(parse_feed_decimal("Value", "100").unwrap(), dec!(100));
        assert_eq!(parse_feed_decimal("Value", " 0,0092 ").unwrap(), dec!(0.0092));
    }

    #[test]
    fn test_garbage_is_rejected() {
        for raw in ["", "abc", "1,2,3", "1_000,5", "--1"] {
            let err = parse_feed_decimal("Value", raw).unwrap_err();
            assert!(
                matches!(err, FeedError::InvalidField { field: "Value", .. }),
                "expected invalid field for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_integer_with_leading_zeros() {
        let code: i32 = parse_feed_integer("NumCode", "036").unwrap();
        assert_eq!(code, 36);
        assert!(parse_feed_integer::<i64>("Nominal", "ten").is_err());
    }
}
