use rust_decimal::{Decimal, RoundingStrategy};

use super::messages::Messages;
use crate::constants::{INTERNAL_SCALE, PUBLIC_SCALE};
use crate::currencies::{Currency, CurrencyCatalog};

/// Ties round away from zero (0.000005 -> 0.00001).
const ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

/// Computes exchange rates and converted amounts between catalog entries.
///
/// Both operations are pure functions of their arguments. They answer `None`
/// instead of failing when there is nothing sensible to display: an empty
/// catalog, an index past the end, an unparseable amount, a zero divisor or
/// an overflow of the decimal range.
///
/// Arithmetic is carried out on [`Decimal`] only. The two divisions of the
/// cross-rate formula are each rounded to [`INTERNAL_SCALE`] digits; a
/// converted amount is then rounded again to [`PUBLIC_SCALE`] digits.
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    messages: Messages,
}

impl ConversionEngine {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Formats the rate of the base currency in units of the quoted one,
    /// e.g. `"92.2573 USD/RUB"`.
    pub fn compute_rate(
        &self,
        catalog: &CurrencyCatalog,
        base_index: usize,
        quoted_index: usize,
    ) -> Option<String> {
        let (base, quoted) = select_pair(catalog, base_index, quoted_index)?;
        let rate = cross_rate(base.rate, base, quoted)?;
        Some(self.messages.format_conversion_rate(
            &render(rate, INTERNAL_SCALE),
            &base.code,
            &quoted.code,
        ))
    }

    /// Formats the amount of the quoted currency obtained for `amount_text`
    /// units of the base currency, e.g. `"You will get 2 EUR"`.
    pub fn convert(
        &self,
        catalog: &CurrencyCatalog,
        base_index: usize,
        quoted_index: usize,
        amount_text: Option<&str>,
    ) -> Option<String> {
        let amount = amount_text.and_then(parse_amount)?;
        let (base, quoted) = select_pair(catalog, base_index, quoted_index)?;

        let result = cross_rate(amount.checked_mul(base.rate)?, base, quoted)?;
        let public = result.round_dp_with_strategy(PUBLIC_SCALE, ROUNDING);

        Some(
            self.messages
                .format_you_will_get(&render(public, PUBLIC_SCALE), &quoted.code),
        )
    }
}

/// Parses a user-entered amount as an exact decimal.
///
/// Accepts plain (`"12.50"`, `"-3"`, `".5"`) and scientific (`"1.5e3"`)
/// notation. Surrounding whitespace, digit separators and decimal commas are
/// rejected, as are values that do not fit without rounding.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    if text.is_empty() || text.contains('_') {
        return None;
    }
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text).ok()
    } else {
        Decimal::from_str_exact(text).ok()
    }
}

fn select_pair(
    catalog: &CurrencyCatalog,
    base_index: usize,
    quoted_index: usize,
) -> Option<(&Currency, &Currency)> {
    if catalog.is_empty() || catalog.len() <= base_index.max(quoted_index) {
        return None;
    }
    Some((catalog.get(base_index)?, catalog.get(quoted_index)?))
}

/// `value * quoted.nominal / quoted.rate / base.nominal`
fn cross_rate(value: Decimal, base: &Currency, quoted: &Currency) -> Option<Decimal> {
    let scaled = value.checked_mul(Decimal::from(quoted.nominal))?;
    let in_quoted = divide(scaled, quoted.rate)?;
    divide(in_quoted, Decimal::from(base.nominal))
}

fn divide(dividend: Decimal, divisor: Decimal) -> Option<Decimal> {
    dividend
        .checked_div(divisor)
        .map(|quotient| quotient.round_dp_with_strategy(INTERNAL_SCALE, ROUNDING))
}

/// Renders with at most `scale` fractional digits, trailing zeros stripped.
fn render(value: Decimal, scale: u32) -> String {
    let rounded = value.round_dp_with_strategy(scale, ROUNDING).normalize();
    if rounded.is_zero() {
        return Decimal::ZERO.to_string();
    }
    rounded.to_string()
}
