/// User-visible texts of the converter.
///
/// Templates use named placeholders: `{rate}`, `{base}` and `{quoted}` for
/// the conversion rate, `{amount}` and `{quoted}` for a converted amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub reference_currency_name: String,
    pub conversion_rate: String,
    pub you_will_get: String,
    pub error_loading_currencies: String,
    pub conversion_error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            reference_currency_name: "Russian ruble".to_string(),
            conversion_rate: "{rate} {base}/{quoted}".to_string(),
            you_will_get: "You will get {amount} {quoted}".to_string(),
            error_loading_currencies: "Failed to load currencies".to_string(),
            conversion_error: "Conversion error".to_string(),
        }
    }
}

impl Messages {
    pub fn format_conversion_rate(&self, rate: &str, base_code: &str, quoted_code: &str) -> String {
        fill(
            &self.conversion_rate,
            &[("rate", rate), ("base", base_code), ("quoted", quoted_code)],
        )
    }

    pub fn format_you_will_get(&self, amount: &str, quoted_code: &str) -> String {
        fill(&self.you_will_get, &[("amount", amount), ("quoted", quoted_code)])
    }
}

/// Substitutes `{name}` placeholders in one pass over the template.
///
/// Substituted values are never scanned again. Unknown or unterminated
/// placeholders are copied through unchanged.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
