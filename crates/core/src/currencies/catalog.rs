use serde::Serialize;

use super::currencies_model::Currency;

/// Ordered list of the currencies known for the current session.
///
/// A catalog is rebuilt from scratch on every successful load and then only
/// read; it is shared as an `Arc` snapshot and never mutated in place.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct CurrencyCatalog {
    currencies: Vec<Currency>,
}

impl CurrencyCatalog {
    /// The catalog before anything was loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(currencies: Vec<Currency>) -> Self {
        Self { currencies }
    }

    /// Builds a catalog from a fetched list, making sure the reference
    /// currency is present.
    ///
    /// The reference is prepended at index 0 unless an entry equal to it in
    /// every field is already in the list, in which case the list is kept
    /// as-is.
    pub fn from_fetched(mut fetched: Vec<Currency>, reference: Currency) -> Self {
        if !fetched.contains(&reference) {
            fetched.insert(0, reference);
        }
        Self::new(fetched)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Currency> {
        self.currencies.get(index)
    }

    pub fn as_slice(&self) -> &[Currency] {
        &self.currencies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Currency> {
        self.currencies.iter()
    }

    /// Index of the first currency with the given code, ignoring ASCII case.
    pub fn position_of_code(&self, code: &str) -> Option<usize> {
        self.currencies
            .iter()
            .position(|c| c.code.eq_ignore_ascii_case(code))
    }
}

impl From<Vec<Currency>> for CurrencyCatalog {
    fn from(currencies: Vec<Currency>) -> Self {
        Self::new(currencies)
    }
}

impl<'a> IntoIterator for &'a CurrencyCatalog {
    type Item = &'a Currency;
    type IntoIter = std::slice::Iter<'a, Currency>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
