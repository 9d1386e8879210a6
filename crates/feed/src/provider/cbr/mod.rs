//! Central Bank of Russia daily rates provider.
//!
//! Fetches `scripts/XML_daily.asp`, which lists every quoted currency with
//! its nominal and its ruble value for the current day. The document is
//! served in `windows-1251` and uses a comma as decimal separator.

mod models;

use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use reqwest::Client;

use crate::errors::FeedError;
use crate::models::DailyFeed;
use crate::provider::CurrencyFeedProvider;

pub use models::{RawValCurs, RawValute};

/// Provider ID constant
const PROVIDER_ID: &str = "CBR";

/// Public address of the CBR site
pub const DEFAULT_BASE_URL: &str = "https://www.cbr.ru";

/// Path of the daily rates document
const DAILY_PATH: &str = "scripts/XML_daily.asp";

/// How far into the document the XML prolog is searched for a charset.
const PROLOG_SCAN_LIMIT: usize = 256;

/// CBR daily XML provider.
///
/// # Example
///
/// ```ignore
/// use cbr_converter_feed::{CbrDailyProvider, CurrencyFeedProvider};
///
/// let provider = CbrDailyProvider::new();
/// let feed = provider.fetch().await?;
/// ```
pub struct CbrDailyProvider {
    client: Client,
    base_url: String,
}

impl Default for CbrDailyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CbrDailyProvider {
    /// Create a provider pointing at the public CBR site.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider pointing at a mirror or test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .user_agent(concat!("cbr-converter/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full URL of the daily rates document.
    pub fn daily_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), DAILY_PATH)
    }
}

#[async_trait]
impl CurrencyFeedProvider for CbrDailyProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch(&self) -> Result<DailyFeed, FeedError> {
        let url = self.daily_url();
        log::debug!("Requesting daily rates from {}", url);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{} answered {} for {}", PROVIDER_ID, status, url);
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let feed = parse_daily_xml(&body)?;

        log::info!(
            "Fetched {} currencies from {} (date: {:?})",
            feed.len(),
            PROVIDER_ID,
            feed.date
        );
        Ok(feed)
    }
}

/// Decodes a raw daily XML document into a [`DailyFeed`].
///
/// The body is transcoded from the charset named in its prolog (UTF-8 when
/// none is declared), deserialized into string fields, then converted entry
/// by entry. The first invalid entry fails the whole document.
pub fn parse_daily_xml(bytes: &[u8]) -> Result<DailyFeed, FeedError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(FeedError::EmptyBody);
    }

    let encoding = declared_encoding(bytes);
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(FeedError::Decode {
            encoding: encoding.name().to_string(),
        });
    }

    let raw: RawValCurs = quick_xml::de::from_str(&text)?;
    DailyFeed::try_from(raw)
}

/// Reads the `encoding="..."` pseudo-attribute of the XML prolog.
fn declared_encoding(bytes: &[u8]) -> &'static Encoding {
    let head = &bytes[..bytes.len().min(PROLOG_SCAN_LIMIT)];
    let head = String::from_utf8_lossy(head);
    let head: &str = &head;

    let label = head
        .strip_prefix('\u{feff}')
        .unwrap_or(head)
        .trim_start()
        .strip_prefix("<?xml")
        .and_then(|prolog| prolog.split("?>").next())
        .and_then(|prolog| prolog.split_once("encoding="))
        .and_then(|(_, rest)| {
            let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
            let rest = &rest[1..];
            rest.find(quote).map(|end| rest[..end].to_string())
        });

    label
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}
