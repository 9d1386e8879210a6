//! Provider reading a saved copy of the daily XML document.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::errors::FeedError;
use crate::models::DailyFeed;
use crate::provider::cbr::parse_daily_xml;
use crate::provider::CurrencyFeedProvider;

const PROVIDER_ID: &str = "XML_FILE";

/// Reads the feed from a local file in the CBR daily XML format.
pub struct XmlFileProvider {
    path: PathBuf,
}

impl XmlFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CurrencyFeedProvider for XmlFileProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch(&self) -> Result<DailyFeed, FeedError> {
        log::debug!("Reading daily rates from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        let feed = parse_daily_xml(&bytes)?;

        log::info!(
            "Read {} currencies from {} (date: {:?})",
            feed.len(),
            self.path.display(),
            feed.date
        );
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_saved_document() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"<?xml version="1.0" encoding="UTF-8"?>
<ValCurs Date="01.02.2026" name="Foreign Currency Market">
  <Valute ID="R01239"><NumCode>978</NumCode><CharCode>EUR</CharCode><Nominal>1</Nominal><Name>Euro</Name><Value>99,5216</Value></Valute>
</ValCurs>"#
        )
        .unwrap();

        let provider = XmlFileProvider::new(file.path());
        let feed = provider.fetch().await.unwrap();

        assert_eq!(provider.id(), "XML_FILE");
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.records[0].char_code, "EUR");
        assert_eq!(feed.records[0].value, dec!(99.5216));
        assert_eq!(feed.date, chrono::NaiveDate::from_ymd_opt(2026, 2, 1));
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let provider = XmlFileProvider::new(dir.path().join("absent.xml"));
        let err = provider.fetch().await.unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
    }

    #[tokio::test]
    async fn test_empty_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let provider = XmlFileProvider::new(file.path());
        let err = provider.fetch().await.unwrap_err();
        assert!(matches!(err, FeedError::EmptyBody));
    }
}
