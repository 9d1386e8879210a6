use std::path::PathBuf;

use cbr_converter_core::{Error, Result};
use cbr_converter_feed::provider::cbr::DEFAULT_BASE_URL;

use crate::cli::Cli;

pub struct Config {
    pub feed_url: String,
    pub feed_file: Option<PathBuf>,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let feed_url = var("CBR_FEED_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let feed_file = var("CBR_FEED_FILE")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let log_format = var("CBR_LOG_FORMAT")
            .map(|s| s.trim().to_ascii_lowercase())
            .unwrap_or_else(|| "text".to_string());

        let config = Self {
            feed_url,
            feed_file,
            log_format,
        };
        config.validate()?;
        Ok(config)
    }

    /// Command-line flags win over the environment and go through the same checks.
    pub fn with_overrides(mut self, cli: &Cli) -> Result<Self> {
        if let Some(url) = &cli.feed_url {
            self.feed_url = url.clone();
        }
        if let Some(path) = &cli.feed_file {
            self.feed_file = Some(path.clone());
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if !matches!(self.log_format.as_str(), "text" | "json") {
            return Err(Error::InvalidConfig(format!(
                "CBR_LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            )));
        }
        if !(self.feed_url.starts_with("http://") || self.feed_url.starts_with("https://")) {
            return Err(Error::InvalidConfig(format!(
                "feed URL must be an http(s) URL, got '{}'",
                self.feed_url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.feed_url, "https://www.cbr.ru");
        assert!(config.feed_file.is_none());
        assert_eq!(config.log_format, "text");
    }

    #[test]
    fn test_env_values() {
        let config = config_from(&[
            ("CBR_FEED_URL", "http://mirror.local"),
            ("CBR_FEED_FILE", "/tmp/daily.xml"),
            ("CBR_LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.feed_url, "http://mirror.local");
        assert_eq!(config.feed_file, Some(PathBuf::from("/tmp/daily.xml")));
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = config_from(&[("CBR_FEED_URL", " "), ("CBR_FEED_FILE", "")]).unwrap();
        assert_eq!(config.feed_url, "https://www.cbr.ru");
        assert!(config.feed_file.is_none());
    }

    #[test]
    fn test_flags_override_env() {
        let cli = Cli::parse_from([
            "cbr-converter",
            "--feed-file",
            "saved.xml",
            "rate",
            "USD",
            "EUR",
        ]);
        let config = config_from(&[("CBR_FEED_FILE", "/tmp/daily.xml")])
            .unwrap()
            .with_overrides(&cli)
            .unwrap();
        assert_eq!(config.feed_file, Some(PathBuf::from("saved.xml")));
        assert_eq!(config.feed_url, "https://www.cbr.ru");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = config_from(&[("CBR_LOG_FORMAT", "xml")]).err().unwrap();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = config_from(&[("CBR_FEED_URL", "ftp://cbr.ru")]).err().unwrap();
        assert!(err.to_string().contains("ftp://cbr.ru"));
    }

    #[test]
    fn test_invalid_flag_url_is_rejected() {
        let cli = Cli::parse_from([
            "cbr-converter",
            "--feed-url",
            "ftp://cbr.ru",
            "rate",
            "USD",
            "EUR",
        ]);
        let err = config_from(&[])
            .unwrap()
            .with_overrides(&cli)
            .err()
            .unwrap();
        assert!(matches!(err, Error::InvalidConfig(ref message) if message.contains("ftp://cbr.ru")));
    }
}
