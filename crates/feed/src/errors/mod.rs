//! Error types for the feed crate.
//!
//! Every failure of a feed provider is reported as a [`FeedError`]. The
//! caller surfaces it as a single error signal; nothing here is retried.

use thiserror::Error;

/// Errors that can occur while fetching or decoding the daily feed.
#[derive(Error, Debug)]
pub enum FeedError {
    /// A network error occurred while talking to the feed server.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The feed server answered with a non-success HTTP status.
    #[error("Feed request failed with status {status}")]
    Status {
        /// The HTTP status code returned by the server
        status: u16,
    },

    /// The response or file had no content.
    #[error("Feed response body is empty")]
    EmptyBody,

    /// The body could not be decoded from its declared charset.
    #[error("Failed to decode feed body as {encoding}")]
    Decode {
        /// Name of the encoding the body claimed to use
        encoding: String,
    },

    /// The document is not a well-formed daily feed.
    #[error("Malformed feed document: {message}")]
    Malformed {
        /// Parser diagnostics
        message: String,
    },

    /// A field of a currency entry failed validation or numeric decoding.
    #[error("Invalid {field} value '{value}'")]
    InvalidField {
        /// XML element or attribute name
        field: &'static str,
        /// Raw value as found in the feed
        value: String,
    },

    /// Reading a local feed file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<quick_xml::DeError> for FeedError {
    fn from(err: quick_xml::DeError) -> Self {
        FeedError::Malformed {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = FeedError::Status { status: 503 };
        assert_eq!(format!("{}", error), "Feed request failed with status 503");

        let error = FeedError::InvalidField {
            field: "Value",
            value: "4x,1".to_string(),
        };
        assert_eq!(format!("{}", error), "Invalid Value value '4x,1'");

        let error = FeedError::Decode {
            encoding: "windows-1251".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Failed to decode feed body as windows-1251"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: FeedError = io.into();
        assert!(matches!(error, FeedError::Io(_)));
    }
}
