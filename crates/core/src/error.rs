//! Error types for pressbody operations.
//!
//! This module defines the main error type [`PressError`] which represents
//! everything that can go wrong between receiving a publisher name and
//! returning article text: publisher lookup, fetching, and extraction.
//!
//! # Example
//!
//! ```rust
//! use pressbody_core::{PressError, Result};
//!
//! fn require_body(content: String) -> Result<String> {
//!     if content.is_empty() {
//!         return Err(PressError::NoContent);
//!     }
//!     Ok(content)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and extracting article bodies.
///
/// # Example
///
/// ```rust
/// use pressbody_core::{ErrorKind, PressError, resolve};
///
/// match resolve("UnknownPress") {
///     Ok(entry) => println!("selector: {}", entry.selector),
///     Err(e) => assert_eq!(e.kind(), ErrorKind::UnsupportedPublisher),
/// }
/// ```
#[derive(Error, Debug)]
pub enum PressError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Only possible when a timeout was configured on the fetcher.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The upstream answered with a non-success status code.
    #[error("Upstream returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is not http(s).
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// In practice this means a selector in the table failed to parse.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// The source name has no alias, or its alias has no selector.
    #[error("Publisher not supported: {0}")]
    UnsupportedPublisher(String),

    /// Extraction produced no text.
    #[error("No content could be extracted from the document")]
    NoContent,

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// File or stdin read errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of a [`PressError`].
///
/// The HTTP layer maps each kind to exactly one status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was missing or malformed before any lookup ran.
    InvalidInput,
    /// Publisher lookup miss.
    UnsupportedPublisher,
    /// The page was fetched but no body text was found.
    NotFound,
    /// Transport, status, or parse failure.
    Upstream,
}

impl PressError {
    /// Classifies this error for boundary handling.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PressError::UnsupportedPublisher(_) => ErrorKind::UnsupportedPublisher,
            PressError::NoContent => ErrorKind::NotFound,
            PressError::FileNotFound(_) => ErrorKind::InvalidInput,
            _ => ErrorKind::Upstream,
        }
    }
}

/// Result type alias for PressError.
pub type Result<T> = std::result::Result<T, PressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PressError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_http_status_error() {
        let err = PressError::HttpStatus { status: 503, url: "https://example.com/a".to_string() };
        assert!(err.to_string().contains("503"));
        assert!(err.to_string().contains("https://example.com/a"));
    }

    #[test]
    fn test_timeout_error() {
        let err = PressError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            PressError::UnsupportedPublisher("x".into()).kind(),
            ErrorKind::UnsupportedPublisher
        );
        assert_eq!(PressError::NoContent.kind(), ErrorKind::NotFound);
        assert_eq!(PressError::InvalidUrl("x".into()).kind(), ErrorKind::Upstream);
        assert_eq!(PressError::HtmlParseError("x".into()).kind(), ErrorKind::Upstream);
        assert_eq!(PressError::Timeout { timeout: 1 }.kind(), ErrorKind::Upstream);
    }
}
