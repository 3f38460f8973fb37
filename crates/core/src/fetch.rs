//! Raw page retrieval from URLs, files, and stdin.
//!
//! Everything here returns bytes, not text: character decoding belongs to
//! [`crate::decode`], so the HTTP client must not guess a charset.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use reqwest::header::{ACCEPT_LANGUAGE, REFERER, USER_AGENT};
#[cfg(feature = "fetch")]
use tracing::debug;
use url::Url;

use crate::{PressError, Result};

/// Desktop Chrome signature. Several outlets serve stripped pages to unknown agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                      (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// Accept-Language sent with every request.
pub const ACCEPT_LANGUAGE_KO: &str = "ko,en;q=0.9";

/// HTTP client configuration for fetching article pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds. `None` keeps the client default (no timeout).
    pub timeout: Option<u64>,
    /// User-Agent header value.
    pub user_agent: String,
    /// Accept-Language header value.
    pub accept_language: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: BROWSER_USER_AGENT.to_string(),
            accept_language: ACCEPT_LANGUAGE_KO.to_string(),
        }
    }
}

/// Parses and checks an article URL.
///
/// Only `http` and `https` are accepted.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| PressError::InvalidUrl(format!("{url}: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(PressError::InvalidUrl(format!("unsupported scheme {other}: {url}"))),
    }
}

/// Shared HTTP client that fetches article pages as raw bytes.
///
/// Build one per process and reuse it; the underlying `reqwest::Client`
/// pools connections.
#[cfg(feature = "fetch")]
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

#[cfg(feature = "fetch")]
impl Fetcher {
    /// Builds a fetcher from the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(PressError::HttpError)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Performs a GET request and returns the undecoded response body.
    ///
    /// The request carries the configured User-Agent and Accept-Language and
    /// uses the article URL itself as the Referer. Non-2xx responses are errors.
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let parsed_url = validate_url(url)?;

        let response = self
            .client
            .get(parsed_url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT_LANGUAGE, &self.config.accept_language)
            .header(REFERER, url)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PressError::HttpStatus { status: status.as_u16(), url: url.to_string() });
        }

        let body = response.bytes().await.map_err(|e| self.map_transport_error(e))?;
        debug!(url, status = status.as_u16(), bytes = body.len(), "fetched page");

        Ok(body.to_vec())
    }

    fn map_transport_error(&self, e: reqwest::Error) -> PressError {
        match self.config.timeout {
            Some(timeout) if e.is_timeout() => PressError::Timeout { timeout },
            _ => PressError::HttpError(e),
        }
    }
}

/// Reads a saved page from a local file.
pub fn fetch_file(path: &str) -> Result<Vec<u8>> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(PressError::FileNotFound(path_buf))
    } else {
        fs::read(&path_buf).map_err(PressError::from)
    }
}

/// Reads a page from standard input until EOF.
pub fn fetch_stdin() -> Result<Vec<u8>> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    Ok(buffer)
}
