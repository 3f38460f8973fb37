//! The resolve, fetch, decode, extract pipeline.
//!
//! # Example
//!
//! ```rust,no_run
//! use pressbody_core::{FetchConfig, Fetcher, scrape};
//!
//! # async fn run() -> pressbody_core::Result<()> {
//! let fetcher = Fetcher::new(FetchConfig::default())?;
//! let article = scrape(&fetcher, "동아일보", "https://www.donga.com/news/article/all/1").await?;
//! println!("{}", article.content);
//! # Ok(())
//! # }
//! ```

use serde::Serialize;
use tracing::info;

use crate::decode::decode;
use crate::extract::extract;
use crate::publisher::SelectorEntry;
use crate::{PressError, Result};

#[cfg(feature = "fetch")]
use crate::{fetch::Fetcher, publisher::resolve};

/// Body text extracted for one article, with the lookup that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapedArticle {
    /// Canonical publisher key.
    pub publisher: &'static str,
    /// Selector that was applied.
    pub selector: &'static str,
    /// Extracted plain text. Never empty.
    pub content: String,
}

impl ScrapedArticle {
    /// Number of characters in the body.
    pub fn length(&self) -> usize {
        self.content.chars().count()
    }

    /// The response payload shape: `{"content": "..."}`.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({ "content": self.content })
    }
}

/// Resolves `source_name`, fetches `url` and extracts the article body.
///
/// # Errors
///
/// - [`PressError::UnsupportedPublisher`] before any request is made
/// - fetch errors ([`PressError::InvalidUrl`], [`PressError::HttpStatus`], ...)
/// - [`PressError::NoContent`] when the page yields no text
#[cfg(feature = "fetch")]
pub async fn scrape(fetcher: &Fetcher, source_name: &str, url: &str) -> Result<ScrapedArticle> {
    let entry = resolve(source_name)?;
    info!(source_name, publisher = entry.key, selector = entry.selector, url, "scrape");

    let bytes = fetcher.fetch_bytes(url).await?;
    scrape_html(entry, &bytes)
}

/// Decodes and extracts an already fetched page.
pub fn scrape_html(entry: &'static SelectorEntry, bytes: &[u8]) -> Result<ScrapedArticle> {
    let html = decode(bytes);
    let content = extract(&html, entry)?;

    if content.is_empty() {
        return Err(PressError::NoContent);
    }

    let article = ScrapedArticle { publisher: entry.key, selector: entry.selector, content };
    info!(publisher = article.publisher, length = article.length(), "body length");
    Ok(article)
}
