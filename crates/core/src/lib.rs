pub mod decode;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod parse;
pub mod publisher;
pub mod scrape;

pub use decode::decode;
pub use error::{ErrorKind, PressError, Result};
pub use extract::extract;
#[cfg(feature = "fetch")]
pub use fetch::Fetcher;
pub use fetch::{FetchConfig, fetch_file, fetch_stdin, validate_url};
pub use parse::Document;
pub use publisher::{ExtractMode, SelectorEntry, resolve, selector_for_key, supported_publishers};
#[cfg(feature = "fetch")]
pub use scrape::scrape;
pub use scrape::{ScrapedArticle, scrape_html};
