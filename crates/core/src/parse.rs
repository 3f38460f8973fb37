//! HTML parsing and selector queries.
//!
//! [`Document`] and [`Element`] wrap `scraper` so that selector errors surface
//! as [`PressError`] instead of panics.
//!
//! # Example
//!
//! ```rust
//! use pressbody_core::parse::Document;
//!
//! let doc = Document::parse(r#"<div class="news_view">본문</div>"#);
//! let nodes = doc.select(".news_view").unwrap();
//! assert_eq!(nodes[0].text(), "본문");
//! ```

use scraper::{Html, Selector};

use crate::{PressError, Result};

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document. html5ever recovers from any markup, so this cannot fail.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements in document order.
    ///
    /// # Errors
    ///
    /// Returns [`PressError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Text of every element matching `selector`, concatenated in document order.
    ///
    /// Returns an empty string when nothing matches.
    pub fn select_text(&self, selector: &str) -> Result<String> {
        Ok(self.select(selector)?.iter().map(Element::text).collect())
    }
}

/// One matched element.
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl Element<'_> {
    /// Serialized markup inside this element, excluding its own tags.
    pub fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    /// Concatenation of all descendant text nodes.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| PressError::HtmlParseError(format!("Invalid selector {selector:?}: {e}")))
}
