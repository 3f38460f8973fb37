//! Publisher lookup tables.
//!
//! Upstream news records carry free-form publisher names ("SBS", "Sbs 뉴스",
//! "매일 경제", ...). [`resolve`] maps such a name to a canonical publisher
//! key and then to the [`SelectorEntry`] describing where that outlet keeps
//! its article body.
//!
//! Matching is exact: no case folding, no whitespace normalization. A new
//! spelling of a publisher needs a new row in [`PUBLISHER_ALIASES`].
//!
//! # Example
//!
//! ```rust
//! use pressbody_core::{ExtractMode, resolve};
//!
//! let entry = resolve("매일 경제").unwrap();
//! assert_eq!(entry.key, "매일경제");
//! assert_eq!(entry.mode, ExtractMode::ContainerStrip);
//! ```

use serde::Serialize;

use crate::{PressError, Result};

/// Selector used when a container-strip outlet's primary selector matches nothing.
pub const TEXT_AREA_FALLBACK: &str = ".text_area";

/// How body text is pulled out of the nodes a selector matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractMode {
    /// Take the first match's inner HTML, turn `<br>` into newlines and strip tags.
    ContainerStrip,
    /// Join the trimmed text of every match with newlines.
    ParagraphJoin,
}

impl ExtractMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtractMode::ContainerStrip => "container-strip",
            ExtractMode::ParagraphJoin => "paragraph-join",
        }
    }
}

/// Where one publisher keeps its article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorEntry {
    /// Canonical publisher key.
    pub key: &'static str,
    /// CSS selector (or comma-separated selector list) for the body container.
    pub selector: &'static str,
    pub mode: ExtractMode,
    /// Tried when `selector` matches nothing.
    pub fallback_selector: Option<&'static str>,
}

impl SelectorEntry {
    const fn strip(key: &'static str, selector: &'static str) -> Self {
        Self { key, selector, mode: ExtractMode::ContainerStrip, fallback_selector: Some(TEXT_AREA_FALLBACK) }
    }

    const fn paragraphs(key: &'static str, selector: &'static str) -> Self {
        Self { key, selector, mode: ExtractMode::ParagraphJoin, fallback_selector: None }
    }
}

/// Raw publisher name (as stored upstream) to canonical publisher key.
pub static PUBLISHER_ALIASES: &[(&str, &str)] = &[
    ("동아일보", "동아일보"),
    ("매일경제", "매일경제"),
    ("매일 경제", "매일경제"),
    ("Sbs 뉴스", "sbs"),
    ("SBS", "sbs"),
    ("Sbs", "sbs"),
    ("스포츠조선", "스포츠조선"),
    ("Mbn", "Mbn"),
    ("mbn", "Mbn"),
    ("오마이뉴스", "ohmynews"),
    ("Ohmynews", "ohmynews"),
    ("이투데이", "이투데이"),
    ("Chosun", "Chosun"),
    ("Hani", "한겨례"),
];

/// Canonical publisher key to body selector.
pub static SELECTOR_TABLE: &[SelectorEntry] = &[
    SelectorEntry::strip("동아일보", ".news_view"),
    SelectorEntry::strip("매일경제", r#"div.news_cnt_detail_wrap[itemprop="articleBody"]"#),
    SelectorEntry::strip(
        "sbs",
        "div.text_area, div#viewer_area, div.article-body, section.text_area",
    ),
    SelectorEntry::strip("Mbn", r#"div.detail#newsViewArea[itemprop="articleBody"]"#),
    SelectorEntry::strip("ohmynews", r#"div.text[itemprop="articleBody"]"#),
    SelectorEntry::strip("이투데이", "div.articleView"),
    SelectorEntry::strip("스포츠조선", "div.news_text"),
    SelectorEntry::strip("Chosun", ".article-body"),
    SelectorEntry::paragraphs("한겨례", "div.article-text p.text"),
];

/// Looks up the canonical key for a raw publisher name.
pub fn publisher_key(source_name: &str) -> Option<&'static str> {
    PUBLISHER_ALIASES
        .iter()
        .find(|(raw, _)| *raw == source_name)
        .map(|(_, key)| *key)
}

/// Looks up the selector entry for a canonical publisher key.
pub fn selector_for_key(key: &str) -> Option<&'static SelectorEntry> {
    SELECTOR_TABLE.iter().find(|entry| entry.key == key)
}

/// Resolves a raw publisher name to its selector entry.
///
/// # Errors
///
/// Returns [`PressError::UnsupportedPublisher`] when the name has no alias
/// or the alias points at a key without a selector.
pub fn resolve(source_name: &str) -> Result<&'static SelectorEntry> {
    publisher_key(source_name)
        .and_then(selector_for_key)
        .ok_or_else(|| PressError::UnsupportedPublisher(source_name.to_string()))
}

/// All `(raw name, entry)` pairs, in table order.
pub fn supported_publishers() -> impl Iterator<Item = (&'static str, &'static SelectorEntry)> {
    PUBLISHER_ALIASES
        .iter()
        .filter_map(|(raw, key)| selector_for_key(key).map(|entry| (*raw, entry)))
}
