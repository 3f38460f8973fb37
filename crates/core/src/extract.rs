//! Article body extraction.
//!
//! Each publisher's [`SelectorEntry`] picks one of two strategies:
//!
//! - [`ExtractMode::ContainerStrip`]: take the first matching container's
//!   inner HTML, turn `<br>` into line breaks, drop every other tag and
//!   normalize whitespace line by line. If the selector matches nothing, the
//!   entry's fallback selector is read as plain text instead.
//! - [`ExtractMode::ParagraphJoin`]: join the trimmed text of every matching
//!   paragraph with newlines. Results shorter than [`MIN_PARAGRAPH_CHARS`]
//!   are replaced by the raw text of the same matches.
//!
//! Extraction never fails on page content; the result may be empty.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::parse::Document;
use crate::publisher::{ExtractMode, SelectorEntry};
use crate::Result;

/// Joined paragraph text shorter than this (in UTF-16 code units) triggers the raw-text fallback.
pub const MIN_PARAGRAPH_CHARS: usize = 30;

#[allow(clippy::expect_used)]
static BR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));

#[allow(clippy::expect_used)]
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

#[allow(clippy::expect_used)]
static NEWLINES_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// Whitespace at the start or end of any line.
#[allow(clippy::expect_used)]
static LINE_EDGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s+|\s+$").expect("valid regex"));

/// Extracts the article body from a decoded page.
///
/// # Errors
///
/// Returns [`crate::PressError::HtmlParseError`] only if a selector in
/// `entry` is invalid.
///
/// # Example
///
/// ```rust
/// use pressbody_core::{extract, resolve};
///
/// let entry = resolve("동아일보").unwrap();
/// let html = r#"<div class="news_view">Hello<br>World</div>"#;
/// assert_eq!(extract(html, entry).unwrap(), "Hello\nWorld");
/// ```
pub fn extract(html: &str, entry: &SelectorEntry) -> Result<String> {
    let doc = Document::parse(html);

    let content = match entry.mode {
        ExtractMode::ParagraphJoin => paragraph_join(&doc, entry.selector)?,
        ExtractMode::ContainerStrip => container_strip(&doc, entry.selector, entry.fallback_selector)?,
    };

    debug!(publisher = entry.key, mode = ?entry.mode, length = content.chars().count(), "extracted body");
    Ok(content)
}

fn paragraph_join(doc: &Document, selector: &str) -> Result<String> {
    let paragraphs = doc.select(selector)?;

    let joined = paragraphs
        .iter()
        .map(|p| p.text().trim().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let content = NEWLINES_RE.replace_all(&joined, "\n").trim().to_string();

    let length = content.encode_utf16().count();
    if length < MIN_PARAGRAPH_CHARS {
        debug!(selector, length, "paragraph text too short, using raw match text");
        return Ok(doc.select_text(selector)?.trim().to_string());
    }

    Ok(content)
}

fn container_strip(doc: &Document, selector: &str, fallback: Option<&str>) -> Result<String> {
    if let Some(container) = doc.select(selector)?.first() {
        return Ok(strip_markup(&container.inner_html()));
    }

    match fallback {
        Some(fallback) => {
            debug!(selector, fallback, "primary selector matched nothing");
            Ok(doc.select_text(fallback)?.trim().to_string())
        }
        None => Ok(String::new()),
    }
}

/// Converts a fragment of serialized HTML to plain text.
///
/// `<br>` variants become newlines, other tags are removed, runs of blank
/// lines collapse to one break, and every line is trimmed.
///
/// ```rust
/// use pressbody_core::extract::strip_markup;
///
/// assert_eq!(strip_markup("  <p>첫째</p><br/>\n\n<BR>  둘째 &amp; 셋째 "), "첫째\n둘째 & 셋째");
/// ```
pub fn strip_markup(html: &str) -> String {
    let text = BR_RE.replace_all(html, "\n");
    let text = TAG_RE.replace_all(&text, "");
    let text = unescape_text(&text);
    let text = NEWLINES_RE.replace_all(&text, "\n");
    let text = LINE_EDGE_RE.replace_all(&text, "");
    text.trim().to_string()
}

/// Reverses the character references the serializer writes into text nodes.
///
/// Runs over the whole fragment, so raw `<script>` and `<style>` text is
/// unescaped as well.
fn unescape_text(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&nbsp;", "\u{a0}")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publisher::{TEXT_AREA_FALLBACK, resolve};

    fn strip_entry(selector: &'static str) -> SelectorEntry {
        SelectorEntry {
            key: "test",
            selector,
            mode: ExtractMode::ContainerStrip,
            fallback_selector: Some(TEXT_AREA_FALLBACK),
        }
    }

    #[test]
    fn test_container_strip_br() {
        let html = r#"<div class="news_view">Hello<br>World</div>"#;
        assert_eq!(extract(html, &strip_entry(".news_view")).unwrap(), "Hello\nWorld");
    }

    #[test]
    fn test_container_strip_br_variants() {
        let html = r#"<div class="news_view">a<br/>b<BR />c<br   >d</div>"#;
        assert_eq!(extract(html, &strip_entry(".news_view")).unwrap(), "a\nb\nc\nd");
    }

    #[test]
    fn test_container_strip_removes_tags_and_blank_lines() {
        let html = r#"
            <div class="news_view">
                <figure><img src="a.jpg"><figcaption></figcaption></figure>
                첫 문장입니다.<br><br>

                <b>둘째</b> 문장입니다.
                <script>var x = 1;</script>
            </div>
        "#;
        let content = extract(html, &strip_entry(".news_view")).unwrap();
        assert_eq!(content, "첫 문장입니다.\n둘째 문장입니다.\nvar x = 1;");
    }

    #[test]
    fn test_container_strip_uses_first_match_only() {
        let html = r#"
            <div class="article-body">first</div>
            <div class="article-body">second</div>
        "#;
        assert_eq!(extract(html, &strip_entry(".article-body")).unwrap(), "first");
    }

    #[test]
    fn test_container_strip_selector_list_takes_document_order() {
        let entry = resolve("SBS").unwrap();
        let html = r#"
            <div id="viewer_area">viewer</div>
            <div class="text_area">text area</div>
        "#;
        assert_eq!(extract(html, entry).unwrap(), "viewer");
    }

    #[test]
    fn test_container_strip_unescapes_text() {
        let html = r#"<div class="news_view">R&amp;D &lt;속보&gt;&nbsp;</div>"#;
        assert_eq!(extract(html, &strip_entry(".news_view")).unwrap(), "R&D <속보>");
    }

    #[test]
    fn test_fallback_to_text_area() {
        let html = r#"<section class="text_area"><p>  대체 본문  </p></section>"#;
        assert_eq!(extract(html, &strip_entry(".news_view")).unwrap(), "대체 본문");
    }

    #[test]
    fn test_no_match_is_empty() {
        let html = "<div class=\"other\">nothing here</div>";
        assert_eq!(extract(html, &strip_entry(".news_view")).unwrap(), "");
    }

    #[test]
    fn test_paragraph_join_short_uses_raw_text() {
        let entry = resolve("Hani").unwrap();
        let html = r#"
            <div class="article-text">
                <p class="text">A</p>
                <p class="text">B</p>
                <p class="text">C</p>
            </div>
        "#;
        // Joined "A\nB\nC" is under the threshold; raw concatenated text wins.
        assert_eq!(extract(html, entry).unwrap(), "ABC");
    }

    #[test]
    fn test_paragraph_join_long() {
        let entry = resolve("Hani").unwrap();
        let html = r#"
            <div class="article-text">
                <p class="text">  한겨레 첫 번째 문단은 충분히 깁니다.  </p>
                <p class="text"></p>
                <p class="text">두 번째 문단도 마찬가지로 깁니다.</p>
            </div>
        "#;
        assert_eq!(
            extract(html, entry).unwrap(),
            "한겨레 첫 번째 문단은 충분히 깁니다.\n두 번째 문단도 마찬가지로 깁니다."
        );
    }

    #[test]
    fn test_paragraph_join_threshold_counts_utf16_units() {
        let entry = resolve("Hani").unwrap();
        let emoji = "😀".repeat(16);
        let html = format!(
            r#"<div class="article-text"><p class="text">{emoji}</p><p class="text">x</p></div>"#
        );
        // 18 scalars but 34 UTF-16 units: above the threshold, so the join is kept.
        assert_eq!(extract(&html, entry).unwrap(), format!("{emoji}\nx"));
    }

    #[test]
    fn test_container_strip_unescapes_script_text() {
        let html = r#"<div class="news_view"><script>if (a &amp;&amp; b) {}</script></div>"#;
        assert_eq!(extract(html, &strip_entry(".news_view")).unwrap(), "if (a && b) {}");
    }

    #[test]
    fn test_paragraph_join_no_match() {
        let entry = resolve("Hani").unwrap();
        assert_eq!(extract("<p class=\"text\">outside</p>", entry).unwrap(), "");
    }

    #[test]
    fn test_invalid_selector_is_error() {
        let result = extract("<p>x</p>", &strip_entry("[[broken"));
        assert!(matches!(result, Err(crate::PressError::HtmlParseError(_))));
    }

    #[test]
    fn test_strip_markup_trims_each_line() {
        assert_eq!(strip_markup("  one  \n\t two \n\n\n three  "), "one\ntwo\nthree");
    }
}
