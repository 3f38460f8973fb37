//! Byte-to-text decoding of fetched pages.
//!
//! Pages are always decoded as UTF-8. Response headers and `<meta charset>`
//! declarations are ignored, including for outlets whose pages historically
//! used EUC-KR; such bytes come out as U+FFFD rather than being transcoded.

use encoding_rs::UTF_8;

/// Decodes a fetched page as UTF-8.
///
/// A leading byte order mark is dropped and malformed sequences are replaced
/// with U+FFFD, so this never fails.
///
/// # Example
///
/// ```rust
/// use pressbody_core::decode;
///
/// assert_eq!(decode("\u{feff}<p>본문</p>".as_bytes()), "<p>본문</p>");
/// ```
pub fn decode(bytes: &[u8]) -> String {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        tracing::debug!(bytes = bytes.len(), "page is not valid UTF-8; replaced malformed sequences");
    }
    text.into_owned()
}
