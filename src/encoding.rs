//! Character encoding detection and transcoding.
//!
//! Raw page bytes are decoded to UTF-8 before parsing. The encoding comes
//! from a byte order mark when present, then from the first `<meta>`
//! charset declaration in the document head, and defaults to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Bytes scanned for a `<meta>` declaration.
const SNIFF_LIMIT: usize = 1024;

/// Match either `<meta charset="...">` or the `charset=` parameter of a
/// `<meta http-equiv="Content-Type" content="...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\b[^>]*?\bcharset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#).expect("valid regex")
});

/// Detect the character encoding of HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label from the first `<meta>` declaration in `html`.
fn declared_charset(html: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Undecodable sequences become U+FFFD rather than errors, and a leading
/// byte order mark is stripped.
///
/// # Examples
///
/// ```
/// use content_outline::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert!(transcode_to_utf8(html).contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, _had_errors) = encoding.decode_with_bom_removal(html);
    decoded.into_owned()
}
