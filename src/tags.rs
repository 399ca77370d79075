//! Tag catalogs used by the density scorer and the qualification filter.
//!
//! Each catalog is an array (for iteration and documentation) plus a
//! `HashSet` for O(1) lookup. Tuning which tags count as noise, structure,
//! or inline markup happens here, not in the algorithms.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Tags never scored and never selected as the densest candidate.
pub static IGNORED_TAGS: [&str; 16] = [
    "script", "style", "noscript", "template", "nav", "footer", "header", "aside",
    "form", "button", "select", "svg", "iframe", "canvas", "head", "menu",
];

/// Tags whose text is never visible to a reader.
pub static HIDDEN_TEXT_TAGS: [&str; 5] = ["script", "style", "noscript", "template", "svg"];

/// Phrasing markup that does not count as structure when scoring.
pub static INLINE_TAGS: [&str; 27] = [
    "a", "abbr", "b", "bdi", "bdo", "br", "cite", "code", "data", "dfn", "em", "i", "kbd",
    "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
    "wbr", "font",
];

/// Block-level tags whose presence marks real nested document structure.
pub static BLOCK_TAGS: [&str; 17] = [
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "dl", "pre", "blockquote",
    "table", "figure", "section", "div", "article",
];

/// Leaf-like tags that can hold dense text but are never an article root.
pub static NON_ARTICLE_TAGS: [&str; 17] = [
    "p", "span", "a", "li", "dt", "dd", "blockquote", "q", "figcaption", "caption", "pre",
    "code", "label", "small", "td", "th", "summary",
];

/// Heading tags in rank order.
pub static HEADING_TAGS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `IGNORED_TAGS` as a `HashSet`
pub static IGNORED_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IGNORED_TAGS.into_iter().collect());

/// `HIDDEN_TEXT_TAGS` as a `HashSet`
pub static HIDDEN_TEXT_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HIDDEN_TEXT_TAGS.into_iter().collect());

/// `INLINE_TAGS` as a `HashSet`
pub static INLINE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| INLINE_TAGS.into_iter().collect());

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_TAGS.into_iter().collect());

/// `NON_ARTICLE_TAGS` as a `HashSet`
pub static NON_ARTICLE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| NON_ARTICLE_TAGS.into_iter().collect());

// === Helper Functions ===

/// Check if a tag is excluded from density scoring.
#[inline]
#[must_use]
pub fn is_ignored_tag(tag: &str) -> bool {
    IGNORED_TAG_SET.contains(tag)
}

/// Check if a tag's text is invisible (scripts, styles, templates).
#[inline]
#[must_use]
pub fn is_hidden_text_tag(tag: &str) -> bool {
    HIDDEN_TEXT_TAG_SET.contains(tag)
}

/// Check if a tag is inline phrasing markup.
#[inline]
#[must_use]
pub fn is_inline_tag(tag: &str) -> bool {
    INLINE_TAG_SET.contains(tag)
}

/// Check if a tag is block-level structure.
#[inline]
#[must_use]
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAG_SET.contains(tag)
}

/// Check if a tag can never be an article root.
#[inline]
#[must_use]
pub fn is_non_article_tag(tag: &str) -> bool {
    NON_ARTICLE_TAG_SET.contains(tag)
}

/// Rank of a heading tag: `h1` → 1 … `h6` → 6.
#[must_use]
pub fn heading_rank(tag: &str) -> Option<u8> {
    HEADING_TAGS
        .iter()
        .position(|h| *h == tag)
        .and_then(|i| u8::try_from(i + 1).ok())
}
