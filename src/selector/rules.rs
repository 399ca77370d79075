//! Fixed selector lists driving the content-region locator and the
//! heading extractor.

use super::Matcher;

/// Semantic "article container" selectors, tried by direct search.
pub static SEMANTIC_ARTICLE_SELECTORS: &[Matcher] = &[
    Matcher::Tag("article"),
    Matcher::Tag("main"),
    Matcher::Attr("role", "main"),
    Matcher::Attr("role", "article"),
    Matcher::Attr("itemprop", "articleBody"),
];

/// Semantic heading selectors, in no particular order; rank comes from the
/// element itself.
pub static SEMANTIC_HEADINGS: &[Matcher] = &[
    Matcher::Tag("h1"),
    Matcher::Tag("h2"),
    Matcher::Tag("h3"),
    Matcher::Tag("h4"),
    Matcher::Tag("h5"),
    Matcher::Tag("h6"),
    Matcher::Attr("role", "heading"),
];

/// Paragraph selectors for the last-resort ancestor search.
pub static PARAGRAPH_SELECTORS: &[Matcher] = &[Matcher::Tag("p")];

/// `aria-level` assumed for a `role="heading"` element without one.
pub const DEFAULT_ARIA_LEVEL: u8 = 2;
