//! Compiled regex patterns for non-content detection and text cleanup.
//!
//! All patterns are compiled once at first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches a single id or class token naming a non-content container.
///
/// Anchored per token: `sidebar` and `comment-list` match, but a layout
/// class like `has-sidebar` or `article-footer` does not.
pub static NON_CONTENT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:nav|navbar|navigation|[a-z]+[-_]nav|nav[-_][a-z]+|menu|main[-_]?menu|sidebar|side[-_]bar|footer|site[-_]?footer|site[-_]?header|comments?|comment[-_]?(?:list|section|box|area)|disqus_thread|respond|breadcrumbs?|related(?:[-_]posts?)?|share|sharing|social|widgets?|ads?|advert(?:isement)?|sponsored|promo)$",
    )
    .expect("NON_CONTENT_TOKEN regex")
});

/// Matches ARIA landmark roles that are never the article itself.
pub static NON_CONTENT_ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:navigation|banner|contentinfo|complementary|search|menu|menubar|dialog|alert|toolbar)$")
        .expect("NON_CONTENT_ROLE regex")
});

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Collapse whitespace runs to single spaces and trim the ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Check whether any whitespace-separated token of `value` names a
/// non-content container.
#[must_use]
pub fn has_non_content_token(value: &str) -> bool {
    value.split_whitespace().any(|token| NON_CONTENT_TOKEN.is_match(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_content_token_matches_boilerplate_names() {
        for token in ["nav", "main-nav", "navbar", "sidebar", "footer", "comments", "comment-list", "breadcrumbs", "related-posts", "ads"] {
            assert!(NON_CONTENT_TOKEN.is_match(token), "{token} should match");
        }
    }

    #[test]
    fn non_content_token_ignores_compound_content_names() {
        for token in ["article-footer", "has-sidebar", "post-content", "entry", "content", "navigational-essay"] {
            assert!(!NON_CONTENT_TOKEN.is_match(token), "{token} should not match");
        }
    }

    #[test]
    fn has_non_content_token_checks_every_class() {
        assert!(has_non_content_token("widget-area sidebar"));
        assert!(!has_non_content_token("post entry-content"));
        assert!(!has_non_content_token(""));
    }

    #[test]
    fn non_content_role_matches_landmarks() {
        assert!(NON_CONTENT_ROLE.is_match("navigation"));
        assert!(NON_CONTENT_ROLE.is_match("contentinfo"));
        assert!(!NON_CONTENT_ROLE.is_match("main"));
        assert!(!NON_CONTENT_ROLE.is_match("article"));
    }

    #[test]
    fn normalize_whitespace_collapses_runs() {
        assert_eq!(normalize_whitespace("  hello \n\t world  "), "hello world");
        assert_eq!(normalize_whitespace("   "), "");
    }
}
