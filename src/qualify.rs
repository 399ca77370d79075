//! Article Qualification
//!
//! A binary gate applied to the candidate chosen by density. Dense but
//! implausible roots are rejected: comment boxes, pull-quotes, single
//! paragraphs, link farms, and containers that announce a non-content role
//! through their tag, ARIA role, id, or class.

use tracing::debug;

use crate::density::text_stats;
use crate::patterns::{has_non_content_token, NON_CONTENT_ROLE};
use crate::tags::{is_block_tag, is_ignored_tag, is_non_article_tag};
use crate::tree::Element;
use crate::Options;

/// Why a candidate failed qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Tag is ignored or leaf-like (`nav`, `p`, `blockquote`, ...).
    Tag,
    /// ARIA role names a landmark other than the main content.
    Role,
    /// An id or class token names boilerplate (`sidebar`, `comments`, ...).
    IdClass,
    /// Not enough visible text.
    TooShort,
    /// No nested block-level structure.
    NoBlocks,
    /// Text dominated by links.
    LinkHeavy,
}

/// Check whether `element` is plausible as a full article root.
#[must_use]
pub fn is_article_node<E: Element>(element: &E, options: &Options) -> bool {
    match check_article_node(element, options) {
        Ok(()) => true,
        Err(reason) => {
            debug!(tag = %element.tag_name(), ?reason, "candidate rejected");
            false
        }
    }
}

/// Like [`is_article_node`], reporting the first failed test.
pub fn check_article_node<E: Element>(element: &E, options: &Options) -> Result<(), Rejection> {
    let tag = element.tag_name();
    if is_ignored_tag(&tag) || is_non_article_tag(&tag) {
        return Err(Rejection::Tag);
    }

    if element
        .attr("role")
        .is_some_and(|role| NON_CONTENT_ROLE.is_match(role.trim()))
    {
        return Err(Rejection::Role);
    }

    let id = element.attr("id").unwrap_or_default();
    let class = element.attr("class").unwrap_or_default();
    if has_non_content_token(&id) || has_non_content_token(&class) {
        return Err(Rejection::IdClass);
    }

    let stats = text_stats(element);
    if stats.text_len < options.min_article_text_len {
        return Err(Rejection::TooShort);
    }

    let blocks = element
        .descendants()
        .iter()
        .filter(|node| is_block_tag(&node.tag_name()))
        .take(options.min_block_descendants)
        .count();
    if blocks < options.min_block_descendants {
        return Err(Rejection::NoBlocks);
    }

    if stats.link_density() > options.max_link_density {
        return Err(Rejection::LinkHeavy);
    }

    Ok(())
}
