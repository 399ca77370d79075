//! Text Density Scoring
//!
//! Ranks candidate elements by how much readable, non-link text they carry
//! per unit of block structure. A container wrapping long-form paragraphs
//! scores high; a navigation list of the same outer size scores near zero
//! because nearly all of its text sits inside links and every item adds
//! structure.

use crate::tags::{is_hidden_text_tag, is_inline_tag};
use crate::tree::Element;

/// Raw text and structure measurements for one element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStats {
    /// Visible characters, whitespace-collapsed, hidden-text tags excluded.
    pub text_len: usize,
    /// Visible characters inside `<a>` descendants.
    pub link_text_len: usize,
    /// The element itself plus every non-inline element descendant.
    pub element_count: usize,
}

impl TextStats {
    /// Visible characters outside of links.
    #[inline]
    #[must_use]
    pub fn content_len(&self) -> usize {
        self.text_len.saturating_sub(self.link_text_len)
    }

    /// Non-link characters per structural element, `0.0` without text.
    #[must_use]
    pub fn density(&self) -> f64 {
        if self.text_len == 0 {
            return 0.0;
        }
        self.content_len() as f64 / self.element_count.max(1) as f64
    }

    /// Share of visible text that sits inside links, in `0.0..=1.0`.
    #[must_use]
    pub fn link_density(&self) -> f64 {
        if self.text_len == 0 {
            return 0.0;
        }
        (self.link_text_len.min(self.text_len) as f64) / self.text_len as f64
    }
}

/// Character count of `text` after collapsing whitespace runs and trimming.
///
/// Counts `char`s, not bytes, so CJK and accented text are not inflated.
#[must_use]
pub fn normalized_len(text: &str) -> usize {
    let mut len = 0;
    let mut words = 0usize;
    for word in text.split_whitespace() {
        len += word.chars().count();
        words += 1;
    }
    len + words.saturating_sub(1)
}

/// Collect text and structure measurements for `element` in one pass over
/// its descendants.
#[must_use]
pub fn text_stats<E: Element>(element: &E) -> TextStats {
    let total = normalized_len(&element.text());
    if total == 0 {
        return TextStats {
            element_count: 1,
            ..TextStats::default()
        };
    }

    let mut hidden_len = 0usize;
    let mut link_text_len = 0usize;
    let mut element_count = 1usize;
    // descendants come in document order, so hidden and link subtrees are
    // contiguous
    let mut hidden_root: Option<E> = None;
    let mut link_root: Option<E> = None;

    for node in element.descendants() {
        if let Some(hidden) = &hidden_root {
            if node.is_descendant_of(hidden) {
                continue;
            }
            hidden_root = None;
        }
        if let Some(link) = &link_root {
            if !node.is_descendant_of(link) {
                link_root = None;
            }
        }
        let tag = node.tag_name();
        if is_hidden_text_tag(&tag) {
            let len = normalized_len(&node.text());
            hidden_len += len;
            // icon markup inside a link is not link text either
            if link_root.is_some() {
                link_text_len = link_text_len.saturating_sub(len);
            }
            hidden_root = Some(node);
            continue;
        }
        if tag == "a" && link_root.is_none() {
            link_text_len += normalized_len(&node.text());
            link_root = Some(node);
        }
        if !is_inline_tag(&tag) {
            element_count += 1;
        }
    }

    let text_len = total.saturating_sub(hidden_len);
    TextStats {
        text_len,
        link_text_len: link_text_len.min(text_len),
        element_count,
    }
}

/// Content density score of a single element; never negative.
#[must_use]
pub fn text_density<E: Element>(element: &E) -> f64 {
    text_stats(element).density()
}

/// Proportion of the element's visible text found inside links.
#[must_use]
pub fn link_density<E: Element>(element: &E) -> f64 {
    text_stats(element).link_density()
}
