//! Heading Extraction
//!
//! Walks a located content root, collects its headings in document order,
//! and turns them into an outline: sequential ids, unique anchors, trimmed
//! text, and indent levels relative to the shallowest heading present.

use serde::Serialize;
use tracing::debug;

use crate::anchor::AnchorRegistry;
use crate::patterns::normalize_whitespace;
use crate::selector::rules::{DEFAULT_ARIA_LEVEL, SEMANTIC_HEADINGS};
use crate::selector::query_all;
use crate::tags::heading_rank;
use crate::tree::Element;
use crate::Options;

/// One entry of the extracted outline.
///
/// `E` is the source element handle; [`Heading::detach`] drops it so the
/// entry can outlive the document it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heading<E = ()> {
    /// Zero-based position in document order.
    pub id: usize,
    /// Unique, DOM-safe fragment identifier.
    pub anchor: String,
    /// Visible heading text, whitespace-collapsed and trimmed.
    pub text: String,
    /// Nesting depth, 0 for the shallowest heading rank present.
    pub indent_level: usize,
    /// Raw heading rank, `h1` = 1 through `h6` = 6.
    pub rank: u8,
    /// The heading element in the source tree.
    #[serde(skip)]
    pub source: E,
}

impl<E> Heading<E> {
    /// Drop the element reference.
    #[must_use]
    pub fn detach(self) -> Heading {
        Heading {
            id: self.id,
            anchor: self.anchor,
            text: self.text,
            indent_level: self.indent_level,
            rank: self.rank,
            source: (),
        }
    }
}

/// Rank of a heading element: its `hN` number, or the clamped `aria-level`
/// of a `role="heading"` element.
#[must_use]
pub fn rank_of<E: Element>(element: &E) -> Option<u8> {
    if let Some(rank) = heading_rank(&element.tag_name()) {
        return Some(rank);
    }
    let is_aria_heading = element
        .attr("role")
        .is_some_and(|role| role.split_whitespace().any(|t| t.eq_ignore_ascii_case("heading")));
    if !is_aria_heading {
        return None;
    }
    let level = element
        .attr("aria-level")
        .and_then(|v| v.trim().parse::<u8>().ok())
        .unwrap_or(DEFAULT_ARIA_LEVEL);
    Some(level.clamp(1, 6))
}

/// Extract the heading outline of `root` with default options.
#[must_use]
pub fn extract<E: Element>(root: &E) -> Vec<Heading<E>> {
    extract_with_options(root, &Options::default())
}

/// Extract the heading outline of `root`.
///
/// Returns an empty list when the subtree holds no headings.
#[must_use]
pub fn extract_with_options<E: Element>(root: &E, options: &Options) -> Vec<Heading<E>> {
    let descendants = root.descendants();
    let reserved = descendants
        .iter()
        .filter_map(|el| el.attr("id"))
        .filter(|id| !id.trim().is_empty());
    let mut anchors = AnchorRegistry::with_reserved(reserved);

    let mut headings: Vec<Heading<E>> = Vec::new();
    for element in query_all(root, SEMANTIC_HEADINGS) {
        // a `role="heading"` on a non-heading tag with nested `hN` is counted once
        if headings.iter().any(|h| element.is_descendant_of(&h.source)) {
            continue;
        }
        let Some(rank) = rank_of(&element) else {
            continue;
        };

        let text = normalize_whitespace(&element.text());
        if text.is_empty() && options.skip_empty_headings {
            debug!(rank, "skipping heading without text");
            continue;
        }

        let id = headings.len();
        let existing = element.attr("id");
        let anchor = anchors.assign(id, existing.as_deref(), &text);
        headings.push(Heading {
            id,
            anchor,
            text,
            indent_level: 0,
            rank,
            source: element,
        });
    }

    if let Some(min_rank) = headings.iter().map(|h| h.rank).min() {
        for heading in &mut headings {
            heading.indent_level = usize::from(heading.rank - min_rank);
        }
    }

    headings
}
