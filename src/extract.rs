//! One extraction pass over an HTML document.
//!
//! Parses the document, locates the content root, extracts its headings,
//! and packs everything into an owned [`Outline`]. Nothing is cached: each
//! call re-reads the document from scratch.

use tracing::debug;

use crate::density::text_stats;
use crate::dom::{self, Document, NodeRef};
use crate::error::Result;
use crate::headings::{self, Heading};
use crate::locate::{self, Located};
use crate::options::Options;
use crate::patterns::normalize_whitespace;
use crate::result::{ContentRoot, Outline};
use crate::tree::Element;

/// Main entry point for outline extraction.
pub(crate) fn extract_outline(html: &str, options: &Options) -> Result<Outline> {
    options.validate()?;

    let document = dom::parse(html);
    let outline = outline_document(&document, options);

    debug!(
        found = outline.content_root.is_some(),
        headings = outline.headings.len(),
        "extraction complete"
    );
    Ok(outline)
}

/// Build an outline from an already-parsed document.
#[must_use]
pub fn outline_document(document: &Document, options: &Options) -> Outline {
    let Some(body) = dom::body(document) else {
        return Outline::default();
    };

    let title = locate::title_element(&body)
        .map(|el| normalize_whitespace(&Element::text(&el)))
        .filter(|t| !t.is_empty());

    let Some(located) = locate::locate_with_strategy(&body, options) else {
        return Outline {
            title,
            ..Outline::default()
        };
    };

    let headings = headings::extract_with_options(&located.root, options)
        .into_iter()
        .map(Heading::detach)
        .collect();

    Outline {
        content_root: Some(describe_root(&located)),
        title,
        headings,
    }
}

fn describe_root(located: &Located<NodeRef<'_>>) -> ContentRoot {
    let root = &located.root;
    let stats = text_stats(root);
    ContentRoot {
        tag: Element::tag_name(root),
        id: Element::attr(root, "id"),
        class: Element::attr(root, "class"),
        strategy: located.strategy,
        density: stats.density(),
        text_len: stats.text_len,
    }
}
