//! Content-Region Locator
//!
//! Finds the single element holding a document's main content by trying
//! three strategies in order of confidence:
//!
//! 1. **Direct**: the densest semantic article container (`<article>`,
//!    `<main>`, `[role=main]`, ...). If one exists but fails qualification
//!    the search stops: a declared article that defeats the heuristics is
//!    not second-guessed.
//! 2. **Heading**: the densest ancestor of the first heading in the
//!    document. Only tried when no semantic container produced a candidate.
//! 3. **Paragraph**: the densest ancestor of the densest paragraph.
//!
//! The first strategy whose candidate qualifies wins.

use serde::Serialize;
use tracing::debug;

use crate::candidate::max_density_element;
use crate::qualify::is_article_node;
use crate::selector::rules::{PARAGRAPH_SELECTORS, SEMANTIC_ARTICLE_SELECTORS, SEMANTIC_HEADINGS};
use crate::selector::{query, query_all};
use crate::tree::Element;
use crate::Options;

/// Which strategy produced the content root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Semantic article container found by selector.
    Direct,
    /// Densest ancestor of the first heading.
    Heading,
    /// Densest ancestor of the densest paragraph.
    Paragraph,
}

/// A located content root and the strategy that found it.
#[derive(Debug, Clone)]
pub struct Located<E> {
    /// The chosen content root.
    pub root: E,
    /// How it was found.
    pub strategy: Strategy,
}

/// Ancestors of `element`, parent first, up to but excluding `boundary`.
///
/// When `boundary` is not an ancestor the walk continues to the top of the
/// tree.
#[must_use]
pub fn ancestors<E: Element>(element: &E, boundary: &E) -> Vec<E> {
    let mut chain = Vec::new();
    let mut current = element.parent_element();
    while let Some(parent) = current {
        if parent.is_same(boundary) {
            break;
        }
        current = parent.parent_element();
        chain.push(parent);
    }
    chain
}

/// The first semantic heading anywhere in the document, used as the title
/// element for positioning the outline.
#[must_use]
pub fn title_element<E: Element>(body: &E) -> Option<E> {
    query(body, SEMANTIC_HEADINGS)
}

/// Locate the content root below `body` with default options.
#[must_use]
pub fn locate<E: Element>(body: &E) -> Option<E> {
    locate_with_options(body, &Options::default())
}

/// Locate the content root below `body`.
#[must_use]
pub fn locate_with_options<E: Element>(body: &E, options: &Options) -> Option<E> {
    locate_with_strategy(body, options).map(|located| located.root)
}

/// Locate the content root and report which strategy found it.
///
/// `None` means the document has no extractable content, which is an
/// ordinary outcome rather than an error.
#[must_use]
pub fn locate_with_strategy<E: Element>(body: &E, options: &Options) -> Option<Located<E>> {
    if let Some(article) = search_directly(body) {
        if is_article_node(&article, options) {
            debug!(tag = %article.tag_name(), "content root found by direct search");
            return Some(Located {
                root: article,
                strategy: Strategy::Direct,
            });
        }
        debug!(tag = %article.tag_name(), "direct candidate disqualified, giving up");
        return None;
    }

    if let Some(heading) = query(body, SEMANTIC_HEADINGS) {
        if let Some(root) = search_by_heading(body, &heading, options) {
            debug!(tag = %root.tag_name(), "content root found by heading ancestors");
            return Some(Located {
                root,
                strategy: Strategy::Heading,
            });
        }
    }

    if let Some(root) = search_by_paragraph(body, options) {
        debug!(tag = %root.tag_name(), "content root found by paragraph ancestors");
        return Some(Located {
            root,
            strategy: Strategy::Paragraph,
        });
    }

    debug!("no content root found");
    None
}

/// Densest semantic article container, unqualified.
#[must_use]
pub fn search_directly<E: Element>(body: &E) -> Option<E> {
    max_density_element(query_all(body, SEMANTIC_ARTICLE_SELECTORS))
}

/// Densest qualifying ancestor of `heading`.
#[must_use]
pub fn search_by_heading<E: Element>(body: &E, heading: &E, options: &Options) -> Option<E> {
    max_density_element(ancestors(heading, body)).filter(|el| is_article_node(el, options))
}

/// Densest qualifying ancestor of the document's densest paragraph.
#[must_use]
pub fn search_by_paragraph<E: Element>(body: &E, options: &Options) -> Option<E> {
    let paragraph = max_density_element(query_all(body, PARAGRAPH_SELECTORS))?;
    max_density_element(ancestors(&paragraph, body)).filter(|el| is_article_node(el, options))
}
