//! DOM Operations Adapter
//!
//! Binds the read-only [`Element`] interface to the `dom_query` crate and
//! offers a few free functions over `Selection` used at the crate boundary
//! (parsing, finding `<body>`, reading attributes).

pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

use crate::tree::Element;

// === Attribute and Text ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

// === Document Access ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// The `<body>` element, the boundary of every ancestor walk.
///
/// html5ever always synthesizes a body, so this only returns `None` for
/// documents parsed as fragments.
#[must_use]
pub fn body(doc: &Document) -> Option<NodeRef<'_>> {
    doc.select("body").nodes().first().copied()
}

impl Element for NodeRef<'_> {
    fn tag_name(&self) -> String {
        if !self.is_element() {
            return String::new();
        }
        self.node_name()
            .map(|t| t.to_ascii_lowercase())
            .unwrap_or_default()
    }

    fn attr(&self, name: &str) -> Option<String> {
        get_attribute(&Selection::from(*self), name)
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent().filter(NodeRef::is_element)
    }

    fn children(&self) -> Vec<Self> {
        Selection::from(*self).children().nodes().to_vec()
    }

    fn descendants(&self) -> Vec<Self> {
        Selection::from(*self).select("*").nodes().to_vec()
    }

    fn text(&self) -> String {
        text_content(&Selection::from(*self)).to_string()
    }

    fn is_same(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
