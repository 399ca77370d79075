//! Result types for outline extraction.
//!
//! An [`Outline`] is fully owned: it survives the document it was
//! extracted from and serializes to JSON for the presentation layer.

use serde::Serialize;

use crate::error::Result;
use crate::headings::Heading;
use crate::locate::Strategy;

/// Description of the element chosen as the content root.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentRoot {
    /// Lowercase tag name.
    pub tag: String,

    /// `id` attribute, if any.
    pub id: Option<String>,

    /// `class` attribute, if any.
    pub class: Option<String>,

    /// Strategy that found the root.
    pub strategy: Strategy,

    /// Density score of the root.
    pub density: f64,

    /// Visible text length of the root (characters).
    pub text_len: usize,
}

/// Result of one extraction pass.
///
/// `content_root` is `None` when the document has no extractable content;
/// `headings` is empty when there is nothing to show. Neither is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Outline {
    /// The located content root.
    pub content_root: Option<ContentRoot>,

    /// Text of the document's first heading, the title element used to
    /// position the outline. Present even when no content root was found.
    pub title: Option<String>,

    /// Headings of the content root in document order.
    pub headings: Vec<Heading>,
}

impl Outline {
    /// Whether there is nothing to render.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Serialize the outline as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Look up a heading by its anchor, as when a `#fragment` changes.
    #[must_use]
    pub fn heading_by_anchor(&self, anchor: &str) -> Option<&Heading> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        self.headings.iter().find(|h| h.anchor == anchor)
    }
}
