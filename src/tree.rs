//! Read-only document tree interface.
//!
//! The locator and heading extractor never touch a concrete DOM. They walk
//! any tree that can answer the handful of questions below, so the same
//! heuristics run against a parsed `dom_query` document (see [`crate::dom`])
//! or any other in-memory representation.

/// A handle to one element of an externally-owned document tree.
///
/// Handles are expected to be cheap to clone (a node id plus a tree
/// reference). Implementations must not mutate the tree.
pub trait Element: Clone {
    /// Lowercase tag name, empty for non-element nodes.
    fn tag_name(&self) -> String;

    /// Attribute value, `None` when absent.
    fn attr(&self, name: &str) -> Option<String>;

    /// Parent element, `None` at the top of the tree or when the parent
    /// is not an element (e.g. the document node).
    fn parent_element(&self) -> Option<Self>;

    /// Direct element children in document order.
    fn children(&self) -> Vec<Self>;

    /// All element descendants in document order, excluding `self`.
    fn descendants(&self) -> Vec<Self>;

    /// Concatenated text of all descendant text nodes.
    fn text(&self) -> String;

    /// Identity comparison: both handles point at the same node.
    fn is_same(&self, other: &Self) -> bool;

    /// Check whether `self` lies strictly below `ancestor`.
    fn is_descendant_of(&self, ancestor: &Self) -> bool {
        let mut current = self.parent_element();
        while let Some(node) = current {
            if node.is_same(ancestor) {
                return true;
            }
            current = node.parent_element();
        }
        false
    }
}
