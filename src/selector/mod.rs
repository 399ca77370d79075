//! Selector Infrastructure
//!
//! Selectors are plain data: a [`Matcher`] names a tag or an attribute
//! value, and lists of matchers (see [`rules`]) describe which elements
//! count as article containers, headings, or paragraphs. Queries walk the
//! tree in document order and test each element against the list.

use crate::tree::Element;

pub mod rules;

/// A single selector predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Element with the given (lowercase) tag name, like `article`.
    Tag(&'static str),
    /// Element whose attribute equals the value, like `[role="main"]`.
    Attr(&'static str, &'static str),
    /// Element with the given tag whose attribute equals the value,
    /// like `div[role="main"]`.
    TagAttr(&'static str, &'static str, &'static str),
}

impl Matcher {
    /// Test one element against this matcher.
    #[must_use]
    pub fn matches<E: Element>(&self, element: &E) -> bool {
        match *self {
            Self::Tag(tag) => element.tag_name() == tag,
            Self::Attr(name, value) => attr_equals(element, name, value),
            Self::TagAttr(tag, name, value) => {
                element.tag_name() == tag && attr_equals(element, name, value)
            }
        }
    }
}

/// Attribute holds `value` as one of its whitespace-separated tokens.
fn attr_equals<E: Element>(element: &E, name: &str, value: &str) -> bool {
    element
        .attr(name)
        .is_some_and(|v| v.split_whitespace().any(|token| token.eq_ignore_ascii_case(value)))
}

/// Check an element against a selector list (logical OR, like a
/// comma-joined CSS selector).
#[must_use]
pub fn matches_any<E: Element>(element: &E, selectors: &[Matcher]) -> bool {
    selectors.iter().any(|m| m.matches(element))
}

/// Query for the first descendant of `root` matching any selector.
///
/// Iterates descendants in document order; `root` itself is not tested.
#[must_use]
pub fn query<E: Element>(root: &E, selectors: &[Matcher]) -> Option<E> {
    root.descendants()
        .into_iter()
        .find(|el| matches_any(el, selectors))
}

/// Query for all descendants of `root` matching any selector, in document
/// order, each element at most once.
#[must_use]
pub fn query_all<E: Element>(root: &E, selectors: &[Matcher]) -> Vec<E> {
    root.descendants()
        .into_iter()
        .filter(|el| matches_any(el, selectors))
        .collect()
}
