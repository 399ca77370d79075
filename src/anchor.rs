//! Heading anchors.
//!
//! Every heading in one extraction pass gets a unique, DOM-safe anchor.
//! Author-supplied `id` attributes are reused when they are still free;
//! otherwise a slug is derived from the heading text and disambiguated
//! deterministically:
//!
//! 1. `slug` when unused,
//! 2. `slug-{id}` where `id` is the heading's sequential id,
//! 3. `slug-{id}-{k}` for `k = 2, 3, ...` until free.
//!
//! An empty slug (text without letters or digits) falls back to
//! `heading-{id}`.

use std::collections::HashSet;

/// Prefix for slugs that would otherwise start with a digit, which a
/// `#fragment` CSS selector cannot address.
const DIGIT_PREFIX: &str = "h-";

/// Base of generated anchors for headings without usable text.
const FALLBACK_PREFIX: &str = "heading";

/// Derive a URL-fragment-safe slug from heading text.
///
/// Lowercases, keeps Unicode letters and digits, turns whitespace, `-`, `_`
/// and `.` into single dashes, drops everything else, and trims dashes.
///
/// # Example
///
/// ```rust
/// use content_outline::anchor::slugify;
///
/// assert_eq!(slugify("  Getting Started: Part 2 "), "getting-started-part-2");
/// assert_eq!(slugify("2024 Roadmap"), "h-2024-roadmap");
/// assert_eq!(slugify("¿?!"), "");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else if ch.is_whitespace() || matches!(ch, '-' | '_' | '.') {
            pending_dash = true;
        }
    }

    if slug.starts_with(|c: char| c.is_ascii_digit()) {
        slug.insert_str(0, DIGIT_PREFIX);
    }
    slug
}

/// An author `id` usable as-is in a `#fragment`.
fn is_fragment_safe(id: &str) -> bool {
    !id.is_empty() && !id.contains(char::is_whitespace)
}

/// Tracks anchors handed out during one extraction pass.
#[derive(Debug, Default, Clone)]
pub struct AnchorRegistry {
    assigned: HashSet<String>,
    reserved: HashSet<String>,
}

impl AnchorRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that never generates any of `reserved`.
    ///
    /// Pass the `id` attributes already present in the content root so a
    /// generated anchor cannot shadow an unrelated element. Headings may
    /// still claim their own reserved `id` through [`Self::assign`].
    #[must_use]
    pub fn with_reserved<I, S>(reserved: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assigned: HashSet::new(),
            reserved: reserved.into_iter().map(Into::into).collect(),
        }
    }

    /// Assign an anchor for heading `id`.
    ///
    /// `existing` is the element's own `id` attribute, reused verbatim when
    /// it is a usable fragment (non-empty, no whitespace) and not yet handed
    /// out in this pass.
    pub fn assign(&mut self, id: usize, existing: Option<&str>, text: &str) -> String {
        if let Some(own) = existing.filter(|s| is_fragment_safe(s)) {
            if !self.assigned.contains(own) {
                return self.claim(own.to_string());
            }
        }

        let mut base = slugify(text);
        if base.is_empty() {
            base = format!("{FALLBACK_PREFIX}-{id}");
        }
        if self.is_free(&base) {
            return self.claim(base);
        }

        let suffixed = format!("{base}-{id}");
        if self.is_free(&suffixed) {
            return self.claim(suffixed);
        }

        let mut k = 2usize;
        loop {
            let candidate = format!("{suffixed}-{k}");
            if self.is_free(&candidate) {
                return self.claim(candidate);
            }
            k += 1;
        }
    }

    /// Number of anchors assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Whether no anchor was assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    fn is_free(&self, anchor: &str) -> bool {
        !self.assigned.contains(anchor) && !self.reserved.contains(anchor)
    }

    fn claim(&mut self, anchor: String) -> String {
        self.assigned.insert(anchor.clone());
        anchor
    }
}
