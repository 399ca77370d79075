//! Candidate Selection
//!
//! Picks the densest element out of a candidate pool. Ignored tags are
//! skipped outright, so they can never win, not even when nothing else in
//! the pool has any text.

use tracing::trace;

use crate::density::text_density;
use crate::tags::is_ignored_tag;
use crate::tree::Element;

/// Return the element with the strictly greatest density score.
///
/// Ties go to the first element in input order. Returns `None` for an
/// empty pool, a pool of ignored tags only, or a pool where every element
/// scores zero.
#[must_use]
pub fn max_density_element<E, I>(elements: I) -> Option<E>
where
    E: Element,
    I: IntoIterator<Item = E>,
{
    max_density_element_scored(elements).map(|(element, _)| element)
}

/// Like [`max_density_element`], also returning the winning score.
#[must_use]
pub fn max_density_element_scored<E, I>(elements: I) -> Option<(E, f64)>
where
    E: Element,
    I: IntoIterator<Item = E>,
{
    let mut best: Option<(E, f64)> = None;

    for element in elements {
        let tag = element.tag_name();
        if is_ignored_tag(&tag) {
            continue;
        }

        let density = text_density(&element);
        trace!(tag = %tag, density, "scored candidate");

        let current_max = best.as_ref().map_or(0.0, |(_, score)| *score);
        if density > current_max {
            best = Some((element, density));
        }
    }

    best
}
