//! # content-outline
//!
//! Finds the main content region of an arbitrary HTML document and
//! extracts its heading outline: the engine behind a floating
//! table-of-contents overlay.
//!
//! ## Quick Start
//!
//! ```rust
//! use content_outline::extract;
//!
//! let prose = "A sentence of real article prose. ".repeat(20);
//! let html = format!(
//!     "<html><body><nav><a href='/'>Home</a></nav>\
//!      <article><h1>Guide</h1><p>{prose}</p><h2>Install</h2><p>{prose}</p></article>\
//!      </body></html>"
//! );
//!
//! let outline = extract(&html)?;
//! assert_eq!(outline.headings.len(), 2);
//! assert_eq!(outline.headings[1].anchor, "install");
//! assert_eq!(outline.headings[1].indent_level, 1);
//! # Ok::<(), content_outline::Error>(())
//! ```
//!
//! ## How it works
//!
//! - **Density scoring** ranks elements by non-link text per block of
//!   structure ([`density`]).
//! - **Candidate selection** picks the densest element of a pool, never an
//!   ignored tag ([`candidate`]).
//! - **Qualification** rejects implausible roots such as comment boxes,
//!   pull-quotes and link lists ([`qualify`]).
//! - **Location** tries semantic containers, then heading ancestors, then
//!   paragraph ancestors ([`locate`]).
//! - **Heading extraction** assigns ids, anchors and relative indent levels
//!   ([`headings`], [`anchor`]).
//!
//! The core is generic over the read-only [`tree::Element`] interface; the
//! `dom_query` binding lives in [`dom`].

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Read-only document tree interface.
pub mod tree;

/// `dom_query` binding of the tree interface.
pub mod dom;

/// Tag catalogs for scoring and qualification.
pub mod tags;

/// Selector data and predicate queries.
pub mod selector;

/// Text density scoring.
pub mod density;

/// Densest-candidate selection.
pub mod candidate;

/// Article qualification filter.
pub mod qualify;

/// Content-region locator.
pub mod locate;

/// Heading outline extraction.
pub mod headings;

/// Anchor slugs and collision handling.
pub mod anchor;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::outline_document;
pub use headings::Heading;
pub use locate::Strategy;
pub use options::Options;
pub use result::{ContentRoot, Outline};

/// Extracts the outline of an HTML document using default options.
///
/// A document without a content root or without headings yields an empty
/// [`Outline`], not an error.
///
/// # Example
///
/// ```rust
/// use content_outline::extract;
///
/// let outline = extract("<html><body><nav>Home</nav></body></html>")?;
/// assert!(outline.content_root.is_none());
/// assert!(outline.is_empty());
/// # Ok::<(), content_outline::Error>(())
/// ```
pub fn extract(html: &str) -> Result<Outline> {
    extract_with_options(html, &Options::default())
}

/// Extracts the outline of an HTML document with custom options.
///
/// Returns `Err(Error::InvalidOptions)` when a threshold is out of range.
///
/// # Example
///
/// ```rust
/// use content_outline::{extract_with_options, Options};
///
/// let options = Options {
///     min_article_text_len: 20,
///     ..Options::default()
/// };
/// let html = "<article><h2>Short</h2><p>Just a little text here.</p></article>";
/// let outline = extract_with_options(html, &options)?;
/// assert_eq!(outline.headings.len(), 1);
/// # Ok::<(), content_outline::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<Outline> {
    extract::extract_outline(html, options)
}

/// Extracts the outline of HTML bytes with automatic encoding detection.
///
/// The encoding comes from a byte order mark or a `<meta>` charset
/// declaration and defaults to UTF-8.
///
/// # Example
///
/// ```rust
/// use content_outline::{extract_bytes_with_options, Options};
///
/// let html = b"<meta charset=\"ISO-8859-1\"><article><h2>Caf\xE9</h2><p>Some text in a paragraph.</p></article>";
/// let options = Options { min_article_text_len: 10, ..Options::default() };
/// let outline = extract_bytes_with_options(html, &options)?;
/// assert_eq!(outline.headings[0].text, "Café");
/// # Ok::<(), content_outline::Error>(())
/// ```
pub fn extract_bytes(html: &[u8]) -> Result<Outline> {
    extract_bytes_with_options(html, &Options::default())
}

/// Extracts the outline of HTML bytes with custom options and automatic
/// encoding detection.
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<Outline> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
