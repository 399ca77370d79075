//! Configuration options for content-root location and heading extraction.
//!
//! The `Options` struct holds the tunable heuristic thresholds. Selector
//! lists and tag catalogs are fixed data in [`crate::selector::rules`] and
//! [`crate::tags`].

use crate::error::{Error, Result};

/// Tunable thresholds for the qualification filter and heading extractor.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use content_outline::Options;
///
/// let options = Options {
///     min_article_text_len: 500,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Minimum visible text (characters) for a candidate to qualify as an
    /// article root.
    ///
    /// Default: `200`
    pub min_article_text_len: usize,

    /// Maximum share of a candidate's visible text that may sit inside
    /// links. Candidates above it read as navigation.
    ///
    /// Must lie in `0.0..=1.0`.
    ///
    /// Default: `0.5`
    pub max_link_density: f64,

    /// Minimum number of nested block-level descendants (paragraphs,
    /// headings, lists, ...) a candidate must contain.
    ///
    /// Default: `1`
    pub min_block_descendants: usize,

    /// Skip headings whose visible text is empty after trimming.
    ///
    /// Default: `true`
    pub skip_empty_headings: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_article_text_len: 200,
            max_link_density: 0.5,
            min_block_descendants: 1,
            skip_empty_headings: true,
        }
    }
}

impl Options {
    /// Check that every threshold lies in its valid range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.max_link_density) {
            return Err(Error::InvalidOptions(format!(
                "max_link_density must be within 0.0..=1.0, got {}",
                self.max_link_density
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_thresholds() {
        let opts = Options::default();

        assert_eq!(opts.min_article_text_len, 200);
        assert!((opts.max_link_density - 0.5).abs() < f64::EPSILON);
        assert_eq!(opts.min_block_descendants, 1);
        assert!(opts.skip_empty_headings);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            min_article_text_len: 50,
            max_link_density: 0.9,
            ..Options::default()
        };

        assert_eq!(opts.min_article_text_len, 50);
        assert!((opts.max_link_density - 0.9).abs() < f64::EPSILON);
        assert_eq!(opts.min_block_descendants, 1);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_link_density_out_of_range_is_rejected() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let opts = Options {
                max_link_density: bad,
                ..Options::default()
            };
            assert!(matches!(opts.validate(), Err(Error::InvalidOptions(_))), "{bad} accepted");
        }
    }
}
